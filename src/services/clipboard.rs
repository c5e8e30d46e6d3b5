//! Clipboard - Plain-text access to the system clipboard
//!
//! The clipboard buttons go through the [`Clipboard`] trait so the copy/cut/paste
//! rules stay independent of the window. GPUI's `App` is the real backend.

use gpui::{App, ClipboardItem};

/// Read/write access to a plain-text clipboard
pub trait Clipboard {
    /// Current clipboard text, `None` when empty or not text
    fn read_text(&mut self) -> Option<String>;

    /// Replace the clipboard contents
    fn write_text(&mut self, text: String);
}

impl Clipboard for App {
    fn read_text(&mut self) -> Option<String> {
        self.read_from_clipboard().and_then(|item| item.text())
    }

    fn write_text(&mut self, text: String) {
        self.write_to_clipboard(ClipboardItem::new_string(text));
    }
}

/// In-process clipboard used by tests
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryClipboard {
    pub contents: Option<String>,
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn read_text(&mut self) -> Option<String> {
        self.contents.clone()
    }

    fn write_text(&mut self, text: String) {
        self.contents = Some(text);
    }
}
