//! PaneEdit - Clipboard Edits on a Text Pane
//!
//! The panes are gpui-component inputs, whose input handler reports the
//! selection in UTF-16 code units. A [`PaneSnapshot`] holds one pane's text,
//! selection and caret as byte offsets so the copy/cut/paste rules can be
//! decided without a window. The [`PaneEdit`] it produces goes back to the
//! input in UTF-16.

use std::ops::Range;

/// Text, selection and caret of one pane at the moment of a clipboard action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneSnapshot {
    text: String,
    selection: Range<usize>,
    caret: usize,
}

/// A replacement to apply to a pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneEdit {
    /// Replaced range in UTF-16 code units
    pub range_utf16: Range<usize>,
    pub text: String,
}

impl PaneSnapshot {
    /// `selection_utf16` comes from the input handler; `caret` is a byte offset
    pub fn new(text: impl Into<String>, selection_utf16: Range<usize>, caret: usize) -> Self {
        let text = text.into();
        let start = byte_offset(&text, selection_utf16.start);
        let end = byte_offset(&text, selection_utf16.end);
        let caret = floor_char_boundary(&text, caret);

        Self {
            selection: start.min(end)..start.max(end),
            caret,
            text,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The selected text, `None` when the selection is empty
    pub fn selected_text(&self) -> Option<&str> {
        if self.selection.is_empty() {
            None
        } else {
            Some(&self.text[self.selection.clone()])
        }
    }

    /// Edit deleting the selection, `None` when nothing is selected
    pub fn cut_edit(&self) -> Option<PaneEdit> {
        if self.selection.is_empty() {
            return None;
        }
        Some(PaneEdit {
            range_utf16: self.utf16_range(&self.selection),
            text: String::new(),
        })
    }

    /// Edit inserting `text` at the caret. Selected text stays in the pane.
    pub fn paste_edit(&self, text: &str) -> PaneEdit {
        PaneEdit {
            range_utf16: self.utf16_range(&(self.caret..self.caret)),
            text: text.to_string(),
        }
    }

    /// Pane text once `edit` is applied
    #[cfg(test)]
    pub(crate) fn apply(&self, edit: &PaneEdit) -> String {
        let start = byte_offset(&self.text, edit.range_utf16.start);
        let end = byte_offset(&self.text, edit.range_utf16.end);

        let mut text = String::with_capacity(self.text.len() + edit.text.len());
        text.push_str(&self.text[..start]);
        text.push_str(&edit.text);
        text.push_str(&self.text[end..]);
        text
    }

    fn utf16_range(&self, range: &Range<usize>) -> Range<usize> {
        utf16_offset(&self.text, range.start)..utf16_offset(&self.text, range.end)
    }
}

/// Byte offset of the `utf16`-th code unit, clamped to the text
fn byte_offset(text: &str, utf16: usize) -> usize {
    let mut units = 0;
    for (index, ch) in text.char_indices() {
        if units >= utf16 {
            return index;
        }
        units += ch.len_utf16();
    }
    text.len()
}

fn utf16_offset(text: &str, byte: usize) -> usize {
    text[..byte].encode_utf16().count()
}

fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paste_inserts_at_caret_and_keeps_selection() {
        // "wor" selected left to right, caret at its end
        let snapshot = PaneSnapshot::new("hello world", 6..9, 9);
        let edit = snapshot.paste_edit("X");
        assert_eq!(edit.range_utf16, 9..9);
        assert_eq!(snapshot.apply(&edit), "hello worXld");
    }

    #[test]
    fn paste_without_selection_inserts_at_caret() {
        let snapshot = PaneSnapshot::new("ab", 1..1, 1);
        assert_eq!(snapshot.apply(&snapshot.paste_edit("hello")), "ahellob");
    }

    #[test]
    fn selected_text_reads_the_selection() {
        let snapshot = PaneSnapshot::new("say hello now", 4..9, 9);
        assert_eq!(snapshot.selected_text(), Some("hello"));
    }

    #[test]
    fn empty_selection_has_no_text_or_cut() {
        let snapshot = PaneSnapshot::new("hello", 2..2, 2);
        assert_eq!(snapshot.selected_text(), None);
        assert_eq!(snapshot.cut_edit(), None);
    }

    #[test]
    fn cut_edit_removes_selection() {
        let snapshot = PaneSnapshot::new("one two three", 4..8, 8);
        let edit = snapshot.cut_edit().expect("selection");
        assert_eq!(snapshot.apply(&edit), "one three");
    }

    #[test]
    fn sinhala_offsets_convert_between_utf16_and_bytes() {
        // Each Sinhala code point is one UTF-16 unit and three UTF-8 bytes
        let text = "ආයුබෝවන් world";
        let snapshot = PaneSnapshot::new(text, 0..8, "ආයුබෝවන්".len());
        assert_eq!(snapshot.selected_text(), Some("ආයුබෝවන්"));

        let edit = snapshot.paste_edit("!");
        assert_eq!(edit.range_utf16, 8..8);
        assert_eq!(snapshot.apply(&edit), "ආයුබෝවන්! world");
    }

    #[test]
    fn out_of_range_offsets_are_clamped() {
        let snapshot = PaneSnapshot::new("කා", 0..10, 100);
        assert_eq!(snapshot.selected_text(), Some("කා"));
        assert_eq!(snapshot.paste_edit("x").range_utf16, 2..2);
    }
}
