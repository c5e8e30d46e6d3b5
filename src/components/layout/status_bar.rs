//! Status Bar Component
//!
//! One line at the bottom of the window for model and clipboard messages.

use gpui::{div, px, App, IntoElement, ParentElement, RenderOnce, Styled, Window};

use crate::constants::{CONTENT_PADDING_X, STATUS_BAR_HEIGHT};
use crate::state::StatusLine;
use crate::theme::{Palette, Typography};

/// Status bar element
#[derive(IntoElement)]
pub struct StatusBar {
    line: Option<StatusLine>,
    palette: Palette,
}

impl StatusBar {
    pub fn new(line: Option<StatusLine>, palette: Palette) -> Self {
        Self { line, palette }
    }
}

impl RenderOnce for StatusBar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (color, message) = match self.line {
            Some(line) => (line.level.color(&self.palette), line.message),
            None => (self.palette.status_text, String::new()),
        };

        div()
            .h(px(STATUS_BAR_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .px(px(CONTENT_PADDING_X))
            .bg(self.palette.window_bg)
            .text_color(color)
            .text_size(px(Typography::STATUS))
            .overflow_hidden()
            .text_ellipsis()
            .whitespace_nowrap()
            .child(message)
    }
}
