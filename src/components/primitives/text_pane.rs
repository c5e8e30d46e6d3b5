//! TextPane Component
//!
//! A multi-line gpui-component input used for both translator panes. Typing,
//! IME composition, mouse selection and scrolling come from the input; the
//! pane adds reading a [`PaneSnapshot`] for the clipboard buttons and
//! applying the resulting [`PaneEdit`] or full-text update.

use gpui::{px, App, AppContext, Entity, EntityInputHandler, Styled, Window};
use gpui_component::input::{Input, InputState};

use crate::constants::TEXT_PANE_HEIGHT;
use crate::state::{PaneEdit, PaneSnapshot};
use crate::theme::{Palette, Typography};

/// Handle to one pane's input state
#[derive(Clone)]
pub struct TextPane {
    state: Entity<InputState>,
}

impl TextPane {
    pub fn new(window: &mut Window, cx: &mut App) -> Self {
        let state = cx.new(|cx| InputState::new(window, cx).multi_line(true));
        Self { state }
    }

    /// Current pane text
    pub fn text(&self, cx: &App) -> String {
        self.state.read(cx).value().to_string()
    }

    /// Replace the whole pane text
    pub fn set_text(&self, text: String, window: &mut Window, cx: &mut App) {
        self.state
            .update(cx, |input, cx| input.set_value(text, window, cx));
    }

    /// Text, selection and caret as they are right now
    pub fn snapshot(&self, window: &mut Window, cx: &mut App) -> PaneSnapshot {
        self.state.update(cx, |input, cx| {
            let selection = input
                .selected_text_range(false, window, cx)
                .map(|selection| selection.range)
                .unwrap_or_default();
            PaneSnapshot::new(input.value().to_string(), selection, input.cursor())
        })
    }

    /// Apply a clipboard edit
    pub fn apply(&self, edit: PaneEdit, window: &mut Window, cx: &mut App) {
        self.state.update(cx, |input, cx| {
            input.replace_text_in_range(Some(edit.range_utf16), &edit.text, window, cx);
        });
    }

    pub fn focus(&self, window: &mut Window, cx: &mut App) {
        self.state.update(cx, |input, cx| input.focus(window, cx));
    }

    /// Input element styled from the active palette
    pub fn render(&self, palette: &Palette) -> Input {
        Input::new(&self.state)
            .h(px(TEXT_PANE_HEIGHT))
            .bg(palette.text_bg)
            .text_color(palette.text_fg)
            .border_color(palette.text_border)
            .text_size(px(Typography::TEXT))
    }
}
