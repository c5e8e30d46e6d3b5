//! Header Component
//!
//! The title bar with the application name and the theme toggle.

use gpui::{
    div, px, App, ClickEvent, FontWeight, IntoElement, ParentElement, RenderOnce, Styled, Window,
};

use crate::components::primitives::button::{Button, ButtonSize};
use crate::constants::{APP_TITLE, TITLE_BAR_HEIGHT};
use crate::theme::{ThemeMode, Typography};

/// Title bar element
#[derive(IntoElement)]
pub struct Header {
    theme: ThemeMode,
    on_toggle_theme: Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>,
}

impl Header {
    pub fn new(
        theme: ThemeMode,
        on_toggle_theme: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        Self {
            theme,
            on_toggle_theme: Box::new(on_toggle_theme),
        }
    }
}

impl RenderOnce for Header {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let palette = self.theme.palette();

        div()
            .h(px(TITLE_BAR_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .px_3()
            .bg(palette.title_bg)
            .child(
                div()
                    .text_color(palette.title_text)
                    .text_size(px(Typography::TITLE))
                    .font_weight(FontWeight::BOLD)
                    .child(APP_TITLE),
            )
            .child(
                Button::new("theme-toggle", self.theme.toggle_label())
                    .colors(palette.toggle)
                    .size(ButtonSize::Small)
                    .on_click(self.on_toggle_theme),
            )
    }
}
