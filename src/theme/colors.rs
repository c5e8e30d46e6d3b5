//! Colors - Light and Dark Palettes
//!
//! Every widget takes its colors from the active [`Palette`]. Switching theme
//! swaps the whole table in one step, so nothing is ever half-restyled.

use gpui::{rgb, App, Rgba, Window};
use gpui_component::Theme;

/// Display theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite theme
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Color table for this theme
    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Light => Palette::light(),
            ThemeMode::Dark => Palette::dark(),
        }
    }

    /// Caption of the toggle button: it names the theme it switches to
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Dark Mode",
            ThemeMode::Dark => "Light Mode",
        }
    }

    /// Switch gpui-component widgets (the pane inputs) to this theme and
    /// carry the pane caret and selection colors over
    pub fn apply(self, window: Option<&mut Window>, cx: &mut App) {
        let palette = self.palette();
        Theme::change(self.component_mode(), window, cx);

        let theme = Theme::global_mut(cx);
        theme.caret = palette.caret.into();
        theme.selection = palette.selection_bg.into();
    }

    fn component_mode(self) -> gpui_component::ThemeMode {
        match self {
            ThemeMode::Light => gpui_component::ThemeMode::Light,
            ThemeMode::Dark => gpui_component::ThemeMode::Dark,
        }
    }
}

/// Background/foreground pair for the shared button style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonColors {
    pub bg: Rgba,
    pub text: Rgba,
    pub hover_bg: Rgba,
}

/// Full color table applied to the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Window and frame background
    pub window_bg: Rgba,
    /// Title bar
    pub title_bg: Rgba,
    pub title_text: Rgba,
    /// Pane labels
    pub label_bg: Rgba,
    pub label_text: Rgba,
    /// Theme toggle button
    pub toggle: ButtonColors,
    /// Shared style for every other button
    pub button: ButtonColors,
    /// Text panes
    pub text_bg: Rgba,
    pub text_fg: Rgba,
    pub text_border: Rgba,
    pub caret: Rgba,
    pub selection_bg: Rgba,
    /// Status bar
    pub status_text: Rgba,
    pub status_warn: Rgba,
    pub status_error: Rgba,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            window_bg: rgb(0xf3f8fb),
            title_bg: rgb(0x007acc),
            title_text: rgb(0xffffff),
            label_bg: rgb(0xf3f8fb),
            label_text: rgb(0x333333),
            toggle: ButtonColors {
                bg: rgb(0xd3d3d3),
                text: rgb(0x000000),
                hover_bg: rgb(0xa9a9a9),
            },
            button: ButtonColors {
                bg: rgb(0xd3d3d3),
                text: rgb(0x000000),
                hover_bg: rgb(0xa9a9a9),
            },
            text_bg: rgb(0xffffff),
            text_fg: rgb(0x000000),
            text_border: rgb(0x000000),
            caret: rgb(0x000000),
            selection_bg: rgb(0xb3d7ff),
            status_text: rgb(0x6b7280),
            status_warn: rgb(0xb45309),
            status_error: rgb(0xdc2626),
        }
    }

    pub fn dark() -> Self {
        Self {
            window_bg: rgb(0x2e2e2e),
            title_bg: rgb(0x1f1f1f),
            title_text: rgb(0xffffff),
            label_bg: rgb(0x2e2e2e),
            label_text: rgb(0xffffff),
            toggle: ButtonColors {
                bg: rgb(0x4a4a4a),
                text: rgb(0x000000),
                hover_bg: rgb(0xa9a9a9),
            },
            button: ButtonColors {
                bg: rgb(0x4a4a4a),
                text: rgb(0x000000),
                hover_bg: rgb(0xa9a9a9),
            },
            text_bg: rgb(0x333333),
            text_fg: rgb(0xffffff),
            text_border: rgb(0x5a5a5a),
            caret: rgb(0xffffff),
            selection_bg: rgb(0x264f78),
            status_text: rgb(0x9ca3af),
            status_warn: rgb(0xf59e0b),
            status_error: rgb(0xef4444),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_theme() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn component_theme_follows_mode() {
        assert_eq!(
            ThemeMode::Light.component_mode(),
            gpui_component::ThemeMode::Light
        );
        assert_eq!(
            ThemeMode::Dark.component_mode(),
            gpui_component::ThemeMode::Dark
        );
    }

    #[test]
    fn double_toggle_restores_palette_exactly() {
        let start = ThemeMode::default();
        let original = start.palette();
        let round_trip = start.toggled().toggled().palette();
        assert_eq!(original, round_trip);
        assert_ne!(original, start.toggled().palette());
    }

    #[test]
    fn light_palette_matches_reference_colors() {
        let palette = Palette::light();
        assert_eq!(palette.window_bg, rgb(0xf3f8fb));
        assert_eq!(palette.title_bg, rgb(0x007acc));
        assert_eq!(palette.label_text, rgb(0x333333));
        assert_eq!(palette.button.bg, rgb(0xd3d3d3));
        assert_eq!(palette.text_bg, rgb(0xffffff));
    }

    #[test]
    fn dark_palette_matches_reference_colors() {
        let palette = Palette::dark();
        assert_eq!(palette.window_bg, rgb(0x2e2e2e));
        assert_eq!(palette.title_bg, rgb(0x1f1f1f));
        assert_eq!(palette.label_text, rgb(0xffffff));
        assert_eq!(palette.button.bg, rgb(0x4a4a4a));
        assert_eq!(palette.text_bg, rgb(0x333333));
        assert_eq!(palette.caret, rgb(0xffffff));
    }

    #[test]
    fn toggle_label_names_the_other_theme() {
        assert_eq!(ThemeMode::Light.toggle_label(), "Dark Mode");
        assert_eq!(ThemeMode::Dark.toggle_label(), "Light Mode");
    }
}
