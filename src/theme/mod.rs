//! Theme - Palettes and Typography

pub mod colors;
pub mod typography;

pub use colors::{ButtonColors, Palette, ThemeMode};
pub use typography::Typography;
