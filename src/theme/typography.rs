//! Typography - Font Sizes and Weights

/// Typography constants
pub struct Typography;

impl Typography {
    // Font sizes
    pub const TITLE: f32 = 18.0;
    pub const LABEL: f32 = 15.0;
    pub const TEXT: f32 = 13.0;
    pub const BUTTON: f32 = 13.0;
    pub const STATUS: f32 = 11.0;
}
