//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Window title
pub const APP_TITLE: &str = "Sinhala-English Translator";

/// Fixed window dimensions (the window is not resizable)
pub const WINDOW_WIDTH: f32 = 500.0;
pub const WINDOW_HEIGHT: f32 = 500.0;

/// Title bar height
pub const TITLE_BAR_HEIGHT: f32 = 40.0;

/// Height of each text pane
pub const TEXT_PANE_HEIGHT: f32 = 92.0;

/// Status bar height
pub const STATUS_BAR_HEIGHT: f32 = 20.0;

/// Horizontal padding around the panes
pub const CONTENT_PADDING_X: f32 = 10.0;

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "translator.toml";

/// Log file prefix inside the platform cache directory
pub const LOG_FILE_PREFIX: &str = "translator.log";
