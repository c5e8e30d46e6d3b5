//! StatusState - Model Status and the Status Bar Message

use crate::theme::Palette;

/// Status message level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl StatusLevel {
    pub fn color(&self, palette: &Palette) -> gpui::Rgba {
        match self {
            StatusLevel::Info => palette.status_text,
            StatusLevel::Warn => palette.status_warn,
            StatusLevel::Error => palette.status_error,
        }
    }
}

/// A single status bar message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub level: StatusLevel,
    pub message: String,
}

impl StatusLine {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            message: message.into(),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warn,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            message: message.into(),
        }
    }
}

/// Lifecycle of the translation model
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModelStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

impl ModelStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, ModelStatus::Ready)
    }
}
