//! Layout Components
//!
//! Title bar and status bar framing the translator panes.

pub mod header;
pub mod status_bar;
