//! Primitive Components
//!
//! Basic building blocks: buttons and the text panes.

pub mod button;
pub mod text_pane;
