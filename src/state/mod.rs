//! State - Window State Modules
//!
//! The controller state for the translator window and the clipboard rules
//! for its text panes. Nothing here depends on a live window.

pub mod pane_edit;
pub mod status_state;
pub mod translator_state;

pub use pane_edit::{PaneEdit, PaneSnapshot};
pub use status_state::{ModelStatus, StatusLevel, StatusLine};
pub use translator_state::{PaneId, PaneUpdate, TranslateTrigger, TranslatorState};
