//! AppEntities - Entity Handles
//!
//! The GPUI entities shared by the window's views, created once at startup
//! and handed to the workspace.

use gpui::{App, AppContext, Entity};

use crate::state::TranslatorState;

/// Collection of the app's entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Direction, theme, pending request and status of the translator window
    pub translator: Entity<TranslatorState>,
}

impl AppEntities {
    /// Initialize all entities with default values
    pub fn init(cx: &mut App) -> Self {
        Self {
            translator: cx.new(|_| TranslatorState::new()),
        }
    }
}
