//! AppEvent - Application Event Enum
//!
//! All events that the translation worker sends to the UI layer.

use crate::error::Result;

/// Worker -> UI events
#[derive(Debug)]
pub enum AppEvent {
    /// The model finished loading and accepts requests
    ModelReady,

    /// The model could not be loaded; requests will be answered with errors
    ModelFailed {
        message: String,
    },

    /// A translation request was answered
    TranslationFinished {
        request_id: u64,
        result: Result<String>,
    },
}
