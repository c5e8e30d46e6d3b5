//! Service Layer
//!
//! Boundaries to the world outside the window: the translation model and
//! the system clipboard.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────┐        ┌────────────────────────┐
//! │          Workspace           │ submit │   TranslationWorker    │
//! │  (TranslatorState entity)    │ ─────▶ │  (M2M100Translator)    │
//! │                              │ ◀───── │                        │
//! └──────────────────────────────┘AppEvent└────────────────────────┘
//!                │
//!                ▼ Clipboard
//!          system clipboard
//! ```

pub mod clipboard;
pub mod translation;
pub mod worker;

pub use clipboard::Clipboard;
pub use translation::{M2M100Translator, TranslationRequest, Translator};
pub use worker::TranslationWorker;
