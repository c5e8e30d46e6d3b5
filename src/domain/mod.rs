//! Domain - Core Data Types
//!
//! Plain data types shared by the state, service and view layers.

pub mod config;
pub mod direction;
pub mod language;

pub use config::{AppConfig, ComputeDevice};
pub use direction::Direction;
pub use language::Language;
