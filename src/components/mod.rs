//! Components - Reusable UI Components
//!
//! UI components that render state handed to them and never do I/O.

pub mod layout;
pub mod primitives;
