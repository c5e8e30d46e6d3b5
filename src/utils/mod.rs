//! Utilities - Config loading and logging setup

pub mod config_store;
pub mod logging;
