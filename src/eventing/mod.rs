//! Eventing - Messages flowing from background work to the UI

pub mod app_event;

pub use app_event::AppEvent;
