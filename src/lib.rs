//! Sinhala-English Translator Library
//!
//! This crate provides the application logic for a small desktop translator
//! between Sinhala and English. Translation runs on a background worker
//! hosting the multilingual M2M100 model; the GPUI window holds two text
//! panes, clipboard buttons, a language swap and a light/dark theme.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
