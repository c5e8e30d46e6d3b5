//! Sinhala-English Translator - Main Entry Point
//!
//! Desktop translator between Sinhala and English backed by the M2M100 model

use si_en_translator::app::application::run_app;
use si_en_translator::domain::AppConfig;
use si_en_translator::utils::config_store::load_app_config;
use si_en_translator::utils::logging::init_logging;

fn main() {
    // Config first so its logging section can shape the subscriber
    let (config, config_error) = match load_app_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let _log_guard = init_logging(&config.logging);

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
    }

    tracing::info!("Starting Sinhala-English Translator...");

    // Run the GPUI application
    run_app(config);
}
