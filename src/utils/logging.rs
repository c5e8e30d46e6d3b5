//! Logging - tracing subscriber setup
//!
//! Console output always; a daily rolling file in the cache directory when
//! `[logging] file = true`. `RUST_LOG` takes precedence over the configured
//! level.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::constants::LOG_FILE_PREFIX;
use crate::domain::config::LoggingConfig;
use crate::utils::config_store::get_or_create_log_dir;

/// Install the global subscriber. The returned guard flushes the file
/// writer on drop and must live until the application exits.
pub fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer().with_timer(LocalTime::rfc_3339());

    let mut log_dir_error = None;
    let (file_layer, guard) = if config.file {
        match get_or_create_log_dir() {
            Ok(dir) => {
                let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer()
                    .with_timer(LocalTime::rfc_3339())
                    .with_ansi(false)
                    .with_writer(writer);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                log_dir_error = Some(e);
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    if let Some(e) = log_dir_error {
        tracing::warn!(error = %e, "File logging disabled");
    }

    guard
}
