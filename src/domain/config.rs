//! Config - Application Configuration
//!
//! Read from `translator.toml` in the platform config directory. Every key is
//! optional; missing keys fall back to their defaults.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Model configuration
    pub model: ModelConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Parse a configuration document
    pub fn from_toml_str(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }
}

/// Where the model runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputeDevice {
    /// CUDA when available, otherwise CPU
    #[default]
    Auto,
    Cpu,
    Cuda,
}

/// Model configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Compute device for inference
    pub device: ComputeDevice,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter, overridden by `RUST_LOG`
    pub level: String,
    /// Also write a daily log file to the cache directory
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = AppConfig::from_toml_str("  \n").expect("parse");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.model.device, ComputeDevice::Auto);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.file);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = AppConfig::from_toml_str("[model]\ndevice = \"cpu\"\n").expect("parse");
        assert_eq!(config.model.device, ComputeDevice::Cpu);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn logging_section_is_read() {
        let config =
            AppConfig::from_toml_str("[logging]\nlevel = \"debug\"\nfile = true\n").expect("parse");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.file);
        assert_eq!(config.model.device, ComputeDevice::Auto);
    }

    #[test]
    fn unknown_device_is_rejected() {
        let result = AppConfig::from_toml_str("[model]\ndevice = \"tpu\"\n");
        assert!(result.is_err());
    }
}
