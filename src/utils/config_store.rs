//! ConfigStore - Platform Paths and the Config File
//!
//! The config file is read-only from the program's point of view: a missing
//! file means defaults, and nothing is ever written back.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use snafu::OptionExt;
use tracing::info;

use crate::constants::CONFIG_FILE_NAME;
use crate::domain::AppConfig;
use crate::error::{ConfigDirSnafu, Result};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "cyenx", "si-en-translator").context(ConfigDirSnafu)
}

/// Path of `translator.toml`
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/si-en-translator/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.si-en-translator/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\si-en-translator\config\`
pub fn config_file_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
}

/// Get or create the directory for log files
///
/// Platform-specific locations:
/// - **Linux**: `~/.cache/si-en-translator/`
/// - **macOS**: `~/Library/Caches/com.cyenx.si-en-translator/`
/// - **Windows**: `C:\Users\<User>\AppData\Local\cyenx\si-en-translator\cache\`
pub fn get_or_create_log_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let cache_dir = project_dirs.cache_dir();

    if !cache_dir.exists() {
        fs::create_dir_all(cache_dir)?;
    }

    Ok(cache_dir.to_path_buf())
}

/// Load the application config from its platform location
pub fn load_app_config() -> Result<AppConfig> {
    load_config_from(&config_file_path()?)
}

/// Load the application config from `path`, defaulting when absent
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let value = fs::read_to_string(path)?;
    let config = AppConfig::from_toml_str(&value)?;
    info!(path = ?path, "Loaded config file");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ComputeDevice;
    use crate::error::Error;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "si-en-translator-{}-{name}",
            std::process::id()
        ))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = scratch_path("missing.toml");
        let config = load_config_from(&path).expect("load");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn existing_file_is_parsed() {
        let path = scratch_path("present.toml");
        fs::write(&path, "[model]\ndevice = \"cuda\"\n").expect("write");

        let config = load_config_from(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(config.expect("load").model.device, ComputeDevice::Cuda);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = scratch_path("broken.toml");
        fs::write(&path, "[model\n").expect("write");

        let result = load_config_from(&path);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(Error::TomlDe { .. })));
    }
}
