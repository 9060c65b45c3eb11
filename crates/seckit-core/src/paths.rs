//! Path resolution utilities.

use crate::error::ConfigError;
use std::path::PathBuf;

/// Get the seckit base directory (~/.seckit).
pub fn base_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or_else(|| {
        ConfigError::Validation("Could not determine home directory".to_string())
    })?;
    Ok(home.join(".seckit"))
}

/// Get the main config file path (~/.seckit/seckit.json5).
pub fn config_file() -> Result<PathBuf, ConfigError> {
    Ok(base_dir()?.join("seckit.json5"))
}
