//! Configuration loading and persistence.

use super::{Backend, Config};
use crate::env;
use crate::error::ConfigError;
use crate::paths;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

impl Config {
    /// Load configuration from the default path.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = paths::config_file()?;
        Self::load(&path)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        debug!(path = %path.display(), "loading configuration");
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        json5::from_str(content).map_err(|e| ConfigError::Json5(e.to_string()))
    }

    /// Load configuration from the default path, falling back to defaults if
    /// the file is missing, unreadable, or fails validation.
    ///
    /// Environment overrides are applied in every case.
    pub fn load_or_default() -> Self {
        let loaded = Self::load_default().and_then(|config| {
            config.validate()?;
            Ok(config)
        });
        let mut config = match loaded {
            Ok(config) => config,
            Err(ConfigError::NotFound(_)) => Self::default(),
            Err(e) => {
                warn!("ignoring configuration: {e}");
                Self::default()
            }
        };
        config.apply_env();
        config
    }

    /// Apply `SECKIT_BACKEND` and `SECKIT_LOG` overrides.
    pub fn apply_env(&mut self) {
        if let Some(backend) = env::get_var(env::BACKEND_VAR) {
            match backend.parse::<Backend>() {
                Ok(backend) => self.keychain.backend = backend,
                Err(e) => warn!("ignoring {}: {e}", env::BACKEND_VAR),
            }
        }

        if let Some(filter) = env::get_var(env::LOG_VAR) {
            self.logging.filter = Some(filter);
        }
    }

    /// Save configuration to a file path.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_json5()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write atomically
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Serialize to JSON5 string.
    pub fn to_json5(&self) -> Result<String, ConfigError> {
        // json5 doesn't have a serializer, so we use serde_json with pretty print
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate the configuration, collecting all errors before returning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.keychain.limit == Some(0) {
            errors.push("Keychain query limit must be greater than 0".to_string());
        }

        if let Some(filter) = &self.logging.filter {
            if filter.trim().is_empty() {
                errors.push("Logging filter must not be blank".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }
}
