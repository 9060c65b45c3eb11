//! Logging initialisation.
//!
//! Libraries in this workspace only emit `tracing` events; a host process (or
//! a test) calls [`init`] once to install a subscriber.

use crate::config::LoggingConfig;
use crate::env;
use crate::error::{Error, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Resolve the filter directive for a logging configuration.
///
/// An explicit `filter` wins over `level`.
pub fn filter_directive(config: &LoggingConfig) -> String {
    config
        .filter
        .clone()
        .unwrap_or_else(|| config.level.as_str().to_string())
}

/// Install a global `tracing` subscriber.
///
/// `SECKIT_LOG` takes precedence over the configuration. Returns an error if
/// the directive is malformed or a global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_env(env::LOG_VAR) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_directive(config))
            .map_err(|e| Error::Logging(e.to_string()))?,
    };

    let json = config.json;
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
