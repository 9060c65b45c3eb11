//! # seckit-core
//!
//! Shared functionality for the seckit crates:
//!
//! - **Configuration**: Loading, validation, and persistence of the JSON5 config file
//! - **Logging**: `tracing` subscriber setup driven by configuration
//! - **Secrets**: A zeroizing byte container for secret payloads
//! - **Utilities**: Path resolution and environment handling

pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod paths;
pub mod secret;

// Re-exports for convenience
pub use config::{Backend, Config, KeychainConfig, LoggingConfig};
pub use error::{ConfigError, Error, Result};
pub use secret::SecretData;
