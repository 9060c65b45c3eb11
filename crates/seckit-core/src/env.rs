//! Environment variable handling.

use std::env;

/// Selects the keychain backend (`platform` or `memory`).
pub const BACKEND_VAR: &str = "SECKIT_BACKEND";

/// Overrides the configured log filter.
pub const LOG_VAR: &str = "SECKIT_LOG";

/// Get an environment variable, returning None if not set or empty.
pub fn get_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
