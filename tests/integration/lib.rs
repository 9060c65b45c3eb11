//! Shared helpers for seckit integration tests.

use rand::distributions::Alphanumeric;
use rand::Rng;
use seckit_core::LoggingConfig;
use seckit_keychain::{Keychain, MemoryKeychainServices};
use std::sync::Arc;

/// A name with a random suffix, so tests sharing a store never collide.
pub fn unique(prefix: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect();
    format!("{prefix}-{suffix}")
}

/// `count` distinct random account names.
pub fn accounts(count: usize) -> Vec<String> {
    (0..count).map(|i| unique(&format!("account{i}"))).collect()
}

/// A keychain over a fresh, private in-memory store.
pub fn isolated_keychain() -> (Keychain, MemoryKeychainServices) {
    let services = MemoryKeychainServices::new();
    let keychain = Keychain::with_services(Arc::new(services.clone()));
    (keychain, services)
}

/// Install a test logger; later calls are no-ops.
pub fn init_logging() {
    let _ = seckit_core::logging::init(&LoggingConfig::default());
}
