//! Keychains built from the default config file and environment.
//!
//! Everything lives in one test: it rewrites `HOME` and the `SECKIT_*`
//! variables, which are process-wide.

use seckit_core::{Backend, Config};
use seckit_integration_tests::unique;
use seckit_keychain::{
    GenericSecretAttributes, GenericSecretQuery, Keychain, MemoryKeychainServices, QueryOptions,
};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
#[cfg(unix)]
fn test_default_config_file_and_environment() {
    let home = TempDir::new().unwrap();
    std::env::set_var("HOME", home.path());
    std::env::set_var("SECKIT_BACKEND", "memory");
    std::env::remove_var("SECKIT_LOG");

    // No file: defaults plus the backend override.
    let config = Config::load_or_default();
    assert_eq!(config.keychain.backend, Backend::Memory);
    assert_eq!(config.keychain.limit, None);

    let (keychain, options) = Keychain::from_default_config();
    assert_eq!(options, QueryOptions::default());
    let service = unique("service");
    let added = keychain
        .add_item(&GenericSecretAttributes::new(&service, "a", "p"))
        .unwrap();
    let shared = Keychain::with_services(Arc::new(MemoryKeychainServices::shared()));
    assert_eq!(
        shared
            .items(&GenericSecretQuery::new().with_service(&service), options)
            .unwrap(),
        vec![added]
    );

    // A valid file supplies the query defaults.
    let dir = home.path().join(".seckit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("seckit.json5");
    std::fs::write(
        &path,
        "{ keychain: { backend: 'platform', case_insensitive: true, limit: 3 } }",
    )
    .unwrap();
    std::env::set_var("SECKIT_LOG", "seckit_keychain=trace");

    let config = Config::load_or_default();
    assert_eq!(config.keychain.backend, Backend::Memory);
    assert_eq!(config.logging.filter.as_deref(), Some("seckit_keychain=trace"));

    let (_, options) = Keychain::from_default_config();
    assert!(options.is_case_insensitive);
    assert_eq!(options.limit, NonZeroUsize::new(3));

    // A file that fails validation falls back to the defaults.
    std::fs::write(&path, "{ keychain: { case_insensitive: true, limit: 0 } }").unwrap();
    let (_, options) = Keychain::from_default_config();
    assert_eq!(options, QueryOptions::default());

    std::env::remove_var("SECKIT_BACKEND");
    std::env::remove_var("SECKIT_LOG");
}
