//! Building keychains from configuration files.

use seckit_core::{Backend, Config, ConfigError};
use seckit_integration_tests::unique;
use seckit_keychain::{GenericSecretAttributes, GenericSecretQuery, Keychain, QueryOptions};
use std::num::NonZeroUsize;
use tempfile::TempDir;

#[test]
fn test_config_file_drives_keychain_and_query_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("seckit.json5");
    std::fs::write(
        &path,
        r#"{
            // in-memory store for tests
            keychain: { backend: "memory", case_insensitive: true, limit: 2 },
            logging: { level: "debug" },
        }"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.keychain.backend, Backend::Memory);

    let options = QueryOptions::from(&config.keychain);
    assert!(options.is_case_insensitive);
    assert_eq!(options.limit, NonZeroUsize::new(2));

    let keychain = Keychain::from_config(&config.keychain);
    let service = unique("Mixed");
    for account in ["a", "b", "c"] {
        keychain
            .add_item(&GenericSecretAttributes::new(&service, account, "pw"))
            .unwrap();
    }

    let query = GenericSecretQuery::new().with_service(service.to_lowercase());
    assert_eq!(keychain.items(&query, options).unwrap().len(), 2);

    keychain.delete_items(&GenericSecretQuery::new().with_service(&service)).unwrap();
}

#[test]
fn test_config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("seckit.json5");

    let mut config = Config::default();
    config.keychain.backend = Backend::Memory;
    config.keychain.limit = Some(10);
    config.logging.json = true;

    config.save(&path).unwrap();
    assert_eq!(Config::load(&path).unwrap(), config);
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("seckit.json5");
    std::fs::write(&path, "{ keychain: { limit: 0 } }").unwrap();

    let config = Config::load(&path).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Validation(_))
    ));
    assert!(matches!(
        Config::load(&dir.path().join("missing.json5")),
        Err(ConfigError::NotFound(_))
    ));
}
