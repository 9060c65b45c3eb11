//! Visibility across keychain instances and threads.

use seckit_core::{Backend, KeychainConfig};
use seckit_integration_tests::{accounts, unique};
use seckit_keychain::{
    GenericSecretAttributes, GenericSecretQuery, Keychain, MemoryKeychainServices, QueryOptions,
};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn memory_config() -> KeychainConfig {
    KeychainConfig {
        backend: Backend::Memory,
        ..Default::default()
    }
}

#[test]
fn test_items_visible_to_every_instance() {
    let writer = Keychain::from_config(&memory_config());
    let reader = Keychain::with_services(Arc::new(MemoryKeychainServices::shared()));
    let service = unique("service");

    let added = writer
        .add_item(&GenericSecretAttributes::new(&service, "a", "p"))
        .unwrap();

    let query = GenericSecretQuery::new().with_service(&service);
    assert_eq!(
        reader.items(&query, QueryOptions::default()).unwrap(),
        vec![added]
    );

    reader.delete_items(&query).unwrap();
    assert!(writer.items(&query, QueryOptions::default()).unwrap().is_empty());
}

#[test]
fn test_concurrent_adds_from_threads() {
    let keychain = Keychain::from_config(&memory_config());
    let service = unique("service");
    let names = accounts(16);

    let handles: Vec<_> = names
        .iter()
        .cloned()
        .map(|account| {
            let keychain = keychain.clone();
            let service = service.clone();
            thread::spawn(move || {
                keychain
                    .add_item(&GenericSecretAttributes::new(service, account, "pw"))
                    .map(|_| ())
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    let found = keychain
        .items(
            &GenericSecretQuery::new().with_service(&service),
            QueryOptions::default(),
        )
        .unwrap();
    assert_eq!(found.len(), names.len());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_blocking_calls_from_async_tasks() {
    let keychain = Keychain::from_config(&memory_config());
    let service = unique("service");

    let mut tasks = Vec::new();
    for account in accounts(8) {
        let keychain = keychain.clone();
        let service = service.clone();
        tasks.push(tokio::task::spawn_blocking(move || {
            let attributes = GenericSecretAttributes::new(&service, &account, "pw");
            keychain.add_item(&attributes)?;
            keychain.items(
                &GenericSecretQuery::new()
                    .with_service(&service)
                    .with_account(&account),
                QueryOptions::default(),
            )
        }));
    }

    for task in tasks {
        let found = tokio::time::timeout(Duration::from_secs(5), task)
            .await
            .expect("keychain call timed out")
            .unwrap()
            .unwrap();
        assert_eq!(found.len(), 1);
    }

    let query = GenericSecretQuery::new().with_service(&service);
    keychain.delete_items(&query).unwrap();
    assert!(keychain.items(&query, QueryOptions::default()).unwrap().is_empty());
}
