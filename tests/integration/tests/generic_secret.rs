//! Generic secret round trips through the keychain façade.

use rand::seq::SliceRandom;
use seckit_integration_tests::{accounts, init_logging, isolated_keychain, unique};
use seckit_keychain::{
    GenericSecret, GenericSecretAttributes, GenericSecretQuery, KeychainError, QueryOptions,
    TextEncoding,
};
use std::collections::BTreeSet;
use std::num::NonZeroUsize;

#[test]
fn test_query_by_service_returns_exactly_the_added_accounts() {
    init_logging();
    let (keychain, _) = isolated_keychain();

    for count in [1, 2, 5, 9] {
        let service = unique("service");
        let mut added = accounts(count);
        added.shuffle(&mut rand::thread_rng());

        for account in &added {
            let item = keychain
                .add_item(&GenericSecretAttributes::new(&service, account, "pw"))
                .unwrap();
            assert_eq!(item.service(), service);
            assert_eq!(item.account(), account);
        }

        let query = GenericSecretQuery::new().with_service(&service);
        let found = keychain.items(&query, QueryOptions::default()).unwrap();

        assert_eq!(found.len(), count, "no duplicates or omissions");
        let found: BTreeSet<String> = found.iter().map(|i| i.account().to_string()).collect();
        let expected: BTreeSet<String> = added.into_iter().collect();
        assert_eq!(found, expected);
    }
}

#[test]
fn test_delete_by_service_then_query_is_empty() {
    let (keychain, services) = isolated_keychain();
    let service = unique("service");
    let other = keychain
        .add_item(&GenericSecretAttributes::new(unique("other"), "a", "keep"))
        .unwrap();

    for account in accounts(3) {
        keychain
            .add_item(&GenericSecretAttributes::new(&service, account, "pw"))
            .unwrap();
    }

    let query = GenericSecretQuery::new().with_service(&service);
    keychain.delete_items(&query).unwrap();
    assert!(keychain.items(&query, QueryOptions::default()).unwrap().is_empty());

    // Deleting again, with nothing present, is not an error.
    keychain.delete_items(&query).unwrap();

    assert_eq!(services.len(), 1);
    assert_eq!(
        keychain.items(&other.query(), QueryOptions::default()).unwrap(),
        vec![other]
    );
}

#[test]
fn test_svc_scenario() {
    let (keychain, _) = isolated_keychain();

    keychain
        .add_item(&GenericSecretAttributes::new("svc", "a1", "p1"))
        .unwrap();
    keychain
        .add_item(
            &GenericSecretAttributes::with_password("svc", "a2", "p2", TextEncoding::Utf8).unwrap(),
        )
        .unwrap();

    let found = keychain
        .items(
            &GenericSecretQuery::new().with_service("svc"),
            QueryOptions::default(),
        )
        .unwrap();

    let pairs: BTreeSet<(String, String)> = found
        .iter()
        .map(|item| (item.account().to_string(), item.password_utf8().unwrap()))
        .collect();
    let expected: BTreeSet<(String, String)> = [("a1", "p1"), ("a2", "p2")]
        .into_iter()
        .map(|(a, p)| (a.to_string(), p.to_string()))
        .collect();
    assert_eq!(pairs, expected);

    let binary = GenericSecret::new("svc", "bin", vec![0xc3, 0x28, 0xff]);
    assert_eq!(binary.password(TextEncoding::Utf8), None);
    assert_eq!(binary.password(TextEncoding::Ascii), None);
}

#[test]
fn test_add_duplicate_is_services_error() {
    let (keychain, _) = isolated_keychain();
    let attributes = GenericSecretAttributes::new(unique("service"), "a", "p");

    keychain.add_item(&attributes).unwrap();
    match keychain.add_item(&attributes) {
        Err(KeychainError::Services(e)) => assert!(e.is_duplicate_item()),
        other => panic!("expected duplicate item error, got {other:?}"),
    }
}

#[test]
fn test_query_options_are_honoured() {
    let (keychain, _) = isolated_keychain();
    let service = unique("Service");
    for account in accounts(4) {
        keychain
            .add_item(&GenericSecretAttributes::new(&service, account, "pw"))
            .unwrap();
    }

    let upper = GenericSecretQuery::new().with_service(service.to_uppercase());
    assert!(keychain
        .items(&upper, QueryOptions::default())
        .unwrap()
        .is_empty());
    assert_eq!(
        keychain
            .items(&upper, QueryOptions::new().case_insensitive())
            .unwrap()
            .len(),
        4
    );

    let limited = QueryOptions::new().with_limit(NonZeroUsize::new(3).unwrap());
    let exact = GenericSecretQuery::new().with_service(&service);
    assert_eq!(keychain.items(&exact, limited).unwrap().len(), 3);
}

#[test]
fn test_exact_query_and_delete_single_item() {
    let (keychain, _) = isolated_keychain();
    let service = unique("service");

    let first = keychain
        .add_item(&GenericSecretAttributes::new(&service, "first", "1"))
        .unwrap();
    let second = keychain
        .add_item(&GenericSecretAttributes::new(&service, "second", "2"))
        .unwrap();

    keychain.delete_items(&first.query()).unwrap();

    let remaining = keychain
        .items(
            &GenericSecretQuery::new().with_service(&service),
            QueryOptions::default(),
        )
        .unwrap();
    assert_eq!(remaining, vec![second]);
}
