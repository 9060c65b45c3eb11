//! Network secret round trips through the keychain façade.

use rand::seq::SliceRandom;
use seckit_integration_tests::{accounts, isolated_keychain, unique};
use seckit_keychain::{
    GenericSecretAttributes, GenericSecretQuery, NetworkSecretAttributes, NetworkSecretQuery,
    QueryOptions, TextEncoding,
};
use std::collections::BTreeSet;

#[test]
fn test_query_by_server_returns_exactly_the_added_accounts() {
    let (keychain, _) = isolated_keychain();

    for count in [1, 3, 7] {
        let server = format!("{}.example.com", unique("host"));
        let mut added = accounts(count);
        added.shuffle(&mut rand::thread_rng());

        for account in &added {
            keychain
                .add_item(&NetworkSecretAttributes::new(&server, account, "pw"))
                .unwrap();
        }

        let found = keychain
            .items(
                &NetworkSecretQuery::new().with_server(&server),
                QueryOptions::default(),
            )
            .unwrap();

        assert_eq!(found.len(), count);
        assert!(found.iter().all(|item| item.server() == server));
        let found: BTreeSet<String> = found.iter().map(|i| i.account().to_string()).collect();
        assert_eq!(found, added.into_iter().collect());
    }
}

#[test]
fn test_delete_by_server_is_idempotent() {
    let (keychain, services) = isolated_keychain();
    let server = unique("server");
    for account in accounts(2) {
        keychain
            .add_item(&NetworkSecretAttributes::new(&server, account, "pw"))
            .unwrap();
    }

    let query = NetworkSecretQuery::new().with_server(&server);
    keychain.delete_items(&query).unwrap();
    keychain.delete_items(&query).unwrap();

    assert!(services.is_empty());
    assert!(keychain.items(&query, QueryOptions::default()).unwrap().is_empty());
}

#[test]
fn test_kinds_do_not_see_each_other() {
    let (keychain, _) = isolated_keychain();
    let name = unique("shared-name");

    keychain
        .add_item(&GenericSecretAttributes::new(&name, "account", "generic"))
        .unwrap();
    keychain
        .add_item(&NetworkSecretAttributes::new(&name, "account", "network"))
        .unwrap();

    let generic = keychain
        .items(&GenericSecretQuery::default(), QueryOptions::default())
        .unwrap();
    let network = keychain
        .items(&NetworkSecretQuery::default(), QueryOptions::default())
        .unwrap();

    assert_eq!(generic.len(), 1);
    assert_eq!(generic[0].password_utf8().as_deref(), Some("generic"));
    assert_eq!(network.len(), 1);
    assert_eq!(network[0].password_utf8().as_deref(), Some("network"));

    keychain.delete_items(&NetworkSecretQuery::default()).unwrap();
    assert_eq!(
        keychain
            .items(&GenericSecretQuery::default(), QueryOptions::default())
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_password_in_non_default_encoding() {
    let (keychain, _) = isolated_keychain();
    let server = unique("server");

    let attributes =
        NetworkSecretAttributes::with_password(&server, "a", "pässword", TextEncoding::Latin1)
            .unwrap();
    let added = keychain.add_item(&attributes).unwrap();

    assert_eq!(added.data().len(), "pässword".chars().count());
    assert_eq!(added.password(TextEncoding::Latin1).as_deref(), Some("pässword"));
    assert_eq!(added.password_utf8(), None);

    let cyrillic =
        NetworkSecretAttributes::with_password(&server, "b", "ключ", TextEncoding::Ascii);
    assert!(cyrillic.is_none());
}

#[test]
fn test_query_by_account_across_servers() {
    let (keychain, _) = isolated_keychain();
    let account = unique("user");
    let servers: Vec<String> = (0..3).map(|_| unique("server")).collect();

    for server in &servers {
        keychain
            .add_item(&NetworkSecretAttributes::new(server, &account, "pw"))
            .unwrap();
    }
    keychain
        .add_item(&NetworkSecretAttributes::new(&servers[0], unique("other"), "pw"))
        .unwrap();

    let found = keychain
        .items(
            &NetworkSecretQuery::new().with_account(&account),
            QueryOptions::default(),
        )
        .unwrap();
    let found: BTreeSet<String> = found.iter().map(|i| i.server().to_string()).collect();
    assert_eq!(found, servers.into_iter().collect());
}
