//! The keychain façade.
//!
//! [`Keychain`] turns typed descriptors into attribute dictionaries, hands
//! them to a [`KeychainServices`] implementation, and maps the results back
//! into typed items.
//!
//! `Keychain` is cheap to clone and holds no mutable state, but it does not
//! own the records it manipulates: every instance backed by the same store
//! sees the same items, so adding or deleting through one instance affects
//! all of them.

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

use seckit_core::{Config, KeychainConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::attributes::{AttributeDictionary, AttributeKey, AttributeValue, Constant, RawResult};
use crate::descriptor::{AdditionAttributes, ItemQuery};
use crate::error::{KeychainItemMappingError, Result};
use crate::services::{self, KeychainServices};

/// Options that affect how a query is performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Whether string comparisons ignore case. `false` by default.
    #[serde(default)]
    pub is_case_insensitive: bool,

    /// The maximum number of items to return. `None` means no maximum.
    #[serde(default)]
    pub limit: Option<NonZeroUsize>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match strings regardless of case.
    pub fn case_insensitive(mut self) -> Self {
        self.is_case_insensitive = true;
        self
    }

    /// Return at most `limit` items.
    pub fn with_limit(mut self, limit: NonZeroUsize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The options as store search options.
    pub fn to_dictionary(&self) -> AttributeDictionary {
        let limit = match self.limit {
            Some(limit) => AttributeValue::Integer(i64::try_from(limit.get()).unwrap_or(i64::MAX)),
            None => AttributeValue::Constant(Constant::MatchLimitAll),
        };

        AttributeDictionary::new()
            .with(AttributeKey::CASE_INSENSITIVE, self.is_case_insensitive)
            .with(AttributeKey::LIMIT, limit)
    }
}

/// Query defaults from a validated configuration.
///
/// `Config::validate` rejects a zero limit; if one gets through anyway it is
/// treated as no maximum.
impl From<&KeychainConfig> for QueryOptions {
    fn from(config: &KeychainConfig) -> Self {
        Self {
            is_case_insensitive: config.case_insensitive,
            limit: config.limit.and_then(NonZeroUsize::new),
        }
    }
}

/// A keychain in which secrets can be added, queried, and deleted.
#[derive(Clone)]
pub struct Keychain {
    services: Arc<dyn KeychainServices>,
}

impl Keychain {
    /// Create a keychain backed by the platform's secure item store.
    pub fn new() -> Self {
        Self::with_services(services::default_services())
    }

    /// Create a keychain backed by the given services.
    pub fn with_services(services: Arc<dyn KeychainServices>) -> Self {
        Self { services }
    }

    /// Create a keychain backed by the configured store.
    ///
    /// `config` is expected to have passed `Config::validate`.
    pub fn from_config(config: &KeychainConfig) -> Self {
        debug!(backend = %config.backend, "creating keychain");
        Self::with_services(services::services_for(config.backend))
    }

    /// Create a keychain from `~/.seckit/seckit.json5` and the environment.
    ///
    /// Also returns the query defaults the configuration asks for. A missing
    /// or invalid file yields the defaults.
    pub fn from_default_config() -> (Self, QueryOptions) {
        let config = Config::load_or_default();
        let options = QueryOptions::from(&config.keychain);
        (Self::from_config(&config.keychain), options)
    }

    /// The services the keychain delegates to.
    pub fn services(&self) -> &Arc<dyn KeychainServices> {
        &self.services
    }

    /// Add an item and return it as stored.
    pub fn add_item<A: AdditionAttributes>(&self, attributes: &A) -> Result<A::Item> {
        let dictionary = attributes.to_dictionary();
        let class = class_name(&dictionary);

        let raw = self.services.add_item(&dictionary).map_err(|e| {
            debug!(class, status = e.status(), "add failed");
            e
        })?;
        let raw = raw.ok_or(KeychainItemMappingError::DataCorrupted)?;

        debug!(class, "added item");
        Ok(attributes.map_added_item(raw)?)
    }

    /// Return the items matching `query`.
    ///
    /// A query that matches nothing returns an empty `Vec`.
    pub fn items<Q: ItemQuery>(&self, query: &Q, options: QueryOptions) -> Result<Vec<Q::Item>> {
        let mut dictionary = query.filter_dictionary();
        dictionary.merge(query.return_dictionary());
        dictionary.merge(options.to_dictionary());
        let class = class_name(&dictionary);

        let raw = match self.services.items(&dictionary) {
            Ok(raw) => raw,
            Err(e) if e.is_item_not_found() => Some(RawResult::empty()),
            Err(e) => {
                debug!(class, status = e.status(), "query failed");
                return Err(e.into());
            }
        };
        let raw = raw.ok_or(KeychainItemMappingError::DataCorrupted)?;

        let items = query.map_matching_items(raw)?;
        debug!(class, count = items.len(), "queried items");
        Ok(items)
    }

    /// Delete the items matching `query`.
    ///
    /// Deleting when nothing matches is not an error.
    pub fn delete_items<Q: ItemQuery>(&self, query: &Q) -> Result<()> {
        let dictionary = query.filter_dictionary();
        let class = class_name(&dictionary);

        match self.services.delete_items(&dictionary) {
            Ok(()) => {
                debug!(class, "deleted items");
                Ok(())
            }
            Err(e) if e.is_item_not_found() => {
                debug!(class, "nothing to delete");
                Ok(())
            }
            Err(e) => {
                debug!(class, status = e.status(), "delete failed");
                Err(e.into())
            }
        }
    }
}

impl Default for Keychain {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Keychain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keychain")
            .field("services", &self.services)
            .finish()
    }
}

fn class_name(dictionary: &AttributeDictionary) -> &'static str {
    match dictionary.get(&AttributeKey::CLASS) {
        Some(AttributeValue::Constant(class)) => class.as_str(),
        _ => "unspecified",
    }
}
