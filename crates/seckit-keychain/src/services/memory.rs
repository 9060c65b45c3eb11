//! An in-process secure item store.
//!
//! Records live in memory for the lifetime of the process. Clones of a
//! [`MemoryKeychainServices`] share one record set, and
//! [`MemoryKeychainServices::shared`] hands out the process-wide instance.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

use super::KeychainServices;
use crate::attributes::{AttributeDictionary, AttributeKey, AttributeValue, Constant, RawResult};
use crate::error::{status, KeychainServicesError};

/// Attributes that identify a record. Two records may not agree on all of them.
const PRIMARY_KEY: [AttributeKey; 4] = [
    AttributeKey::CLASS,
    AttributeKey::ACCOUNT,
    AttributeKey::SERVICE,
    AttributeKey::SERVER,
];

static SHARED: Lazy<MemoryKeychainServices> = Lazy::new(MemoryKeychainServices::new);

/// How many matches a query returns.
enum MatchLimit {
    One,
    Max(usize),
    All,
}

/// A thread-safe, in-memory secure item store.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeychainServices {
    records: Arc<RwLock<Vec<AttributeDictionary>>>,
}

impl MemoryKeychainServices {
    /// Create an empty, independent store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle to the process-wide store.
    pub fn shared() -> Self {
        SHARED.clone()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Remove every record.
    pub fn clear(&self) {
        self.records.write().clear();
    }
}

/// Class of the request, which the store requires on every call.
fn require_class(request: &AttributeDictionary) -> Result<Constant, KeychainServicesError> {
    match request.get(&AttributeKey::CLASS) {
        Some(AttributeValue::Constant(
            class @ (Constant::GenericSecret | Constant::NetworkSecret),
        )) => Ok(*class),
        _ => Err(KeychainServicesError::new(status::PARAM)),
    }
}

/// The part of a request that describes items rather than steering the store.
fn criteria(request: &AttributeDictionary) -> AttributeDictionary {
    request
        .iter()
        .filter(|(key, _)| !key.is_directive())
        .map(|(key, value)| (*key, value.clone()))
        .collect()
}

fn match_limit(request: &AttributeDictionary) -> Result<MatchLimit, KeychainServicesError> {
    match request.get(&AttributeKey::LIMIT) {
        None => Ok(MatchLimit::One),
        Some(AttributeValue::Integer(n)) if *n > 0 => {
            Ok(MatchLimit::Max(usize::try_from(*n).unwrap_or(usize::MAX)))
        }
        Some(AttributeValue::Constant(Constant::MatchLimitAll)) => Ok(MatchLimit::All),
        Some(_) => Err(KeychainServicesError::new(status::PARAM)),
    }
}

fn matches(
    record: &AttributeDictionary,
    criteria: &AttributeDictionary,
    case_insensitive: bool,
) -> bool {
    criteria.iter().all(|(key, expected)| match (record.get(key), expected) {
        (Some(AttributeValue::String(actual)), AttributeValue::String(expected))
            if case_insensitive =>
        {
            actual.to_lowercase() == expected.to_lowercase()
        }
        (Some(actual), expected) => actual == expected,
        (None, _) => false,
    })
}

/// Render a record the way the request asked for it.
fn render(record: &AttributeDictionary, request: &AttributeDictionary) -> Option<RawResult> {
    let want_attributes = request
        .get_bool(&AttributeKey::RETURN_ATTRIBUTES)
        .unwrap_or(false);
    let want_data = request.get_bool(&AttributeKey::RETURN_DATA).unwrap_or(false);

    match (want_attributes, want_data) {
        (false, false) => None,
        (true, true) => Some(RawResult::Record(record.clone())),
        (true, false) => {
            let mut attributes = record.clone();
            attributes.remove(&AttributeKey::SECRET_DATA);
            Some(RawResult::Record(attributes))
        }
        (false, true) => record
            .get(&AttributeKey::SECRET_DATA)
            .cloned()
            .map(RawResult::Value),
    }
}

impl KeychainServices for MemoryKeychainServices {
    fn add_item(
        &self,
        attributes: &AttributeDictionary,
    ) -> Result<Option<RawResult>, KeychainServicesError> {
        let class = require_class(attributes)?;
        let record = criteria(attributes);

        let mut records = self.records.write();
        let duplicate = records.iter().any(|existing| {
            PRIMARY_KEY
                .iter()
                .all(|key| existing.get(key) == record.get(key))
        });
        if duplicate {
            debug!(%class, "rejecting duplicate item");
            return Err(KeychainServicesError::new(status::DUPLICATE_ITEM));
        }

        let rendered = render(&record, attributes);
        records.push(record);
        debug!(%class, total = records.len(), "added item");
        Ok(rendered)
    }

    fn items(
        &self,
        query: &AttributeDictionary,
    ) -> Result<Option<RawResult>, KeychainServicesError> {
        let class = require_class(query)?;
        let limit = match_limit(query)?;
        let case_insensitive = query
            .get_bool(&AttributeKey::CASE_INSENSITIVE)
            .unwrap_or(false);
        let criteria = criteria(query);

        let records = self.records.read();
        let mut found = records
            .iter()
            .filter(|record| matches(record, &criteria, case_insensitive));

        let result = match limit {
            MatchLimit::One => match found.next() {
                Some(record) => render(record, query),
                None => return Err(KeychainServicesError::new(status::ITEM_NOT_FOUND)),
            },
            MatchLimit::Max(max) => render_list(found.take(max), query)?,
            MatchLimit::All => render_list(found, query)?,
        };

        debug!(%class, "matched items");
        Ok(result)
    }

    fn delete_items(&self, query: &AttributeDictionary) -> Result<(), KeychainServicesError> {
        let class = require_class(query)?;
        let criteria = criteria(query);

        let mut records = self.records.write();
        let before = records.len();
        records.retain(|record| !matches(record, &criteria, false));
        let removed = before - records.len();

        if removed == 0 {
            return Err(KeychainServicesError::new(status::ITEM_NOT_FOUND));
        }

        debug!(%class, removed, "deleted items");
        Ok(())
    }
}

fn render_list<'a>(
    found: impl Iterator<Item = &'a AttributeDictionary>,
    request: &AttributeDictionary,
) -> Result<Option<RawResult>, KeychainServicesError> {
    let rendered: Option<Vec<RawResult>> = found.map(|record| render(record, request)).collect();
    match rendered {
        Some(results) if results.is_empty() => {
            Err(KeychainServicesError::new(status::ITEM_NOT_FOUND))
        }
        Some(results) => Ok(Some(RawResult::List(results))),
        None => Ok(None),
    }
}
