//! Attribute dictionaries exchanged with the secure item store.
//!
//! The store speaks in untyped key/value dictionaries. This module models
//! those dictionaries as an explicit tagged union ([`AttributeValue`]) in a
//! fixed-order map ([`AttributeDictionary`]), and provides the single typed
//! extraction point, [`AttributeDictionary::value`].

mod dictionary;
mod key;
mod value;

pub use dictionary::AttributeDictionary;
pub use key::AttributeKey;
pub use value::{AttributeValue, Constant, FromAttributeValue, ValueKind};

/// A raw result returned by the secure item store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawResult {
    /// A single record.
    Record(AttributeDictionary),
    /// Several results. Well-formed lists contain only records.
    List(Vec<RawResult>),
    /// A bare value, such as secret data returned without attributes.
    Value(AttributeValue),
}

impl RawResult {
    /// An empty list, the shape of a query that matched nothing.
    pub fn empty() -> Self {
        RawResult::List(Vec::new())
    }

    /// Build a list of records.
    pub fn records(records: impl IntoIterator<Item = AttributeDictionary>) -> Self {
        RawResult::List(records.into_iter().map(RawResult::Record).collect())
    }
}

impl From<AttributeDictionary> for RawResult {
    fn from(record: AttributeDictionary) -> Self {
        RawResult::Record(record)
    }
}
