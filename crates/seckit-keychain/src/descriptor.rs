//! Typed descriptors for adding and querying keychain items.
//!
//! A descriptor knows how to render the dictionaries the store needs for one
//! item kind and how to map the store's raw results back into that kind.

use crate::attributes::{AttributeDictionary, RawResult};
use crate::error::KeychainItemMappingError;

/// Item types that can be built from a store record.
pub trait FromAttributes: Sized {
    /// Build an item from a record's attributes.
    ///
    /// Required fields are read in a fixed order, so the first missing or
    /// mistyped field determines the error.
    fn from_attributes(attributes: &AttributeDictionary) -> Result<Self, KeychainItemMappingError>;
}

/// Describes an item to add to the keychain.
pub trait AdditionAttributes: Send + Sync {
    /// The kind of item that is added.
    type Item;

    /// The dictionary passed to the store's add operation.
    fn to_dictionary(&self) -> AttributeDictionary;

    /// Map the store's raw result for the added item.
    fn map_added_item(&self, raw: RawResult) -> Result<Self::Item, KeychainItemMappingError>;
}

/// Describes a query for items of one kind.
pub trait ItemQuery: Send + Sync {
    /// The kind of item the query matches.
    type Item;

    /// Attributes that matching items must have.
    ///
    /// Used both to find and to delete items, so it must not contain return
    /// directives or search options.
    fn filter_dictionary(&self) -> AttributeDictionary;

    /// Directives describing how matches are returned. Never sent on delete.
    fn return_dictionary(&self) -> AttributeDictionary;

    /// Map the store's raw result for the matching items.
    fn map_matching_items(
        &self,
        raw: RawResult,
    ) -> Result<Vec<Self::Item>, KeychainItemMappingError>;
}

/// Map a raw result that must be a single record.
pub fn map_single_record<T: FromAttributes>(raw: RawResult) -> Result<T, KeychainItemMappingError> {
    match raw {
        RawResult::Record(attributes) => T::from_attributes(&attributes),
        _ => Err(KeychainItemMappingError::DataCorrupted),
    }
}

/// Map a raw result that is either a single record or a list of records.
///
/// An empty list maps to an empty `Vec`. A list containing anything other than
/// records is corrupted.
pub fn map_record_list<T: FromAttributes>(
    raw: RawResult,
) -> Result<Vec<T>, KeychainItemMappingError> {
    match raw {
        RawResult::Record(attributes) => Ok(vec![T::from_attributes(&attributes)?]),
        RawResult::List(results) => results
            .into_iter()
            .map(|result| match result {
                RawResult::Record(attributes) => T::from_attributes(&attributes),
                _ => Err(KeychainItemMappingError::DataCorrupted),
            })
            .collect(),
        RawResult::Value(_) => Err(KeychainItemMappingError::DataCorrupted),
    }
}
