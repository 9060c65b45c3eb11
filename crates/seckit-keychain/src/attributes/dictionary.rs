use super::{AttributeKey, AttributeValue, FromAttributeValue};
use crate::error::KeychainItemMappingError;
use std::collections::btree_map::{self, BTreeMap};

/// An ordered map of attribute keys to dynamically typed values.
///
/// Dictionaries are built fresh for each store call and discarded afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeDictionary {
    entries: BTreeMap<AttributeKey, AttributeValue>,
}

impl AttributeDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: AttributeKey, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(
        &mut self,
        key: AttributeKey,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.entries.insert(key, value.into())
    }

    /// Insert a value only when one is present.
    pub fn insert_some<V: Into<AttributeValue>>(&mut self, key: AttributeKey, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &AttributeKey) -> Option<&AttributeValue> {
        self.entries.get(key)
    }

    pub fn get_str(&self, key: &AttributeKey) -> Option<&str> {
        self.get(key).and_then(AttributeValue::as_str)
    }

    pub fn get_bool(&self, key: &AttributeKey) -> Option<bool> {
        self.get(key).and_then(AttributeValue::as_bool)
    }

    pub fn contains_key(&self, key: &AttributeKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &AttributeKey) -> Option<AttributeValue> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, AttributeKey, AttributeValue> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &AttributeKey> {
        self.entries.keys()
    }

    /// Merge `other` into `self`. On key collisions the value from `other` wins.
    pub fn merge(&mut self, other: AttributeDictionary) {
        self.entries.extend(other.entries);
    }

    /// By-value form of [`merge`](Self::merge).
    pub fn merged(mut self, other: AttributeDictionary) -> Self {
        self.merge(other);
        self
    }

    /// Read a required attribute as `T`.
    ///
    /// Fails with [`KeychainItemMappingError::AttributeNotFound`] when the key
    /// is absent and [`KeychainItemMappingError::AttributeTypeMismatch`] when
    /// the value has a different dynamic type.
    pub fn value<T: FromAttributeValue>(
        &self,
        key: AttributeKey,
    ) -> Result<T, KeychainItemMappingError> {
        let raw = self
            .get(&key)
            .ok_or(KeychainItemMappingError::AttributeNotFound(key))?;

        T::from_attribute_value(raw).ok_or(KeychainItemMappingError::AttributeTypeMismatch {
            attribute: key,
            expected: T::KIND,
        })
    }
}

impl FromIterator<(AttributeKey, AttributeValue)> for AttributeDictionary {
    fn from_iter<I: IntoIterator<Item = (AttributeKey, AttributeValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(AttributeKey, AttributeValue)> for AttributeDictionary {
    fn extend<I: IntoIterator<Item = (AttributeKey, AttributeValue)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a> IntoIterator for &'a AttributeDictionary {
    type Item = (&'a AttributeKey, &'a AttributeValue);
    type IntoIter = btree_map::Iter<'a, AttributeKey, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for AttributeDictionary {
    type Item = (AttributeKey, AttributeValue);
    type IntoIter = btree_map::IntoIter<AttributeKey, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
