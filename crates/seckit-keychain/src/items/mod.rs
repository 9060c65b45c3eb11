//! Concrete keychain item kinds.

mod generic;
mod network;

pub use generic::{GenericSecret, GenericSecretAttributes, GenericSecretQuery};
pub use network::{NetworkSecret, NetworkSecretAttributes, NetworkSecretQuery};

use crate::attributes::AttributeDictionary;
use crate::attributes::AttributeKey;

/// Directives asking the store to return both attributes and data.
fn return_directives() -> AttributeDictionary {
    AttributeDictionary::new()
        .with(AttributeKey::RETURN_ATTRIBUTES, true)
        .with(AttributeKey::RETURN_DATA, true)
}
