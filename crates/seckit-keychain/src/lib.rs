//! Typed access to the platform's secure item store.
//!
//! Callers describe what to add or find with typed descriptors such as
//! [`GenericSecretAttributes`] and [`NetworkSecretQuery`]; [`Keychain`]
//! renders them as attribute dictionaries, delegates to a
//! [`KeychainServices`] backend, and maps the results back into
//! [`GenericSecret`] and [`NetworkSecret`] values.
//!
//! ```no_run
//! use seckit_keychain::{GenericSecretAttributes, Keychain, QueryOptions};
//!
//! # fn main() -> seckit_keychain::Result<()> {
//! let keychain = Keychain::new();
//! let item = keychain.add_item(&GenericSecretAttributes::new("api", "alice", "s3cret"))?;
//! let found = keychain.items(&item.query(), QueryOptions::default())?;
//! assert_eq!(found, vec![item.clone()]);
//! keychain.delete_items(&item.query())?;
//! # Ok(())
//! # }
//! ```

pub mod attributes;
pub mod descriptor;
pub mod encoding;
pub mod error;
pub mod items;
pub mod keychain;
pub mod services;

pub use attributes::{AttributeDictionary, AttributeKey, AttributeValue, Constant, RawResult};
pub use descriptor::{AdditionAttributes, FromAttributes, ItemQuery};
pub use encoding::TextEncoding;
pub use error::{KeychainError, KeychainItemMappingError, KeychainServicesError, Result};
pub use items::{
    GenericSecret, GenericSecretAttributes, GenericSecretQuery, NetworkSecret,
    NetworkSecretAttributes, NetworkSecretQuery,
};
pub use keychain::{Keychain, QueryOptions};
pub use services::{KeychainServices, MemoryKeychainServices};
