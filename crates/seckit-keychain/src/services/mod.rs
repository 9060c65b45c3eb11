//! The secure item store boundary.
//!
//! [`KeychainServices`] is the only seam between the typed façade and the
//! store. The store is shared, process-external state: every implementation
//! must tolerate concurrent calls, and separate façades that use the same
//! backend observe the same records.

mod memory;
#[cfg(target_os = "macos")]
mod platform;

pub use memory::MemoryKeychainServices;
#[cfg(target_os = "macos")]
pub use platform::SecurityFrameworkServices;

use crate::attributes::{AttributeDictionary, RawResult};
use crate::error::KeychainServicesError;
use seckit_core::Backend;
use std::fmt::Debug;
use std::sync::Arc;

/// Access to a secure item store.
///
/// A not-found condition is reported as an error with
/// [`status::ITEM_NOT_FOUND`](crate::error::status::ITEM_NOT_FOUND); callers
/// decide whether that is a failure.
pub trait KeychainServices: Send + Sync + Debug {
    /// Add an item described by `attributes`.
    fn add_item(
        &self,
        attributes: &AttributeDictionary,
    ) -> Result<Option<RawResult>, KeychainServicesError>;

    /// Return items matching `query`, which holds match attributes, return
    /// directives, and search options.
    fn items(&self, query: &AttributeDictionary)
        -> Result<Option<RawResult>, KeychainServicesError>;

    /// Delete every item matching `query`.
    fn delete_items(&self, query: &AttributeDictionary) -> Result<(), KeychainServicesError>;
}

/// The services used by [`crate::Keychain::new`].
pub fn default_services() -> Arc<dyn KeychainServices> {
    services_for(Backend::Platform)
}

/// Services for a configured backend.
///
/// On platforms without a supported keychain the platform backend falls back
/// to the process-wide in-memory store.
pub fn services_for(backend: Backend) -> Arc<dyn KeychainServices> {
    match backend {
        Backend::Memory => Arc::new(MemoryKeychainServices::shared()),
        Backend::Platform => platform_services(),
    }
}

#[cfg(target_os = "macos")]
fn platform_services() -> Arc<dyn KeychainServices> {
    Arc::new(SecurityFrameworkServices)
}

#[cfg(not(target_os = "macos"))]
fn platform_services() -> Arc<dyn KeychainServices> {
    tracing::warn!("platform keychain not available; using the in-memory store");
    Arc::new(MemoryKeychainServices::shared())
}
