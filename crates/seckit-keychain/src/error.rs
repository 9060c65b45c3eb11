//! Error types for keychain operations.
//!
//! Two disjoint families: [`KeychainItemMappingError`] for failures converting
//! between raw dictionaries and typed items, and [`KeychainServicesError`] for
//! non-success statuses reported by the secure item store.

use crate::attributes::{AttributeKey, ValueKind};
use thiserror::Error;

/// Status codes reported by the secure item store.
pub mod status {
    pub const SUCCESS: i32 = 0;
    pub const UNIMPLEMENTED: i32 = -4;
    pub const PARAM: i32 = -50;
    pub const ALLOCATE: i32 = -108;
    pub const NOT_AVAILABLE: i32 = -25291;
    pub const AUTH_FAILED: i32 = -25293;
    pub const DUPLICATE_ITEM: i32 = -25299;
    pub const ITEM_NOT_FOUND: i32 = -25300;
    pub const INTERACTION_NOT_ALLOWED: i32 = -25308;
    pub const DECODE: i32 = -26275;
    pub const MISSING_ENTITLEMENT: i32 = -34018;
}

/// An error that occurs while mapping a raw store result to a typed item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeychainItemMappingError {
    #[error("Item data is corrupted or has an unexpected shape")]
    DataCorrupted,

    #[error("Attribute not found: {0}")]
    AttributeNotFound(AttributeKey),

    #[error("Attribute {attribute} does not have type {expected}")]
    AttributeTypeMismatch {
        attribute: AttributeKey,
        expected: ValueKind,
    },
}

/// A non-success status reported by the secure item store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{}", describe(.status))]
pub struct KeychainServicesError {
    status: i32,
}

impl KeychainServicesError {
    pub fn new(status: i32) -> Self {
        Self { status }
    }

    /// The opaque platform status code.
    pub fn status(&self) -> i32 {
        self.status
    }

    pub fn is_item_not_found(&self) -> bool {
        self.status == status::ITEM_NOT_FOUND
    }

    pub fn is_duplicate_item(&self) -> bool {
        self.status == status::DUPLICATE_ITEM
    }

    /// A human-readable description of the status.
    ///
    /// Uses the platform's message when one is available, then a built-in
    /// table, then `"Unknown error: <code>"`.
    pub fn description(&self) -> String {
        describe(&self.status)
    }
}

fn describe(code: &i32) -> String {
    let code = *code;
    platform_message(code)
        .or_else(|| known_message(code).map(str::to_string))
        .unwrap_or_else(|| format!("Unknown error: {code}"))
}

#[cfg(target_os = "macos")]
fn platform_message(code: i32) -> Option<String> {
    security_framework::base::Error::from_code(code).message()
}

#[cfg(not(target_os = "macos"))]
fn platform_message(_code: i32) -> Option<String> {
    None
}

fn known_message(code: i32) -> Option<&'static str> {
    let message = match code {
        status::SUCCESS => "No error.",
        status::UNIMPLEMENTED => "Function or operation not implemented.",
        status::PARAM => "One or more parameters passed to a function were not valid.",
        status::ALLOCATE => "Failed to allocate memory.",
        status::NOT_AVAILABLE => "No keychain is available.",
        status::AUTH_FAILED => "The user name or passphrase you entered is not correct.",
        status::DUPLICATE_ITEM => "The specified item already exists in the keychain.",
        status::ITEM_NOT_FOUND => "The specified item could not be found in the keychain.",
        status::INTERACTION_NOT_ALLOWED => "User interaction is not allowed.",
        status::DECODE => "Unable to decode the provided data.",
        status::MISSING_ENTITLEMENT => "A required entitlement isn't present.",
        _ => return None,
    };
    Some(message)
}

/// Errors returned by [`crate::Keychain`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeychainError {
    #[error("Mapping error: {0}")]
    Mapping(#[from] KeychainItemMappingError),

    #[error("Keychain services error ({}): {0}", .0.status())]
    Services(#[from] KeychainServicesError),
}

/// Convenience result alias for keychain operations.
pub type Result<T> = std::result::Result<T, KeychainError>;
