//! macOS keychain adapter.
//!
//! Translates attribute dictionaries to CoreFoundation dictionaries and calls
//! `SecItemAdd`, `SecItemCopyMatching`, and `SecItemDelete` directly.
//!
//! Keys without a platform name are sent as-is, but only the well-known keys
//! are read back: custom attributes never appear in returned records.
//! Results of a CF type with no attribute counterpart are reported as absent,
//! which the façade surfaces as corrupted data.

use core_foundation::array::CFArray;
use core_foundation::base::{CFType, CFTypeRef, TCFType};
use core_foundation::boolean::CFBoolean;
use core_foundation::data::CFData;
use core_foundation::dictionary::CFDictionary;
use core_foundation::number::CFNumber;
use core_foundation::string::{CFString, CFStringRef};
use security_framework_sys::keychain_item::{SecItemAdd, SecItemCopyMatching, SecItemDelete};
use tracing::debug;

use super::KeychainServices;
use crate::attributes::{AttributeDictionary, AttributeKey, AttributeValue, Constant, RawResult};
use crate::error::{status, KeychainServicesError};

/// Platform names of the well-known keys.
const KEY_NAMES: [(AttributeKey, &str); 10] = [
    (AttributeKey::ACCOUNT, "acct"),
    (AttributeKey::SERVICE, "svce"),
    (AttributeKey::SERVER, "srvr"),
    (AttributeKey::CLASS, "class"),
    (AttributeKey::RETURN_ATTRIBUTES, "r_Attributes"),
    (AttributeKey::RETURN_DATA, "r_Data"),
    (AttributeKey::USE_PROTECTED_STORE, "nleg"),
    (AttributeKey::SECRET_DATA, "v_Data"),
    (AttributeKey::CASE_INSENSITIVE, "m_CaseInsensitive"),
    (AttributeKey::LIMIT, "m_Limit"),
];

/// The system keychain, reached through Security.framework.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityFrameworkServices;

fn platform_key(key: &AttributeKey) -> &'static str {
    KEY_NAMES
        .iter()
        .find(|(known, _)| known == key)
        .map(|(_, name)| *name)
        .unwrap_or_else(|| key.as_str())
}

fn attribute_key(name: &str) -> Option<AttributeKey> {
    KEY_NAMES
        .iter()
        .find(|(_, known)| *known == name)
        .map(|(key, _)| *key)
}

fn platform_constant(constant: Constant) -> &'static str {
    match constant {
        Constant::GenericSecret => "genp",
        Constant::NetworkSecret => "inet",
        Constant::MatchLimitAll => "m_LimitAll",
    }
}

fn to_cf_value(value: &AttributeValue) -> CFType {
    match value {
        AttributeValue::String(s) => CFString::new(s).as_CFType(),
        AttributeValue::Data(data) => CFData::from_buffer(data.expose_secret()).as_CFType(),
        AttributeValue::Bool(b) => CFBoolean::from(*b).as_CFType(),
        AttributeValue::Integer(n) => CFNumber::from(*n).as_CFType(),
        AttributeValue::Constant(c) => {
            CFString::from_static_string(platform_constant(*c)).as_CFType()
        }
    }
}

fn to_cf_dictionary(dictionary: &AttributeDictionary) -> CFDictionary<CFString, CFType> {
    let pairs: Vec<(CFString, CFType)> = dictionary
        .iter()
        .map(|(key, value)| (CFString::from_static_string(platform_key(key)), to_cf_value(value)))
        .collect();
    CFDictionary::from_CFType_pairs(&pairs)
}

fn from_cf_value(key: Option<AttributeKey>, value: &CFType) -> Option<AttributeValue> {
    if let Some(s) = value.downcast::<CFString>() {
        let s = s.to_string();
        if key == Some(AttributeKey::CLASS) {
            return match s.as_str() {
                "genp" => Some(AttributeValue::Constant(Constant::GenericSecret)),
                "inet" => Some(AttributeValue::Constant(Constant::NetworkSecret)),
                _ => Some(AttributeValue::String(s)),
            };
        }
        return Some(AttributeValue::String(s));
    }
    if let Some(data) = value.downcast::<CFData>() {
        return Some(AttributeValue::from(data.bytes().to_vec()));
    }
    if let Some(b) = value.downcast::<CFBoolean>() {
        return Some(AttributeValue::Bool(b.into()));
    }
    if let Some(n) = value.downcast::<CFNumber>() {
        return n.to_i64().map(AttributeValue::Integer);
    }
    None
}

fn from_cf_dictionary(dictionary: &CFDictionary) -> AttributeDictionary {
    let (keys, values) = dictionary.get_keys_and_values();
    keys.into_iter()
        .zip(values)
        .filter_map(|(key, value)| {
            // SAFETY: keychain attribute dictionaries are keyed by CFStrings,
            // and both pointers are borrowed from `dictionary`.
            let name = unsafe { CFString::wrap_under_get_rule(key as CFStringRef) }.to_string();
            let key = attribute_key(&name)?;
            let value = unsafe { CFType::wrap_under_get_rule(value as CFTypeRef) };
            from_cf_value(Some(key), &value).map(|value| (key, value))
        })
        .collect()
}

fn from_cf_result(value: &CFType) -> Option<RawResult> {
    if let Some(dictionary) = value.downcast::<CFDictionary>() {
        return Some(RawResult::Record(from_cf_dictionary(&dictionary)));
    }
    if let Some(array) = value.downcast::<CFArray>() {
        return array
            .iter()
            .map(|item| {
                // SAFETY: array elements are CF objects borrowed from `array`.
                let item = unsafe { CFType::wrap_under_get_rule(*item as CFTypeRef) };
                from_cf_result(&item)
            })
            .collect::<Option<Vec<_>>>()
            .map(RawResult::List);
    }
    from_cf_value(None, value).map(RawResult::Value)
}

/// Take ownership of a result returned under the create rule.
fn take_result(result: CFTypeRef) -> Option<RawResult> {
    if result.is_null() {
        return None;
    }
    // SAFETY: Security.framework returns an owned (+1) reference.
    let value = unsafe { CFType::wrap_under_create_rule(result) };
    from_cf_result(&value)
}

fn check(osstatus: i32) -> Result<(), KeychainServicesError> {
    if osstatus == status::SUCCESS {
        Ok(())
    } else {
        Err(KeychainServicesError::new(osstatus))
    }
}

impl KeychainServices for SecurityFrameworkServices {
    fn add_item(
        &self,
        attributes: &AttributeDictionary,
    ) -> Result<Option<RawResult>, KeychainServicesError> {
        let query = to_cf_dictionary(attributes);
        let mut result: CFTypeRef = std::ptr::null();
        // SAFETY: `query` outlives the call and `result` is a valid out-pointer.
        let osstatus = unsafe { SecItemAdd(query.as_concrete_TypeRef(), &mut result) };
        debug!(osstatus, "SecItemAdd");
        check(osstatus)?;
        Ok(take_result(result))
    }

    fn items(
        &self,
        query: &AttributeDictionary,
    ) -> Result<Option<RawResult>, KeychainServicesError> {
        let query = to_cf_dictionary(query);
        let mut result: CFTypeRef = std::ptr::null();
        // SAFETY: `query` outlives the call and `result` is a valid out-pointer.
        let osstatus = unsafe { SecItemCopyMatching(query.as_concrete_TypeRef(), &mut result) };
        debug!(osstatus, "SecItemCopyMatching");
        check(osstatus)?;
        Ok(take_result(result))
    }

    fn delete_items(&self, query: &AttributeDictionary) -> Result<(), KeychainServicesError> {
        let query = to_cf_dictionary(query);
        // SAFETY: `query` outlives the call.
        let osstatus = unsafe { SecItemDelete(query.as_concrete_TypeRef()) };
        debug!(osstatus, "SecItemDelete");
        check(osstatus)
    }
}
