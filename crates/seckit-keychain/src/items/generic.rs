use seckit_core::SecretData;

use super::return_directives;
use crate::attributes::{AttributeDictionary, AttributeKey, Constant, RawResult};
use crate::descriptor::{
    map_record_list, map_single_record, AdditionAttributes, FromAttributes, ItemQuery,
};
use crate::encoding::TextEncoding;
use crate::error::KeychainItemMappingError;

/// A generic secret, identified by service and account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenericSecret {
    service: String,
    account: String,
    data: SecretData,
}

impl GenericSecret {
    pub fn new(
        service: impl Into<String>,
        account: impl Into<String>,
        data: impl Into<SecretData>,
    ) -> Self {
        Self {
            service: service.into(),
            account: account.into(),
            data: data.into(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    /// The secret bytes.
    pub fn data(&self) -> &[u8] {
        self.data.expose_secret()
    }

    pub fn secret(&self) -> &SecretData {
        &self.data
    }

    /// The secret decoded as text, or `None` if it is not valid in `encoding`.
    pub fn password(&self, encoding: TextEncoding) -> Option<String> {
        encoding.decode(self.data())
    }

    /// The secret decoded as UTF-8 text.
    pub fn password_utf8(&self) -> Option<String> {
        self.password(TextEncoding::Utf8)
    }

    /// A query matching exactly this item.
    pub fn query(&self) -> GenericSecretQuery {
        GenericSecretQuery::new()
            .with_service(self.service.clone())
            .with_account(self.account.clone())
    }
}

impl FromAttributes for GenericSecret {
    fn from_attributes(attributes: &AttributeDictionary) -> Result<Self, KeychainItemMappingError> {
        let service: String = attributes.value(AttributeKey::SERVICE)?;
        let account: String = attributes.value(AttributeKey::ACCOUNT)?;
        let data: SecretData = attributes.value(AttributeKey::SECRET_DATA)?;
        Ok(Self::new(service, account, data))
    }
}

/// Attributes for adding a generic secret.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenericSecretAttributes {
    pub service: String,
    pub account: String,
    pub data: SecretData,
}

impl GenericSecretAttributes {
    pub fn new(
        service: impl Into<String>,
        account: impl Into<String>,
        data: impl Into<SecretData>,
    ) -> Self {
        Self {
            service: service.into(),
            account: account.into(),
            data: data.into(),
        }
    }

    /// Attributes whose secret is `password` encoded with `encoding`.
    ///
    /// Returns `None` if the password cannot be represented in `encoding`.
    pub fn with_password(
        service: impl Into<String>,
        account: impl Into<String>,
        password: &str,
        encoding: TextEncoding,
    ) -> Option<Self> {
        let data = encoding.encode(password)?;
        Some(Self::new(service, account, data))
    }
}

impl AdditionAttributes for GenericSecretAttributes {
    type Item = GenericSecret;

    fn to_dictionary(&self) -> AttributeDictionary {
        AttributeDictionary::new()
            .with(AttributeKey::ACCOUNT, self.account.as_str())
            .with(AttributeKey::SERVICE, self.service.as_str())
            .with(AttributeKey::CLASS, Constant::GenericSecret)
            .with(AttributeKey::USE_PROTECTED_STORE, true)
            .with(AttributeKey::SECRET_DATA, self.data.clone())
            .merged(return_directives())
    }

    fn map_added_item(&self, raw: RawResult) -> Result<GenericSecret, KeychainItemMappingError> {
        map_single_record(raw)
    }
}

/// A query for generic secrets. Unset fields match any value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GenericSecretQuery {
    pub service: Option<String>,
    pub account: Option<String>,
}

impl GenericSecretQuery {
    /// A query matching every generic secret.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }
}

impl ItemQuery for GenericSecretQuery {
    type Item = GenericSecret;

    fn filter_dictionary(&self) -> AttributeDictionary {
        let mut dictionary = AttributeDictionary::new()
            .with(AttributeKey::CLASS, Constant::GenericSecret)
            .with(AttributeKey::USE_PROTECTED_STORE, true);
        dictionary.insert_some(AttributeKey::ACCOUNT, self.account.as_deref());
        dictionary.insert_some(AttributeKey::SERVICE, self.service.as_deref());
        dictionary
    }

    fn return_dictionary(&self) -> AttributeDictionary {
        return_directives()
    }

    fn map_matching_items(
        &self,
        raw: RawResult,
    ) -> Result<Vec<GenericSecret>, KeychainItemMappingError> {
        map_record_list(raw)
    }
}
