use seckit_core::SecretData;

use super::return_directives;
use crate::attributes::{AttributeDictionary, AttributeKey, Constant, RawResult};
use crate::descriptor::{
    map_record_list, map_single_record, AdditionAttributes, FromAttributes, ItemQuery,
};
use crate::encoding::TextEncoding;
use crate::error::KeychainItemMappingError;

/// A network secret, identified by server and account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetworkSecret {
    server: String,
    account: String,
    data: SecretData,
}

impl NetworkSecret {
    pub fn new(
        server: impl Into<String>,
        account: impl Into<String>,
        data: impl Into<SecretData>,
    ) -> Self {
        Self {
            server: server.into(),
            account: account.into(),
            data: data.into(),
        }
    }

    pub fn server(&self) -> &str {
        &self.server
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
    pub fn query(&self) -> NetworkSecretQuery {
        NetworkSecretQuery::new()
            .with_server(self.server.clone())
            .with_account(self.account.clone())
    }
}

impl FromAttributes for NetworkSecret {
    fn from_attributes(attributes: &AttributeDictionary) -> Result<Self, KeychainItemMappingError> {
        let server: String = attributes.value(AttributeKey::SERVER)?;
        let account: String = attributes.value(AttributeKey::ACCOUNT)?;
        let data: SecretData = attributes.value(AttributeKey::SECRET_DATA)?;
        Ok(Self::new(server, account, data))
    }
}

/// Attributes for adding a network secret.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetworkSecretAttributes {
    pub server: String,
    pub account: String,
    pub data: SecretData,
}

impl NetworkSecretAttributes {
    pub fn new(
        server: impl Into<String>,
        account: impl Into<String>,
        data: impl Into<SecretData>,
    ) -> Self {
        Self {
            server: server.into(),
            account: account.into(),
            data: data.into(),
        }
    }

    /// Attributes whose secret is `password` encoded with `encoding`.
    ///
    /// Returns `None` if the password cannot be represented in `encoding`.
    pub fn with_password(
        server: impl Into<String>,
        account: impl Into<String>,
        password: &str,
        encoding: TextEncoding,
    ) -> Option<Self> {
        let data = encoding.encode(password)?;
        Some(Self::new(server, account, data))
    }
}

impl AdditionAttributes for NetworkSecretAttributes {
    type Item = NetworkSecret;

    fn to_dictionary(&self) -> AttributeDictionary {
        AttributeDictionary::new()
            .with(AttributeKey::ACCOUNT, self.account.as_str())
            .with(AttributeKey::SERVER, self.server.as_str())
            .with(AttributeKey::CLASS, Constant::NetworkSecret)
            .with(AttributeKey::USE_PROTECTED_STORE, true)
            .with(AttributeKey::SECRET_DATA, self.data.clone())
            .merged(return_directives())
    }

    fn map_added_item(&self, raw: RawResult) -> Result<NetworkSecret, KeychainItemMappingError> {
        map_single_record(raw)
    }
}

/// A query for network secrets. Unset fields match any value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NetworkSecretQuery {
    pub server: Option<String>,
    pub account: Option<String>,
}

impl NetworkSecretQuery {
    /// A query matching every network secret.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }
}

impl ItemQuery for NetworkSecretQuery {
    type Item = NetworkSecret;

    fn filter_dictionary(&self) -> AttributeDictionary {
        let mut dictionary = AttributeDictionary::new()
            .with(AttributeKey::CLASS, Constant::NetworkSecret)
            .with(AttributeKey::USE_PROTECTED_STORE, true);
        dictionary.insert_some(AttributeKey::ACCOUNT, self.account.as_deref());
        dictionary.insert_some(AttributeKey::SERVER, self.server.as_deref());
        dictionary
    }

    fn return_dictionary(&self) -> AttributeDictionary {
        return_directives()
    }

    fn map_matching_items(
        &self,
        raw: RawResult,
    ) -> Result<Vec<NetworkSecret>, KeychainItemMappingError> {
        map_record_list(raw)
    }
}
