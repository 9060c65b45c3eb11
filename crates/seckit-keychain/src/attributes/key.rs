use std::fmt;

/// A key in an attribute dictionary.
///
/// Well-known keys are provided as associated constants. Additional keys can
/// be created with [`AttributeKey::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttributeKey(&'static str);

impl AttributeKey {
    /// Account name of an item.
    pub const ACCOUNT: Self = Self("account");
    /// Service of a generic secret.
    pub const SERVICE: Self = Self("service");
    /// Server of a network secret.
    pub const SERVER: Self = Self("server");
    /// Item class discriminator.
    pub const CLASS: Self = Self("class");
    /// Asks the store to return item attributes.
    pub const RETURN_ATTRIBUTES: Self = Self("returnAttributes");
    /// Asks the store to return item data.
    pub const RETURN_DATA: Self = Self("returnData");
    /// Scopes the request to the data-protection store.
    pub const USE_PROTECTED_STORE: Self = Self("useProtectedStore");
    /// Secret payload of an item.
    pub const SECRET_DATA: Self = Self("secretData");
    /// Case-insensitive string matching.
    pub const CASE_INSENSITIVE: Self = Self("caseInsensitive");
    /// Maximum number of matches.
    pub const LIMIT: Self = Self("limit");

    /// Create a key with the given wire name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The key's wire name.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Whether the key steers how the store answers a request rather than
    /// describing an item.
    pub fn is_directive(&self) -> bool {
        [
            Self::RETURN_ATTRIBUTES,
            Self::RETURN_DATA,
            Self::USE_PROTECTED_STORE,
            Self::CASE_INSENSITIVE,
            Self::LIMIT,
        ]
        .contains(self)
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl From<AttributeKey> for String {
    fn from(key: AttributeKey) -> Self {
        key.0.to_string()
    }
}
