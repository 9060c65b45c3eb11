use seckit_core::SecretData;
use std::fmt;

/// Symbolic constants understood by the secure item store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// Class of generic secrets.
    GenericSecret,
    /// Class of network secrets.
    NetworkSecret,
    /// Limit value meaning "return every match".
    MatchLimitAll,
}

impl Constant {
    /// The constant's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Constant::GenericSecret => "generic-secret",
            Constant::NetworkSecret => "network-secret",
            Constant::MatchLimitAll => "match-all",
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dynamically typed attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeValue {
    String(String),
    Data(SecretData),
    Bool(bool),
    Integer(i64),
    Constant(Constant),
}

impl AttributeValue {
    /// The value's dynamic type.
    pub fn kind(&self) -> ValueKind {
        match self {
            AttributeValue::String(_) => ValueKind::String,
            AttributeValue::Data(_) => ValueKind::Data,
            AttributeValue::Bool(_) => ValueKind::Bool,
            AttributeValue::Integer(_) => ValueKind::Integer,
            AttributeValue::Constant(_) => ValueKind::Constant,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::String(s)
    }
}

impl From<SecretData> for AttributeValue {
    fn from(data: SecretData) -> Self {
        AttributeValue::Data(data)
    }
}

impl From<Vec<u8>> for AttributeValue {
    fn from(bytes: Vec<u8>) -> Self {
        AttributeValue::Data(SecretData::new(bytes))
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Bool(b)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        AttributeValue::Integer(n)
    }
}

impl From<Constant> for AttributeValue {
    fn from(c: Constant) -> Self {
        AttributeValue::Constant(c)
    }
}

/// The dynamic type of an [`AttributeValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Data,
    Bool,
    Integer,
    Constant,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Data => "data",
            ValueKind::Bool => "bool",
            ValueKind::Integer => "integer",
            ValueKind::Constant => "constant",
        };
        f.write_str(name)
    }
}

/// Types that can be extracted from an [`AttributeValue`].
pub trait FromAttributeValue: Sized {
    /// The dynamic type this Rust type is extracted from.
    const KIND: ValueKind;

    /// Convert the value, or return `None` if it has a different dynamic type.
    fn from_attribute_value(value: &AttributeValue) -> Option<Self>;
}

impl FromAttributeValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn from_attribute_value(value: &AttributeValue) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromAttributeValue for SecretData {
    const KIND: ValueKind = ValueKind::Data;

    fn from_attribute_value(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Data(data) => Some(data.clone()),
            _ => None,
        }
    }
}

impl FromAttributeValue for Vec<u8> {
    const KIND: ValueKind = ValueKind::Data;

    fn from_attribute_value(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Data(data) => Some(data.expose_secret().to_vec()),
            _ => None,
        }
    }
}

impl FromAttributeValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn from_attribute_value(value: &AttributeValue) -> Option<Self> {
        value.as_bool()
    }
}

impl FromAttributeValue for i64 {
    const KIND: ValueKind = ValueKind::Integer;

    fn from_attribute_value(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl FromAttributeValue for Constant {
    const KIND: ValueKind = ValueKind::Constant;

    fn from_attribute_value(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Constant(c) => Some(*c),
            _ => None,
        }
    }
}
