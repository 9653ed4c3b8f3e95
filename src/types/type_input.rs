use std::borrow::Cow;

use serde_json::Value;

use crate::types::IdentifierType;

/// Input shapes accepted by [`IdentifierType::parse_from`].
#[derive(Debug, Clone, PartialEq)]
pub enum TypeInput<'a> {
    Type(IdentifierType),
    Code(i64),
    Name(Cow<'a, str>),
    Unsupported,
}

impl From<IdentifierType> for TypeInput<'_> {
    fn from(value: IdentifierType) -> Self {
        TypeInput::Type(value)
    }
}

impl From<i32> for TypeInput<'_> {
    fn from(value: i32) -> Self {
        TypeInput::Code(i64::from(value))
    }
}

impl From<i64> for TypeInput<'_> {
    fn from(value: i64) -> Self {
        TypeInput::Code(value)
    }
}

impl From<u8> for TypeInput<'_> {
    fn from(value: u8) -> Self {
        TypeInput::Code(i64::from(value))
    }
}

impl From<usize> for TypeInput<'_> {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or(TypeInput::Unsupported, TypeInput::Code)
    }
}

impl<'a> From<&'a str> for TypeInput<'a> {
    fn from(value: &'a str) -> Self {
        TypeInput::Name(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for TypeInput<'a> {
    fn from(value: &'a String) -> Self {
        TypeInput::Name(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for TypeInput<'_> {
    fn from(value: String) -> Self {
        TypeInput::Name(Cow::Owned(value))
    }
}

// Integers become codes and strings become names; floats, bools, null,
// arrays and objects are not coercible.
impl<'a> From<&'a Value> for TypeInput<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Number(n) => n.as_i64().map_or(TypeInput::Unsupported, TypeInput::Code),
            Value::String(s) => TypeInput::Name(Cow::Borrowed(s.as_str())),
            _ => TypeInput::Unsupported,
        }
    }
}
