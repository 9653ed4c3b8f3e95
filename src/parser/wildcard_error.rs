use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Why an expression was rejected as a wildcard selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WildcardErrorKind {
    /// Blank or whitespace-only input.
    EmptyExpression,
    /// `AS` keyword with nothing after it, e.g. `* AS`.
    MalformedAlias,
    /// Explicit (`* AS x`) or implicit (`users.* x`) alias.
    AliasedWildcard,
    /// Anything that is not a recognized wildcard shape.
    InvalidSyntax,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardError {
    pub kind: WildcardErrorKind,
    /// The trimmed input that was rejected.
    pub expression: String,
}

impl WildcardError {
    pub fn new(kind: WildcardErrorKind, expression: &str) -> Self {
        Self {
            kind,
            expression: expression.to_string(),
        }
    }

    pub fn err<T>(self) -> Result<T, WildcardError> {
        Err(self)
    }

    pub fn kind(&self) -> WildcardErrorKind {
        self.kind
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }
}

impl Display for WildcardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            WildcardErrorKind::EmptyExpression => write!(f, "empty expression"),
            WildcardErrorKind::MalformedAlias => {
                write!(f, "malformed expression: {:?}", self.expression)
            }
            WildcardErrorKind::AliasedWildcard => {
                write!(f, "wildcard cannot be aliased: {:?}", self.expression)
            }
            WildcardErrorKind::InvalidSyntax => {
                write!(f, "invalid wildcard syntax: {:?}", self.expression)
            }
        }
    }
}

impl std::error::Error for WildcardError {}

#[cfg(test)]
mod tests {
    use crate::parser::{WildcardError, WildcardErrorKind};

    #[test]
    pub fn test_display_messages() {
        let empty = WildcardError::new(WildcardErrorKind::EmptyExpression, "");
        assert_eq!(empty.to_string(), "empty expression");

        let malformed = WildcardError::new(WildcardErrorKind::MalformedAlias, "* AS");
        assert_eq!(malformed.to_string(), "malformed expression: \"* AS\"");

        let aliased = WildcardError::new(WildcardErrorKind::AliasedWildcard, "users.* alias");
        assert_eq!(aliased.to_string(), "wildcard cannot be aliased: \"users.* alias\"");

        let syntax = WildcardError::new(WildcardErrorKind::InvalidSyntax, "qty * price");
        assert_eq!(syntax.to_string(), "invalid wildcard syntax: \"qty * price\"");
    }

    #[test]
    pub fn test_err_helper() {
        let result: Result<(), WildcardError> =
            WildcardError::new(WildcardErrorKind::InvalidSyntax, "x").err();

        let err = result.unwrap_err();
        assert_eq!(err.kind(), WildcardErrorKind::InvalidSyntax);
        assert_eq!(err.expression(), "x");
    }

    #[test]
    pub fn test_is_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(WildcardError::new(WildcardErrorKind::EmptyExpression, ""));
        assert_eq!(err.to_string(), "empty expression");
    }
}
