//! Syntactic building blocks for SQL query construction: wildcard selector
//! validation (`*`, `table.*`) and classification of expression text into a
//! closed set of kinds. No schema access, no execution.

pub mod parser;
pub use parser::{
    classify_expression, is_wildcard, parse_wildcard, validate_wildcard, ClassifierConfig,
    ExpressionClassifier, Wildcard, WildcardError, WildcardErrorKind,
};

pub mod types;
pub use types::{IdentifierType, TypeInput, TypeMeta};
