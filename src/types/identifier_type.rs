use std::fmt;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::TypeInput;

/// Syntactic classification of a SQL expression.
///
/// Classification is purely syntactic: `SUM(qty)` is an `Aggregate` even when
/// it sits somewhere a query would not allow it. `Unknown` and `Invalid` are
/// fallbacks and never report as valid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum IdentifierType {
    #[default]
    Unknown = 0,
    /// Could not classify.
    Invalid = 1,
    /// `(SELECT ...)`
    #[serde(alias = "sq")]
    Subquery = 2,
    /// Any other parenthesized expression, e.g. `(a + b)`.
    #[serde(alias = "cp")]
    Computed = 3,
    /// `SUM`, `COUNT`, `MAX`, `MIN`, `AVG` calls.
    #[serde(alias = "ag")]
    Aggregate = 4,
    /// Any other call, e.g. `JSON_EXTRACT(data)`.
    #[serde(alias = "fn")]
    Function = 5,
    /// Quoted string or numeric constant.
    #[serde(alias = "lt")]
    Literal = 6,
    /// Plain table or column name; the default fallback.
    #[serde(alias = "ex")]
    Expression = 7,
    /// `*` or a qualified `table.*`.
    #[serde(alias = "wc")]
    Wildcard = 8,
}

/// Canonical label and two-letter alias of a registered type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMeta {
    pub name: &'static str,
    pub alias: &'static str,
}

static REGISTRY: [(IdentifierType, TypeMeta); 7] = [
    (IdentifierType::Subquery, TypeMeta { name: "Subquery", alias: "sq" }),
    (IdentifierType::Computed, TypeMeta { name: "Computed", alias: "cp" }),
    (IdentifierType::Aggregate, TypeMeta { name: "Aggregate", alias: "ag" }),
    (IdentifierType::Function, TypeMeta { name: "Function", alias: "fn" }),
    (IdentifierType::Literal, TypeMeta { name: "Literal", alias: "lt" }),
    (IdentifierType::Expression, TypeMeta { name: "Expression", alias: "ex" }),
    (IdentifierType::Wildcard, TypeMeta { name: "Wildcard", alias: "wc" }),
];

// lowercase name and alias -> type
static NAME_INDEX: Lazy<IndexMap<String, IdentifierType>> = Lazy::new(|| {
    let mut index = IndexMap::new();
    for (kind, meta) in REGISTRY.iter() {
        index.insert(meta.name.to_ascii_lowercase(), *kind);
        index.insert(meta.alias.to_ascii_lowercase(), *kind);
    }
    index
});

impl IdentifierType {
    pub const ALL: [IdentifierType; 9] = [
        IdentifierType::Unknown,
        IdentifierType::Invalid,
        IdentifierType::Subquery,
        IdentifierType::Computed,
        IdentifierType::Aggregate,
        IdentifierType::Function,
        IdentifierType::Literal,
        IdentifierType::Expression,
        IdentifierType::Wildcard,
    ];

    /// Registry metadata; `None` for `Unknown` and `Invalid`.
    pub fn meta(self) -> Option<&'static TypeMeta> {
        let index = match self {
            IdentifierType::Unknown | IdentifierType::Invalid => return None,
            IdentifierType::Subquery => 0,
            IdentifierType::Computed => 1,
            IdentifierType::Aggregate => 2,
            IdentifierType::Function => 3,
            IdentifierType::Literal => 4,
            IdentifierType::Expression => 5,
            IdentifierType::Wildcard => 6,
        };
        Some(&REGISTRY[index].1)
    }

    /// Registered types in registry order.
    pub fn registered() -> impl Iterator<Item = IdentifierType> {
        REGISTRY.iter().map(|(kind, _)| *kind)
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Short two-letter code used when generating aliases for this kind.
    /// Empty for unregistered types.
    pub fn alias(self) -> &'static str {
        self.meta().map_or("", |meta| meta.alias)
    }

    /// Canonical label; `"Invalid"` for anything unregistered, `Unknown` included.
    pub fn name(self) -> &'static str {
        self.meta().map_or("Invalid", |meta| meta.name)
    }

    pub fn is_wildcard(self) -> bool {
        self == IdentifierType::Wildcard
    }

    pub fn is_valid(self) -> bool {
        self.meta().is_some()
    }

    pub fn from_type(kind: IdentifierType) -> IdentifierType {
        if kind.is_valid() {
            kind
        } else {
            IdentifierType::Invalid
        }
    }

    /// Numeric code to type. Codes of `Unknown`, `Invalid` or out of range
    /// give `Invalid`.
    pub fn from_code(code: i64) -> IdentifierType {
        let kind = Self::ALL
            .iter()
            .copied()
            .find(|kind| i64::from(kind.code()) == code)
            .map(Self::from_type)
            .unwrap_or(IdentifierType::Invalid);

        if !kind.is_valid() {
            debug!(code, "unrecognized identifier type code");
        }
        kind
    }

    /// Case-insensitive match against canonical names and aliases.
    pub fn from_name(name: &str) -> IdentifierType {
        let key = name.trim().to_lowercase();
        match NAME_INDEX.get(&key) {
            Some(kind) => *kind,
            None => {
                debug!(name, "unrecognized identifier type name");
                IdentifierType::Invalid
            }
        }
    }

    /// Coerces loosely typed input into a type, failing closed to `Invalid`.
    ///
    /// ```
    /// use sqlkind::IdentifierType;
    ///
    /// assert_eq!(IdentifierType::parse_from(7), IdentifierType::Expression);
    /// assert_eq!(IdentifierType::parse_from("WC"), IdentifierType::Wildcard);
    /// assert_eq!(IdentifierType::parse_from(123), IdentifierType::Invalid);
    /// ```
    pub fn parse_from<'a>(value: impl Into<TypeInput<'a>>) -> IdentifierType {
        match value.into() {
            TypeInput::Type(kind) => Self::from_type(kind),
            TypeInput::Code(code) => Self::from_code(code),
            TypeInput::Name(name) => Self::from_name(&name),
            TypeInput::Unsupported => {
                debug!("unsupported identifier type input");
                IdentifierType::Invalid
            }
        }
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::json;

    use crate::types::IdentifierType;

    #[test]
    pub fn test_alias() {
        assert_eq!(IdentifierType::parse_from("").alias(), "");
        assert_eq!(IdentifierType::Wildcard.alias(), "wc");
        assert_eq!(IdentifierType::Subquery.alias(), "sq");
        assert_eq!(IdentifierType::Invalid.alias(), "");
        assert_eq!(IdentifierType::Unknown.alias(), "");
    }

    #[test]
    pub fn test_aliases_are_unique_two_letter_codes() {
        let aliases: HashSet<&str> =
            IdentifierType::registered().map(|kind| kind.alias()).collect();

        assert_eq!(aliases.len(), 7);
        assert!(aliases.iter().all(|alias| alias.chars().count() == 2));
    }

    #[test]
    pub fn test_is_wildcard() {
        assert!(IdentifierType::parse_from(8).is_wildcard());
        assert!(!IdentifierType::parse_from(9).is_wildcard());

        let wildcards: Vec<IdentifierType> = IdentifierType::ALL
            .into_iter()
            .filter(|kind| kind.is_wildcard())
            .collect();
        assert_eq!(wildcards, vec![IdentifierType::Wildcard]);
    }

    #[test]
    pub fn test_is_valid() {
        assert!(!IdentifierType::Invalid.is_valid());
        assert!(!IdentifierType::Unknown.is_valid());
        assert!(!IdentifierType::parse_from("").is_valid());
        assert!(IdentifierType::Subquery.is_valid());
        assert!(IdentifierType::Wildcard.is_valid());
    }

    #[test]
    pub fn test_string() {
        assert_eq!(IdentifierType::Function.to_string(), "Function");
        assert_eq!(IdentifierType::parse_from("").to_string(), IdentifierType::Invalid.to_string());
        assert_eq!(IdentifierType::parse_from(8).to_string(), IdentifierType::Wildcard.to_string());
        assert_eq!(IdentifierType::Invalid.to_string(), "Invalid");
        assert_eq!(IdentifierType::Unknown.to_string(), "Invalid");
        assert_eq!(IdentifierType::default(), IdentifierType::Unknown);
    }

    #[test]
    pub fn test_parse_from_code() {
        assert_eq!(IdentifierType::parse_from(123), IdentifierType::Invalid);
        assert_eq!(IdentifierType::parse_from(7), IdentifierType::Expression);
        assert_eq!(IdentifierType::parse_from(0), IdentifierType::Invalid);
        assert_eq!(IdentifierType::parse_from(1), IdentifierType::Invalid);
        assert_eq!(IdentifierType::parse_from(-1), IdentifierType::Invalid);
        assert_eq!(IdentifierType::parse_from(2i64), IdentifierType::Subquery);
        assert_eq!(IdentifierType::parse_from(4u8), IdentifierType::Aggregate);
        assert_eq!(IdentifierType::parse_from(5usize), IdentifierType::Function);
        assert_eq!(IdentifierType::parse_from(i64::MAX), IdentifierType::Invalid);
    }

    #[test]
    pub fn test_parse_from_name() {
        assert_eq!(IdentifierType::parse_from(""), IdentifierType::Invalid);
        assert_eq!(IdentifierType::parse_from("wc"), IdentifierType::Wildcard);
        assert_eq!(IdentifierType::parse_from("wildcard"), IdentifierType::Wildcard);
        assert_eq!(IdentifierType::parse_from("WILDCARD"), IdentifierType::Wildcard);
        assert_eq!(IdentifierType::parse_from("  Aggregate \n"), IdentifierType::Aggregate);
        assert_eq!(IdentifierType::parse_from(String::from("FN")), IdentifierType::Function);
        assert_eq!(IdentifierType::parse_from("invalid"), IdentifierType::Invalid);
        assert_eq!(IdentifierType::parse_from("unknown"), IdentifierType::Invalid);
        assert_eq!(IdentifierType::parse_from("column"), IdentifierType::Invalid);
    }

    #[test]
    pub fn test_parse_from_type() {
        assert_eq!(IdentifierType::parse_from(IdentifierType::Computed), IdentifierType::Computed);
        assert_eq!(IdentifierType::parse_from(IdentifierType::Unknown), IdentifierType::Invalid);
        assert_eq!(IdentifierType::parse_from(IdentifierType::Invalid), IdentifierType::Invalid);
    }

    #[test]
    pub fn test_parse_from_json() {
        assert_eq!(IdentifierType::parse_from(&json!(["bad"])), IdentifierType::Invalid);
        assert_eq!(IdentifierType::parse_from(&json!({"kind": "wc"})), IdentifierType::Invalid);
        assert_eq!(IdentifierType::parse_from(&json!(null)), IdentifierType::Invalid);
        assert_eq!(IdentifierType::parse_from(&json!(true)), IdentifierType::Invalid);
        assert_eq!(IdentifierType::parse_from(&json!(6.5)), IdentifierType::Invalid);
        assert_eq!(IdentifierType::parse_from(&json!(6)), IdentifierType::Literal);
        assert_eq!(IdentifierType::parse_from(&json!("lt")), IdentifierType::Literal);
    }

    #[test]
    pub fn test_registered_round_trip_through_name_and_alias() {
        for kind in IdentifierType::registered() {
            assert!(kind.is_valid());
            assert!(!kind.to_string().is_empty());

            let name = kind.to_string();
            assert_eq!(IdentifierType::parse_from(name.as_str()), kind);
            assert_eq!(IdentifierType::parse_from(name.to_uppercase()), kind);
            assert_eq!(IdentifierType::parse_from(name.to_lowercase()), kind);

            assert_eq!(IdentifierType::parse_from(kind.alias()), kind);
            assert_eq!(IdentifierType::parse_from(kind.alias().to_uppercase()), kind);

            assert_eq!(IdentifierType::parse_from(i64::from(kind.code())), kind);
        }
    }

    #[test]
    pub fn test_serde() {
        let value = serde_json::to_value(IdentifierType::Aggregate).unwrap();
        assert_eq!(value, json!("Aggregate"));

        let kind: IdentifierType = serde_json::from_value(json!("Wildcard")).unwrap();
        assert_eq!(kind, IdentifierType::Wildcard);

        let kind: IdentifierType = serde_json::from_value(json!("sq")).unwrap();
        assert_eq!(kind, IdentifierType::Subquery);

        assert!(serde_json::from_value::<IdentifierType>(json!("nope")).is_err());
    }
}
