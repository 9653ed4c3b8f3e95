use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::{
    parser::{is_wildcard, ClassifierConfig, WordComparer},
    types::IdentifierType,
};

static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("valid number pattern")
});

static STRING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^'(?:[^']|'')*'$").expect("valid string pattern")
});

// dotted name directly followed by an opening parenthesis
static CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_$]*(?:\.[A-Za-z_][A-Za-z0-9_$]*)*)\s*\(")
        .expect("valid call pattern")
});

static DEFAULT_CLASSIFIER: Lazy<ExpressionClassifier> = Lazy::new(ExpressionClassifier::default);

/// Classifies raw expression text into an [`IdentifierType`].
///
/// Purely syntactic and never fails: anything malformed becomes
/// `IdentifierType::Invalid`. Text classifies as `Wildcard` exactly when
/// [`is_wildcard`] accepts it.
#[derive(Debug, Clone)]
pub struct ExpressionClassifier {
    pub config: ClassifierConfig,
    queries: [WordComparer; 2],
    literals: [WordComparer; 3],
}

impl Default for ExpressionClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

impl ExpressionClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            queries: [WordComparer::new("SELECT"), WordComparer::new("WITH")],
            literals: [
                WordComparer::new("TRUE"),
                WordComparer::new("FALSE"),
                WordComparer::new("NULL"),
            ],
        }
    }

    pub fn classify(&self, expr: &str) -> IdentifierType {
        let expr = expr.trim();
        let kind = self.classify_trimmed(expr);
        trace!(expression = expr, %kind, "classified expression");
        kind
    }

    fn classify_trimmed(&self, expr: &str) -> IdentifierType {
        if expr.is_empty() {
            return IdentifierType::Invalid;
        }

        if is_wildcard(expr) {
            return IdentifierType::Wildcard;
        }

        if !is_balanced(expr) {
            return IdentifierType::Invalid;
        }

        if is_enclosed(expr) {
            let inner = unwrap_parentheses(expr);
            return if self.is_query(inner) {
                IdentifierType::Subquery
            } else {
                IdentifierType::Computed
            };
        }

        if self.is_literal(expr) {
            return IdentifierType::Literal;
        }

        if let Some(name) = call_name(expr) {
            let function = name.rsplit('.').next().unwrap_or(name);
            return if self.config.is_aggregate(function) {
                IdentifierType::Aggregate
            } else {
                IdentifierType::Function
            };
        }

        if is_rejected_wildcard(expr) {
            return IdentifierType::Invalid;
        }

        IdentifierType::Expression
    }

    fn is_query(&self, inner: &str) -> bool {
        self.queries.iter().any(|keyword| keyword.compare_prefix(inner, &['(', '*']))
    }

    fn is_literal(&self, expr: &str) -> bool {
        NUMBER.is_match(expr)
            || STRING.is_match(expr)
            || self.literals.iter().any(|keyword| keyword.compare(expr))
    }
}

/// Classifies `expr` with the default aggregate set.
pub fn classify_expression(expr: &str) -> IdentifierType {
    DEFAULT_CLASSIFIER.classify(expr)
}

/// Index of the parenthesis closing the one opened at `open`, skipping quoted
/// sections. Parentheses and quotes are ASCII so byte offsets are safe.
fn closing_parenthesis(expr: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;

    for (index, byte) in expr.bytes().enumerate().skip(open) {
        match quote {
            Some(q) if byte == q => quote = None,
            Some(_) => {}
            None => match byte {
                b'\'' | b'"' => quote = Some(byte),
                b'(' => depth += 1,
                b')' => {
                    depth = depth.checked_sub(1)?;
                    if depth == 0 {
                        return Some(index);
                    }
                }
                _ => {}
            },
        }
    }

    None
}

fn is_balanced(expr: &str) -> bool {
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;

    for byte in expr.bytes() {
        match quote {
            Some(q) if byte == q => quote = None,
            Some(_) => {}
            None => match byte {
                b'\'' | b'"' => quote = Some(byte),
                b'(' => depth += 1,
                b')' => match depth.checked_sub(1) {
                    Some(next) => depth = next,
                    None => return false,
                },
                _ => {}
            },
        }
    }

    depth == 0 && quote.is_none()
}

/// `(a + b)` is enclosed, `(a) + (b)` is not.
fn is_enclosed(expr: &str) -> bool {
    expr.starts_with('(') && closing_parenthesis(expr, 0) == Some(expr.len() - 1)
}

fn unwrap_parentheses(expr: &str) -> &str {
    let mut inner = expr;
    while is_enclosed(inner) {
        inner = inner[1..inner.len() - 1].trim();
    }
    inner
}

fn call_name(expr: &str) -> Option<&str> {
    let captures = CALL.captures(expr)?;
    let open = captures.get(0)?.end() - 1;

    if closing_parenthesis(expr, open) != Some(expr.len() - 1) {
        return None;
    }

    captures.get(1).map(|name| name.as_str())
}

/// Copy of `expr` with every quoted section, quotes included, collapsed to `_`.
fn without_quoted(expr: &str) -> String {
    let mut result = String::with_capacity(expr.len());
    let mut quote: Option<char> = None;

    for ch in expr.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None => match ch {
                '\'' | '"' => {
                    quote = Some(ch);
                    result.push('_');
                }
                _ => result.push(ch),
            },
        }
    }

    result
}

// Wildcard-shaped text that the validator turned down: aliased, doubled or
// dangling stars outside of quotes.
fn is_rejected_wildcard(expr: &str) -> bool {
    let text = without_quoted(expr);
    let first = text.split_whitespace().next().unwrap_or_default();
    let last = text.split_whitespace().next_back().unwrap_or_default();

    first == "*"
        || last == "*"
        || first.ends_with(".*")
        || text.contains(".*")
        || text.contains("**")
}
