use std::fmt;

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::parser::{WildcardError, WildcardErrorKind, WordComparer};

static ALIAS: Lazy<WordComparer> = Lazy::new(|| WordComparer::new("AS"));

const WILDCARD: &str = "*";
const QUALIFIED_SUFFIX: &str = ".*";

/// An unaliased wildcard selector: `*` or `<qualifier>.*`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Wildcard {
    base: String,
}

impl Wildcard {
    /// The normalized selector text, exactly as it appeared in the input.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Text before the terminal `.*`; `None` for a bare `*`.
    pub fn qualifier(&self) -> Option<&str> {
        self.base
            .strip_suffix(QUALIFIED_SUFFIX)
            .filter(|qualifier| !qualifier.is_empty())
    }

    pub fn is_qualified(&self) -> bool {
        self.qualifier().is_some()
    }

    /// Dot-separated qualifier segments, outermost first.
    pub fn segments(&self) -> Vec<&str> {
        self.qualifier()
            .map(|qualifier| qualifier.split('.').collect())
            .unwrap_or_default()
    }

    pub fn into_base(self) -> String {
        self.base
    }
}

impl fmt::Display for Wildcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)
    }
}

impl fmt::Debug for Wildcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wildcard({})", self.base)
    }
}

/// Strict lexical validation of a wildcard selector. No schema lookups.
///
/// - `*`, `users.*`, `public.users.*` are accepted and returned verbatim.
/// - `* AS alias` and `users.* alias` fail with [`WildcardErrorKind::AliasedWildcard`].
/// - `* AS` fails with [`WildcardErrorKind::MalformedAlias`].
/// - `qty * price`, `users.**`, `(users.*)` fail with [`WildcardErrorKind::InvalidSyntax`].
pub fn parse_wildcard(expr: &str) -> Result<Wildcard, WildcardError> {
    let expr = expr.trim();
    if expr.is_empty() {
        debug!("rejected wildcard: empty expression");
        return WildcardError::new(WildcardErrorKind::EmptyExpression, expr).err();
    }

    let tokens: Vec<&str> = expr.split_whitespace().collect();
    let base = tokens[0];

    let kind = if tokens.len() >= 2 && ALIAS.compare(tokens[1]) {
        if tokens.len() < 3 {
            WildcardErrorKind::MalformedAlias
        } else {
            WildcardErrorKind::AliasedWildcard
        }
    } else if tokens.len() == 2 {
        WildcardErrorKind::AliasedWildcard
    } else if tokens.len() >= 3 || !is_wildcard_token(base) {
        WildcardErrorKind::InvalidSyntax
    } else {
        trace!(base, "parsed wildcard");
        return Ok(Wildcard { base: base.to_string() });
    };

    debug!(?kind, expression = expr, "rejected wildcard");
    WildcardError::new(kind, expr).err()
}

/// Reports whether `expr` is a syntactically valid unaliased wildcard.
pub fn is_wildcard(expr: &str) -> bool {
    parse_wildcard(expr).is_ok()
}

/// `Ok(())` for a valid unaliased wildcard, otherwise the rejection reason.
pub fn validate_wildcard(expr: &str) -> Result<(), WildcardError> {
    parse_wildcard(expr).map(|_| ())
}

fn is_wildcard_token(token: &str) -> bool {
    token == WILDCARD || token.ends_with(QUALIFIED_SUFFIX)
}
