//! Alphabet symbols used as transition labels.

use std::fmt::Display;
use std::sync::Arc;

/// A single input symbol, or the reserved epsilon marker that consumes no
/// input.
///
/// Literal symbols compare and hash by their underlying text. `Epsilon` is
/// distinct from every literal, including the empty-string literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Epsilon,
    Literal(Arc<str>),
}

/// The shared epsilon symbol.
pub const EPSILON: Symbol = Symbol::Epsilon;

impl Symbol {
    /// Instantiates a literal symbol from its text.
    pub fn literal(value: impl Into<Arc<str>>) -> Self {
        Self::Literal(value.into())
    }

    /// Returns `true` if the symbol is the epsilon marker.
    #[inline]
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Self::Epsilon)
    }

    /// Returns the literal text of the symbol, or `None` for epsilon.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Epsilon => None,
            Self::Literal(value) => Some(&**value),
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        let mut buf = [0u8; 4];
        Self::literal(&*c.encode_utf8(&mut buf))
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::literal(value)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Epsilon => write!(f, "ε"),
            Self::Literal(value) => write!(f, "{}", value),
        }
    }
}
