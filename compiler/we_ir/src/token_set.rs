//! Bitsets of token kinds.
//!
//! Used as the "expected" payload of soft parse failures: alternatives union
//! their expectations in O(1), and the final diagnostic lists them.

use std::fmt;

use crate::TokenKind;

/// A set of token kinds using bitset representation for O(1) membership testing.
///
/// Each bit in the u32 corresponds to a `TokenKind` discriminant index.
///
/// # Example
/// ```
/// use we_ir::{TokenKind, TokenSet};
///
/// const VALUE_START: TokenSet = TokenSet::new()
///     .with(TokenKind::ListStart)
///     .with(TokenKind::Integer);
///
/// assert!(VALUE_START.contains(&TokenKind::Integer));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenSet(u32);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a token set containing a single token kind.
    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        Self(1u32 << kind.discriminant_index())
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u32 << kind.discriminant_index()))
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(&self, kind: &TokenKind) -> bool {
        (self.0 & (1u32 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in discriminant order.
    pub fn iter(&self) -> impl Iterator<Item = TokenKind> + '_ {
        TokenKind::ALL.into_iter().filter(|kind| self.contains(kind))
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders as a readable list: "`[`", "`[` or integer literal",
/// "`[`, `{` or integer literal".
impl fmt::Display for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<TokenKind> = self.iter().collect();
        match kinds.split_last() {
            None => f.write_str("nothing"),
            Some((last, [])) => write!(f, "{last}"),
            Some((last, rest)) => {
                for (i, kind) in rest.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{kind}")?;
                }
                write!(f, " or {last}")
            }
        }
    }
}
