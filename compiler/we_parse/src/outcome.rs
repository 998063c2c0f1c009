//! Result of running a predicate.
//!
//! | Outcome | Meaning |
//! |---------|---------|
//! | `Ok(end)` | Matched; `end` is the position after the match |
//! | `Err(Failure::NoMatch)` | Did not match; caller may try something else |
//! | `Err(Failure::Fatal)` | Real error; stop and report |
//!
//! `NoMatch` is ordinary control flow. It only becomes a [`ParseError`] when
//! it escapes the top-level production.

use std::cmp::Ordering;

use we_ir::TokenSet;

use crate::ParseError;

/// What every predicate returns.
pub type Step = Result<usize, Failure>;

/// Why a predicate did not produce a position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Failure {
    NoMatch(NoMatch),
    Fatal(ParseError),
}

/// A soft failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoMatch {
    /// Where the failing combinator started; resume from here.
    pub start: usize,
    /// Furthest offset reached before giving up.
    pub offset: usize,
    /// Token kinds that would have been accepted at `offset`.
    pub expected: TokenSet,
}

impl NoMatch {
    /// The same failure, reported as starting at `start`.
    #[must_use]
    pub fn rebase(self, start: usize) -> Self {
        NoMatch { start, ..self }
    }

    /// Combine with a sibling failure, keeping `self.start`.
    ///
    /// Only the expectations at the furthest offset survive; at equal
    /// offsets they are unioned.
    #[must_use]
    pub fn merge(self, other: NoMatch) -> Self {
        match self.offset.cmp(&other.offset) {
            Ordering::Less => NoMatch {
                start: self.start,
                ..other
            },
            Ordering::Greater => self,
            Ordering::Equal => NoMatch {
                expected: self.expected.union(other.expected),
                ..self
            },
        }
    }
}

impl Failure {
    #[inline]
    pub fn no_match(start: usize, offset: usize, expected: TokenSet) -> Self {
        Failure::NoMatch(NoMatch {
            start,
            offset,
            expected,
        })
    }

    /// Re-base a soft failure; fatal failures pass through untouched.
    #[must_use]
    pub fn rebase(self, start: usize) -> Self {
        match self {
            Failure::NoMatch(no_match) => Failure::NoMatch(no_match.rebase(start)),
            fatal @ Failure::Fatal(_) => fatal,
        }
    }
}

impl From<ParseError> for Failure {
    fn from(err: ParseError) -> Self {
        Failure::Fatal(err)
    }
}
