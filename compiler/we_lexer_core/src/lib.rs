//! Lexical rules for the we language.
//!
//! Every rule has the same shape, [`Rule`]: given the full source and a byte
//! offset, return the offset just past the match, or the input offset when
//! nothing matches. Rules are total. Any offset, including one at or past the
//! end of the source, is accepted without panicking, and a rule never moves
//! backwards.
//!
//! The crate knows nothing about tokens or nodes; `we_lexer` maps token kinds
//! onto these rules.

pub mod classify;
pub mod keyword;
pub mod pattern;
pub mod symbol;

pub use classify::{is_alphabetic, is_identifier_like, is_numeric, is_whitespace, skip_whitespace};
pub use keyword::{classify_keyword, lookup, Keyword, KeywordMatch};
pub use pattern::{string_contents, string_literal, Unterminated};

/// A lexical rule: `(source, start) -> end`, where `end == start` means no match.
pub type Rule = fn(&str, usize) -> usize;

/// Byte at `index`, or `None` past the end.
#[inline]
pub(crate) fn byte_at(source: &str, index: usize) -> Option<u8> {
    source.as_bytes().get(index).copied()
}
