//! Reserved-word rules.
//!
//! A keyword matches only as a whole word: the byte after it must not be
//! identifier-like. A keyword spelling whose preceding byte is
//! identifier-like (`123use`) is a *collision*. It never matches, and the
//! collision is reported so the scanner can surface it as a warning.

use std::fmt;

use crate::{byte_at, is_identifier_like};

/// The reserved words of the language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    Use,
    Alias,
    Identity,
    Fn,
}

impl Keyword {
    pub const ALL: [Keyword; 4] = [Keyword::Use, Keyword::Alias, Keyword::Identity, Keyword::Fn];

    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Use => "use",
            Keyword::Alias => "alias",
            Keyword::Identity => "identity",
            Keyword::Fn => "fn",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a spelling to its keyword, if it is reserved.
pub fn lookup(text: &str) -> Option<Keyword> {
    match text {
        "use" => Some(Keyword::Use),
        "alias" => Some(Keyword::Alias),
        "identity" => Some(Keyword::Identity),
        "fn" => Some(Keyword::Fn),
        _ => None,
    }
}

/// Outcome of trying a keyword at an offset.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum KeywordMatch {
    /// The keyword matched; the value is the end offset.
    Matched(usize),
    NoMatch,
    /// The whole word is present but glued to a preceding identifier-like byte.
    Collision,
}

/// Try `word` at `start`, distinguishing a collision from a plain miss.
pub fn classify_keyword(source: &str, start: usize, word: &str) -> KeywordMatch {
    let Some(rest) = source.as_bytes().get(start..) else {
        return KeywordMatch::NoMatch;
    };
    if !rest.starts_with(word.as_bytes()) {
        return KeywordMatch::NoMatch;
    }

    let end = start + word.len();
    if byte_at(source, end).is_some_and(is_identifier_like) {
        return KeywordMatch::NoMatch;
    }

    let glued = start
        .checked_sub(1)
        .and_then(|prev| byte_at(source, prev))
        .is_some_and(is_identifier_like);
    if glued {
        return KeywordMatch::Collision;
    }

    KeywordMatch::Matched(end)
}

/// Keyword rule. A collision logs a warning and does not match.
pub fn keyword(source: &str, start: usize, word: &str) -> usize {
    match classify_keyword(source, start, word) {
        KeywordMatch::Matched(end) => end,
        KeywordMatch::NoMatch => start,
        KeywordMatch::Collision => {
            tracing::warn!(
                keyword = word,
                offset = start,
                "possible keyword prefixed by identifier"
            );
            start
        }
    }
}

/// `use`
pub fn use_keyword(source: &str, start: usize) -> usize {
    keyword(source, start, Keyword::Use.as_str())
}

/// `alias`
pub fn alias_keyword(source: &str, start: usize) -> usize {
    keyword(source, start, Keyword::Alias.as_str())
}

/// `identity`
pub fn identity_keyword(source: &str, start: usize) -> usize {
    keyword(source, start, Keyword::Identity.as_str())
}

/// `fn`
pub fn function_keyword(source: &str, start: usize) -> usize {
    keyword(source, start, Keyword::Fn.as_str())
}
