//! Variable-length literal rules: identifiers, numbers, strings.

use std::fmt;

use crate::{byte_at, is_alphabetic, is_identifier_like, is_numeric};

/// Advance past every byte satisfying `class`.
#[inline]
fn eat_while(source: &str, start: usize, class: fn(u8) -> bool) -> usize {
    let mut pos = start;
    while byte_at(source, pos).is_some_and(class) {
        pos += 1;
    }
    pos
}

/// Letter, then letters, digits and `_`.
pub fn identifier(source: &str, start: usize) -> usize {
    if !byte_at(source, start).is_some_and(is_alphabetic) {
        return start;
    }
    eat_while(source, start + 1, is_identifier_like)
}

/// One or more decimal digits.
pub fn integer(source: &str, start: usize) -> usize {
    eat_while(source, start, is_numeric)
}

/// Digits, `.`, digits. A bare integer is not a float.
pub fn float(source: &str, start: usize) -> usize {
    let whole = integer(source, start);
    if whole == start || byte_at(source, whole) != Some(b'.') {
        return start;
    }
    let fraction = integer(source, whole + 1);
    if fraction == whole + 1 {
        return start;
    }
    fraction
}

/// `0x` followed by digits.
pub fn hex(source: &str, start: usize) -> usize {
    radix(source, start, b'x')
}

/// `0o` followed by digits.
pub fn octal(source: &str, start: usize) -> usize {
    radix(source, start, b'o')
}

/// `0b` followed by digits.
pub fn binary(source: &str, start: usize) -> usize {
    radix(source, start, b'b')
}

fn radix(source: &str, start: usize, marker: u8) -> usize {
    if byte_at(source, start) != Some(b'0') || byte_at(source, start + 1) != Some(marker) {
        return start;
    }
    let end = integer(source, start + 2);
    if end == start + 2 {
        return start;
    }
    end
}

/// Any integer literal. Radix-prefixed forms win over plain decimal, so
/// `0x10` is one token rather than `0` followed by `x10`.
pub fn number(source: &str, start: usize) -> usize {
    for rule in [hex, octal, binary, integer] {
        let end = rule(source, start);
        if end != start {
            return end;
        }
    }
    start
}

/// A string literal ran to end of input without its closing quote.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Unterminated {
    /// Offset of the opening quote.
    pub start: usize,
}

impl fmt::Display for Unterminated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unterminated string literal starting at byte {}", self.start)
    }
}

impl std::error::Error for Unterminated {}

/// String literal rule that tells "no match" apart from "unterminated".
///
/// Returns `Ok(start)` when there is no opening quote, `Ok(end)` just past
/// the closing quote on success. A backslash consumes the next byte
/// verbatim, so `\"` does not terminate the literal.
pub fn string_literal(source: &str, start: usize) -> Result<usize, Unterminated> {
    if byte_at(source, start) != Some(b'"') {
        return Ok(start);
    }

    let bytes = source.as_bytes();
    let mut pos = start + 1;
    while let Some(offset) = bytes.get(pos..).and_then(|rest| memchr::memchr2(b'"', b'\\', rest)) {
        let hit = pos + offset;
        if bytes[hit] == b'"' {
            return Ok(hit + 1);
        }
        // Backslash: skip it and the byte it escapes.
        pos = hit + 2;
    }

    Err(Unterminated { start })
}

/// Total string rule: an unterminated literal is no match.
pub fn string(source: &str, start: usize) -> usize {
    string_literal(source, start).unwrap_or(start)
}

/// The bytes between the quotes of a literal spanning `start..end`.
///
/// Escapes are returned verbatim.
pub fn string_contents(source: &str, start: usize, end: usize) -> Option<&str> {
    if end < start + 2 {
        return None;
    }
    source.get(start + 1..end - 1)
}

#[cfg(test)]
mod tests;
