//! Byte classification.
//!
//! ASCII only. Bytes of multi-byte UTF-8 sequences fall in no class, so the
//! rules built on these never split a character.

#[inline]
pub const fn is_numeric(byte: u8) -> bool {
    byte.is_ascii_digit()
}

#[inline]
pub const fn is_alphabetic(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// Letters, digits and `_`.
#[inline]
pub const fn is_identifier_like(byte: u8) -> bool {
    is_alphabetic(byte) || is_numeric(byte) || byte == b'_'
}

/// Space, tab, line feed and carriage return.
#[inline]
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Offset of the first non-whitespace byte at or after `start`.
///
/// Never exceeds `source.len()` unless `start` already does.
pub fn skip_whitespace(source: &str, start: usize) -> usize {
    let bytes = source.as_bytes();
    let mut pos = start;
    while pos < bytes.len() && is_whitespace(bytes[pos]) {
        pos += 1;
    }
    pos
}

#[cfg(test)]
mod tests;
