use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn numeric_is_ascii_digits() {
    for byte in b'0'..=b'9' {
        assert!(is_numeric(byte));
    }
    assert!(!is_numeric(b'a'));
    assert!(!is_numeric(b'/'));
    assert!(!is_numeric(b':'));
}

#[test]
fn alphabetic_is_ascii_letters() {
    assert!(is_alphabetic(b'a'));
    assert!(is_alphabetic(b'Z'));
    assert!(!is_alphabetic(b'_'));
    assert!(!is_alphabetic(b'5'));
    assert!(!is_alphabetic(0xC3));
}

#[test]
fn identifier_like_includes_underscore() {
    assert!(is_identifier_like(b'_'));
    assert!(is_identifier_like(b'q'));
    assert!(is_identifier_like(b'7'));
    assert!(!is_identifier_like(b'.'));
    assert!(!is_identifier_like(b'-'));
}

#[test]
fn whitespace_set() {
    for byte in [b' ', b'\t', b'\n', b'\r'] {
        assert!(is_whitespace(byte));
    }
    assert!(!is_whitespace(0x0B));
    assert!(!is_whitespace(b'a'));
}

#[test]
fn skip_whitespace_stops_at_content() {
    assert_eq!(skip_whitespace("  \t\n x", 0), 5);
    assert_eq!(skip_whitespace("x  ", 0), 0);
    assert_eq!(skip_whitespace("x  ", 1), 3);
    assert_eq!(skip_whitespace("", 0), 0);
    assert_eq!(skip_whitespace("ab", 7), 7);
}

proptest! {
    #[test]
    fn identifier_like_is_union(byte in any::<u8>()) {
        prop_assert_eq!(
            is_identifier_like(byte),
            is_alphabetic(byte) || is_numeric(byte) || byte == b'_'
        );
    }

    #[test]
    fn non_ascii_is_unclassified(byte in 0x80u8..=0xFF) {
        prop_assert!(!is_identifier_like(byte));
        prop_assert!(!is_whitespace(byte));
    }
}
