use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// === Identifier ===

#[test]
fn identifier_cannot_start_with_digit() {
    assert_eq!(identifier("123abc", 0), 0);
}

#[test]
fn identifier_consumes_letters_and_digits() {
    assert_eq!(identifier("abc123", 0), 6);
    assert_eq!(identifier("snake_case rest", 0), 10);
    assert_eq!(identifier("bob.the", 0), 3);
}

#[test]
fn identifier_cannot_start_with_underscore() {
    assert_eq!(identifier("_x", 0), 0);
}

// === Integer / Float ===

#[test]
fn integer_is_greedy() {
    assert_eq!(integer("123,", 0), 3);
    assert_eq!(integer("a1", 0), 0);
    assert_eq!(integer("", 0), 0);
}

#[test]
fn float_requires_fraction() {
    assert_eq!(float("123.456", 0), 7);
    assert_eq!(float("123", 0), 0);
    assert_eq!(float("123.", 0), 0);
    assert_eq!(float(".5", 0), 0);
    assert_eq!(float("1.5.2", 0), 3);
}

// === Radix ===

#[test]
fn hex_examples() {
    assert_eq!(hex("0x101", 0), 5);
    assert_eq!(hex("1x101", 0), 0);
    assert_eq!(hex("0", 0), 0);
    assert_eq!(hex("0!101", 0), 0);
    assert_eq!(hex("0x", 0), 0);
}

#[test]
fn octal_and_binary_markers() {
    assert_eq!(octal("0o17 ", 0), 4);
    assert_eq!(octal("0x17", 0), 0);
    assert_eq!(binary("0b1010", 0), 6);
    assert_eq!(binary("0o1010", 0), 0);
}

#[test]
fn number_prefers_radix() {
    assert_eq!(number("0x10", 0), 4);
    assert_eq!(number("0b1", 0), 3);
    assert_eq!(number("0", 0), 1);
    assert_eq!(number("0x", 0), 1);
    assert_eq!(number("42]", 0), 2);
    assert_eq!(number("x", 0), 0);
}

// === String ===

#[test]
fn string_with_escaped_quote() {
    let source = r#""any\"String" rest"#;
    let end = string(source, 0);
    assert_eq!(end, 13);
    assert_eq!(string_contents(source, 0, end), Some(r#"any\"String"#));
}

#[test]
fn string_requires_opening_quote() {
    assert_eq!(string("abc", 0), 0);
    assert_eq!(string_literal("abc", 0), Ok(0));
}

#[test]
fn empty_string() {
    assert_eq!(string(r#""""#, 0), 2);
    assert_eq!(string_contents(r#""""#, 0, 2), Some(""));
}

#[test]
fn unterminated_string() {
    assert_eq!(string_literal(r#""abc"#, 0), Err(Unterminated { start: 0 }));
    assert_eq!(string_literal(r#""abc\""#, 0), Err(Unterminated { start: 0 }));
    assert_eq!(string_literal(r#"x "a\"#, 2), Err(Unterminated { start: 2 }));
    assert_eq!(string(r#""abc"#, 0), 0);
}

#[test]
fn escaped_backslash_then_quote_terminates() {
    let source = r#""a\\" b"#;
    assert_eq!(string(source, 0), 5);
    assert_eq!(string_contents(source, 0, 5), Some(r"a\\"));
}

#[test]
fn string_keeps_multibyte_text() {
    let source = "\"héllo\"";
    let end = string(source, 0);
    assert_eq!(end, source.len());
    assert_eq!(string_contents(source, 0, end), Some("héllo"));
}

#[test]
fn string_contents_rejects_short_spans() {
    assert_eq!(string_contents("\"", 0, 1), None);
}

// === Totality ===

proptest! {
    #[test]
    fn rules_never_panic_or_move_backwards(source in "\\PC{0,24}", start in 0usize..32) {
        let rules: [fn(&str, usize) -> usize; 8] =
            [identifier, integer, float, hex, octal, binary, number, string];
        for rule in rules {
            let end = rule(&source, start);
            prop_assert!(end >= start);
            prop_assert!(end == start || end <= source.len());
        }
    }

    #[test]
    fn identifier_matches_are_identifier_text(source in "[a-zA-Z0-9_ .]{0,16}") {
        let end = identifier(&source, 0);
        prop_assert!(source[..end].bytes().all(is_identifier_like));
    }

    #[test]
    fn integers_round_trip(value in any::<u32>()) {
        let text = value.to_string();
        prop_assert_eq!(integer(&text, 0), text.len());
        prop_assert_eq!(number(&text, 0), text.len());
    }
}
