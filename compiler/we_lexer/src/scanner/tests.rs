use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use we_diagnostic::Location;
use we_lexer_core::Keyword;

fn kinds_and_text(source: &str) -> Vec<(TokenKind, String)> {
    match tokenize(source) {
        Ok(tokens) => tokens.into_iter().map(|t| (t.kind, t.text)).collect(),
        Err(err) => panic!("tokenize failed on {source:?}: {err}"),
    }
}

fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
    (kind, text.to_owned())
}

// === End-to-end scenarios ===

#[test]
fn function_with_identifier_chain() {
    assert_eq!(
        kinds_and_text(" hi : ( bob.the.palindrome ) 123, "),
        vec![
            tok(TokenKind::Identifier, "hi"),
            tok(TokenKind::Define, ":"),
            tok(TokenKind::FunctionStart, "("),
            tok(TokenKind::Identifier, "bob"),
            tok(TokenKind::IdentifierSeparator, "."),
            tok(TokenKind::Identifier, "the"),
            tok(TokenKind::IdentifierSeparator, "."),
            tok(TokenKind::Identifier, "palindrome"),
            tok(TokenKind::FunctionEnd, ")"),
            tok(TokenKind::Integer, "123"),
            tok(TokenKind::ListSeparator, ","),
        ]
    );
}

#[test]
fn string_and_integer_definitions() {
    let source = "anyString: \"any\\\"String\"\nanyInt: 100\n";
    assert_eq!(
        kinds_and_text(source),
        vec![
            tok(TokenKind::Identifier, "anyString"),
            tok(TokenKind::Define, ":"),
            tok(TokenKind::String, "any\\\"String"),
            tok(TokenKind::Identifier, "anyInt"),
            tok(TokenKind::Define, ":"),
            tok(TokenKind::Integer, "100"),
        ]
    );
}

#[test]
fn keywords_and_symbols() {
    assert_eq!(
        kinds_and_text("use std.io\nf: fn(<a b> _ 'x *y @m)"),
        vec![
            tok(TokenKind::Use, "use"),
            tok(TokenKind::Identifier, "std"),
            tok(TokenKind::IdentifierSeparator, "."),
            tok(TokenKind::Identifier, "io"),
            tok(TokenKind::Identifier, "f"),
            tok(TokenKind::Define, ":"),
            tok(TokenKind::Fn, "fn"),
            tok(TokenKind::FunctionStart, "("),
            tok(TokenKind::TypeParameterStart, "<"),
            tok(TokenKind::Identifier, "a"),
            tok(TokenKind::Identifier, "b"),
            tok(TokenKind::TypeParameterEnd, ">"),
            tok(TokenKind::DiscardSymbol, "_"),
            tok(TokenKind::TypeAlias, "'"),
            tok(TokenKind::Identifier, "x"),
            tok(TokenKind::TypeIdentity, "*"),
            tok(TokenKind::Identifier, "y"),
            tok(TokenKind::MacroSymbol, "@"),
            tok(TokenKind::Identifier, "m"),
            tok(TokenKind::FunctionEnd, ")"),
        ]
    );
}

#[test]
fn radix_literal_is_one_token() {
    assert_eq!(
        kinds_and_text("[0x10, 0b1, 0o7; 0]"),
        vec![
            tok(TokenKind::ListStart, "["),
            tok(TokenKind::Integer, "0x10"),
            tok(TokenKind::ListSeparator, ","),
            tok(TokenKind::Integer, "0b1"),
            tok(TokenKind::ListSeparator, ","),
            tok(TokenKind::Integer, "0o7"),
            tok(TokenKind::ClauseSeparator, ";"),
            tok(TokenKind::Integer, "0"),
            tok(TokenKind::ListEnd, "]"),
        ]
    );
}

// === Positions ===

#[test]
fn tokens_carry_line_and_column() {
    let tokens = match tokenize("a: 1\n  bb: \"é\" x") {
        Ok(tokens) => tokens,
        Err(err) => panic!("{err}"),
    };
    let positions: Vec<(u32, u32)> = tokens.iter().map(|t| (t.line, t.column)).collect();
    assert_eq!(positions, vec![(1, 1), (1, 2), (1, 4), (2, 3), (2, 5), (2, 7), (2, 11)]);
    assert_eq!(tokens[5].span, Span::new(11, 15));
    assert_eq!(tokens[5].text, "é");
}

#[test]
fn token_is_stable_between_advances() {
    let mut scanner = Scanner::new("abc def");
    assert_eq!(scanner.advance(), Ok(true));
    let first = scanner.token().cloned();
    assert_eq!(scanner.token().cloned(), first);
    assert_eq!(scanner.position(), 3);
    assert_eq!(scanner.advance(), Ok(true));
    assert_eq!(scanner.token().map(|t| t.text.as_str()), Some("def"));
}

#[test]
fn whitespace_only_is_end() {
    let mut scanner = Scanner::new("  \n\t ");
    assert!(scanner.is_at_end());
    assert_eq!(scanner.advance(), Ok(false));
    assert_eq!(scanner.token(), None);
    assert_eq!(scanner.position(), 5);
    assert_eq!(scanner.line(), 2);
    assert_eq!(scanner.column(), 3);
}

#[test]
fn end_keeps_last_token() {
    let mut scanner = Scanner::new("x ");
    assert_eq!(scanner.advance(), Ok(true));
    assert_eq!(scanner.advance(), Ok(false));
    assert_eq!(scanner.token().map(|t| t.kind), Some(TokenKind::Identifier));
    assert_eq!(scanner.advance(), Ok(false));
}

// === Failure modes ===

#[test]
fn unknown_symbol_does_not_advance() {
    let mut scanner = Scanner::new("  #x");
    assert_eq!(scanner.advance(), Ok(true));
    let unknown = scanner.token().cloned();
    assert_eq!(unknown.as_ref().map(|t| t.kind), Some(TokenKind::Unknown));
    assert_eq!(unknown.as_ref().map(|t| t.text.as_str()), Some("#"));
    assert_eq!(scanner.position(), 2);

    assert_eq!(scanner.advance(), Ok(true));
    assert_eq!(scanner.token().cloned(), unknown);
    assert_eq!(scanner.position(), 2);
}

#[test]
fn tokenize_rejects_unknown_symbol() {
    assert_eq!(
        tokenize("a € b"),
        Err(LexError::new(
            LexErrorKind::UnknownSymbol { symbol: '€' },
            Span::new(2, 5)
        )
        .with_location(1, 3))
    );
}

#[test]
fn tokenize_error_reports_line_and_column() {
    let err = tokenize("a\nb\n  %").unwrap_err();
    assert_eq!(err.span, Span::new(6, 7));
    assert_eq!(err.location, Some(Location { line: 3, column: 3 }));
    assert_eq!(err.to_diagnostic().location, Some(Location { line: 3, column: 3 }));
}

#[test]
fn unterminated_string_is_error() {
    let mut scanner = Scanner::new("x \"abc");
    assert_eq!(scanner.advance(), Ok(true));
    assert_eq!(
        scanner.advance(),
        Err(LexError::new(LexErrorKind::UnterminatedString, Span::new(2, 6)).with_location(1, 3))
    );
}

#[test]
fn unterminated_string_after_newline_is_located() {
    let mut scanner = Scanner::new("[\n  \"abc");
    assert_eq!(scanner.advance(), Ok(true));
    let err = scanner.advance().unwrap_err();
    assert_eq!(err.location, Some(Location { line: 2, column: 3 }));
}

#[test]
fn glued_keyword_is_identifier_with_collision() {
    let mut scanner = Scanner::new("123use");
    assert_eq!(scanner.advance(), Ok(true));
    assert_eq!(scanner.token().map(|t| t.kind), Some(TokenKind::Integer));
    assert_eq!(scanner.advance(), Ok(true));
    assert_eq!(scanner.token().map(|t| t.kind), Some(TokenKind::Identifier));
    assert_eq!(
        scanner.collisions(),
        &[KeywordCollision {
            span: Span::new(3, 6),
            keyword: Keyword::Use,
        }]
    );
}

// === peek_kind ===

#[test]
fn peek_kind_classifies_without_state() {
    assert_eq!(peek_kind(" ]", 0), Ok(Some(TokenKind::ListEnd)));
    assert_eq!(peek_kind("a fn", 1), Ok(Some(TokenKind::Fn)));
    assert_eq!(peek_kind("#", 0), Ok(Some(TokenKind::Unknown)));
    assert_eq!(peek_kind("\"ok\"", 0), Ok(Some(TokenKind::String)));
    assert_eq!(peek_kind("x   ", 1), Ok(None));
    assert_eq!(peek_kind("", 4), Ok(None));
}

#[test]
fn peek_reports_spans() {
    assert_eq!(peek("  abc d", 0), Ok(Some((TokenKind::Identifier, Span::new(2, 5)))));
    assert_eq!(peek("x é", 1), Ok(Some((TokenKind::Unknown, Span::new(2, 4)))));
}

#[test]
fn peek_reports_unterminated_string_as_error() {
    assert_eq!(
        peek(" \"ab", 0),
        Err(LexError::new(LexErrorKind::UnterminatedString, Span::new(1, 4)))
    );
    assert!(peek_kind("\"open", 0).is_err());
}

// === Properties ===

proptest! {
    #[test]
    fn position_is_monotonic(source in "\\PC{0,32}") {
        let mut scanner = Scanner::new(&source);
        let mut last = 0;
        for _ in 0..64 {
            match scanner.advance() {
                Ok(true) => {}
                Ok(false) | Err(_) => break,
            }
            prop_assert!(scanner.position() >= last);
            prop_assert!(scanner.position() <= source.len());
            last = scanner.position();
            if scanner.token().is_some_and(|t| t.kind == TokenKind::Unknown) {
                break;
            }
        }
    }

    #[test]
    fn tokens_rescan_identically(source in "[a-z0-9 _.,;:'*@<>(){}\\[\\]\"]{0,32}") {
        if let Ok(tokens) = tokenize(&source) {
            for token in tokens {
                let Some(rule) = rule(token.kind) else {
                    return Err(TestCaseError::fail(format!("no rule for {:?}", token.kind)));
                };
                prop_assert_eq!(rule(&source, token.span.start), token.span.end);
            }
        }
    }
}
