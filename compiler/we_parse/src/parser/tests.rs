use super::*;
use pretty_assertions::assert_eq;

#[test]
fn lex_skips_whitespace() {
    let mut parser = Parser::new("  [x", ParseConfig::default());
    let lexeme = parser.lex(TokenKind::ListStart, 0);
    assert_eq!(
        lexeme,
        Ok(Lexeme {
            kind: TokenKind::ListStart,
            text: "[",
            span: Span::new(2, 3),
        })
    );
    assert_eq!(parser.steps(), 1);
}

#[test]
fn lex_miss_is_no_match_at_start() {
    let mut parser = Parser::new("  ]", ParseConfig::default());
    assert_eq!(
        parser.lex(TokenKind::ListStart, 0),
        Err(Failure::no_match(0, 2, TokenSet::single(TokenKind::ListStart)))
    );
    assert_eq!(parser.furthest().map(|miss| miss.offset), Some(2));
}

#[test]
fn lex_string_strips_quotes() {
    let mut parser = Parser::new(r#" "a\"b" "#, ParseConfig::default());
    let lexeme = parser.lex(TokenKind::String, 0);
    assert_eq!(lexeme.map(|l| (l.text, l.span)), Ok((r#"a\"b"#, Span::new(1, 7))));
}

#[test]
fn unterminated_string_is_fatal() {
    let mut parser = Parser::new(r#"x "abc"#, ParseConfig::default());
    assert_eq!(
        parser.lex(TokenKind::String, 1),
        Err(Failure::Fatal(ParseError::new(
            ParseErrorKind::UnterminatedLiteral,
            Span::new(2, 6)
        )))
    );
}

#[test]
fn furthest_unions_expectations_at_same_offset() {
    let mut parser = Parser::new("a ;", ParseConfig::default());
    let _ = parser.lex(TokenKind::ListEnd, 1);
    let _ = parser.lex(TokenKind::ListSeparator, 1);
    let _ = parser.lex(TokenKind::ListStart, 0);
    let Some(furthest) = parser.furthest() else {
        panic!("no miss recorded");
    };
    assert_eq!(furthest.offset, 2);
    assert_eq!(
        furthest.expected,
        TokenSet::new().with(TokenKind::ListEnd).with(TokenKind::ListSeparator)
    );
}

#[test]
fn step_budget_is_enforced() {
    let mut parser = Parser::new("a b c", ParseConfig::new().with_max_steps(2));
    assert!(parser.lex(TokenKind::Identifier, 0).is_ok());
    assert!(parser.lex(TokenKind::Identifier, 1).is_ok());
    assert_eq!(
        parser.lex(TokenKind::Identifier, 3),
        Err(Failure::Fatal(ParseError::new(
            ParseErrorKind::StepLimitExceeded { limit: 2 },
            Span::point(3)
        )))
    );
}

#[test]
fn depth_limit_is_enforced() {
    let mut parser = Parser::new(" [", ParseConfig::new().with_max_depth(1));
    assert_eq!(parser.enter(0), Ok(()));
    assert_eq!(
        parser.enter(0),
        Err(Failure::Fatal(ParseError::new(
            ParseErrorKind::NestingTooDeep { limit: 1 },
            Span::point(1)
        )))
    );
    parser.exit();
    assert_eq!(parser.enter(0), Ok(()));
}

#[test]
fn expect_end_allows_trailing_whitespace() {
    let mut parser = Parser::new("x  \n", ParseConfig::default());
    assert_eq!(parser.expect_end(1), Ok(4));
    assert_eq!(
        parser.expect_end(0),
        Err(Failure::no_match(0, 0, TokenSet::new()))
    );
}

#[test]
fn glued_keyword_is_recorded_once() {
    let mut parser = Parser::new("1use", ParseConfig::default());
    assert!(parser.lex(TokenKind::Identifier, 1).is_ok());
    assert!(parser.lex(TokenKind::Identifier, 1).is_ok());
    assert_eq!(parser.warnings().len(), 1);
    assert_eq!(parser.warnings()[0].span, Span::new(1, 4));
}
