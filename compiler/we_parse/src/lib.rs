//! Parser for the we language.
//!
//! Productions are built from small predicates (see [`combinator`]) that read
//! tokens straight from the source through the shared [`Parser`] context and
//! write into a [`NodeBuilder`]. Soft failures ([`Failure::NoMatch`]) drive
//! backtracking; anything else is a [`ParseError`].
//!
//! Entry points:
//! - [`parse_module`] / [`parse_module_with`]: a whole source unit
//! - [`parse_value`] / [`parse_value_with`]: a single value

mod builder;
pub mod combinator;
mod config;
mod error;
pub mod grammar;
mod outcome;
mod parser;
mod stack;


pub use builder::{Checkpoint, NodeBuilder};
pub use config::{ParseConfig, DEFAULT_MAX_DEPTH};
pub use error::{ParseError, ParseErrorKind};
pub use outcome::{Failure, NoMatch, Step};
pub use parser::{Lexeme, Parser};

use tracing::debug;
use we_diagnostic::span_utils::LineOffsetTable;
use we_ir::{Node, Span, TokenKind};
use we_lexer::KeywordCollision;

use crate::combinator::{build, Predicate};

/// A successful parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutput {
    pub node: Node,
    /// Keyword spellings glued to a preceding identifier. Never fatal.
    pub warnings: Vec<KeywordCollision>,
}

/// Parse a whole module with default limits.
pub fn parse_module(source: &str) -> Result<ParseOutput, ParseError> {
    parse_module_with(source, &ParseConfig::default())
}

pub fn parse_module_with(source: &str, config: &ParseConfig) -> Result<ParseOutput, ParseError> {
    debug!(len = source.len(), "parsing module");
    run(source, config, &grammar::module)
}

/// Parse a single value with default limits. Only whitespace may follow it.
pub fn parse_value(source: &str) -> Result<ParseOutput, ParseError> {
    parse_value_with(source, &ParseConfig::default())
}

pub fn parse_value_with(source: &str, config: &ParseConfig) -> Result<ParseOutput, ParseError> {
    debug!(len = source.len(), "parsing value");
    let whole_value = combinator::predicate(|node, parser, start| {
        let end = grammar::value(node, parser, start)?;
        parser
            .expect_end(end)
            .map(|_| end)
            .map_err(|failure| failure.rebase(start))
    });
    run(source, config, &whole_value)
}

fn run<P>(source: &str, config: &ParseConfig, production: &P) -> Result<ParseOutput, ParseError>
where
    P: Predicate + ?Sized,
{
    let mut parser = Parser::new(source, *config);
    let result = build(&mut parser, 0, production);
    debug!(steps = parser.steps(), ok = result.is_ok(), "parse finished");

    let error = match result {
        Ok((node, _)) => {
            return Ok(ParseOutput {
                node,
                warnings: parser.into_warnings(),
            });
        }
        Err(Failure::Fatal(err)) => err,
        Err(Failure::NoMatch(miss)) => unexpected(&parser, miss),
    };
    Err(error.locate(source, &LineOffsetTable::build(source)))
}

/// Turn an unrecovered soft failure into an error at the furthest point any
/// attempt reached.
///
/// An unterminated string sitting there is reported as such, whatever the
/// grammar expected.
fn unexpected(parser: &Parser<'_>, miss: NoMatch) -> ParseError {
    let NoMatch {
        offset, expected, ..
    } = parser.furthest().map_or(miss, |furthest| miss.merge(furthest));

    match we_lexer::peek(parser.source(), offset) {
        Err(err) => ParseError::new(ParseErrorKind::UnterminatedLiteral, err.span),
        Ok(None) => ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected,
                found: None,
            },
            Span::point(parser.source().len()),
        ),
        Ok(Some((TokenKind::Unknown, span))) => {
            let symbol = parser
                .source()
                .get(span.to_range())
                .and_then(|text| text.chars().next())
                .unwrap_or('\0');
            ParseError::new(ParseErrorKind::UnknownSymbol { symbol }, span)
        }
        Ok(Some((found, span))) => ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected,
                found: Some(found),
            },
            span,
        ),
    }
}
