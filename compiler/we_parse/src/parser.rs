//! Per-parse context threaded through every predicate.

use tracing::trace;
use we_ir::{Span, TokenKind, TokenSet};
use we_lexer::rules::{keyword_collision, rule};
use we_lexer::KeywordCollision;
use we_lexer_core::{pattern, skip_whitespace, string_literal};

use crate::{Failure, NoMatch, ParseConfig, ParseError, ParseErrorKind};

/// A token matched by [`Parser::lex`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Lexeme<'src> {
    pub kind: TokenKind,
    /// Matched text; for strings, the bytes between the quotes.
    pub text: &'src str,
    pub span: Span,
}

/// Explicit parse state: source, limits, spent budget, and warnings.
///
/// One per parse. Nothing here is shared between parses.
pub struct Parser<'src> {
    source: &'src str,
    config: ParseConfig,
    steps: u32,
    depth: usize,
    warnings: Vec<KeywordCollision>,
    /// Furthest soft failure seen anywhere, for error reporting.
    furthest: Option<NoMatch>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, config: ParseConfig) -> Self {
        Parser {
            source,
            config,
            steps: 0,
            depth: 0,
            warnings: Vec::new(),
            furthest: None,
        }
    }

    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Lexical attempts made so far.
    #[inline]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn warnings(&self) -> &[KeywordCollision] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<KeywordCollision> {
        self.warnings
    }

    /// Furthest soft failure recorded by [`lex`](Parser::lex) or
    /// [`expect_end`](Parser::expect_end).
    pub fn furthest(&self) -> Option<NoMatch> {
        self.furthest
    }

    /// Try to match a token of `kind` at `start`, skipping whitespace first.
    ///
    /// Spends one step. A miss is a `NoMatch` starting at `start`; an
    /// unterminated string literal is fatal.
    pub fn lex(&mut self, kind: TokenKind, start: usize) -> Result<Lexeme<'src>, Failure> {
        self.spend_step(start)?;
        let pos = skip_whitespace(self.source, start);

        let end = if kind == TokenKind::String {
            string_literal(self.source, pos).map_err(|unterminated| {
                ParseError::new(
                    ParseErrorKind::UnterminatedLiteral,
                    Span::new(unterminated.start, self.source.len()),
                )
            })?
        } else {
            rule(kind).map_or(pos, |rule| rule(self.source, pos))
        };

        if end == pos {
            trace!(?kind, offset = pos, "no match");
            let expected = TokenSet::single(kind);
            self.note_miss(pos, expected);
            return Err(Failure::no_match(start, pos, expected));
        }

        if kind == TokenKind::Identifier {
            self.note_collision(pos, end);
        }
        let text = if kind == TokenKind::String {
            pattern::string_contents(self.source, pos, end)
        } else {
            self.source.get(pos..end)
        }
        .unwrap_or_default();

        trace!(?kind, text, offset = pos, "matched");
        Ok(Lexeme {
            kind,
            text,
            span: Span::new(pos, end),
        })
    }

    /// Succeed only if nothing but whitespace remains after `start`.
    pub fn expect_end(&mut self, start: usize) -> Result<usize, Failure> {
        let pos = skip_whitespace(self.source, start);
        if pos < self.source.len() {
            self.note_miss(pos, TokenSet::new());
            return Err(Failure::no_match(start, pos, TokenSet::new()));
        }
        Ok(pos)
    }

    /// Enter one level of value nesting.
    pub fn enter(&mut self, start: usize) -> Result<(), Failure> {
        if self.depth >= self.config.max_depth {
            let limit = self.config.max_depth;
            return Err(Failure::Fatal(ParseError::new(
                ParseErrorKind::NestingTooDeep { limit },
                Span::point(skip_whitespace(self.source, start)),
            )));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn spend_step(&mut self, start: usize) -> Result<(), ParseError> {
        self.steps = self.steps.saturating_add(1);
        match self.config.max_steps {
            Some(limit) if self.steps > limit => Err(ParseError::new(
                ParseErrorKind::StepLimitExceeded { limit },
                Span::point(start.min(self.source.len())),
            )),
            _ => Ok(()),
        }
    }

    fn note_miss(&mut self, offset: usize, expected: TokenSet) {
        let miss = NoMatch {
            start: offset,
            offset,
            expected,
        };
        self.furthest = Some(self.furthest.map_or(miss, |seen| seen.merge(miss)));
    }

    fn note_collision(&mut self, start: usize, end: usize) {
        let Some(keyword) = keyword_collision(self.source, start) else {
            return;
        };
        let span = Span::new(start, end);
        if self.warnings.iter().any(|seen| seen.span == span) {
            return;
        }
        tracing::warn!(%keyword, %span, "keyword glued to preceding identifier");
        self.warnings.push(KeywordCollision { span, keyword });
    }
}

#[cfg(test)]
mod tests;
