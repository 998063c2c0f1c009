//! Stateful scanner producing one token per `advance`.

use tracing::{debug, trace};
use we_ir::{Span, Token, TokenKind};
use we_lexer_core::{pattern, skip_whitespace, string_literal};

use crate::rules::{keyword_collision, rule};
use crate::{KeywordCollision, LexError, LexErrorKind};

/// Kinds the scanner tries before strings, in priority order.
const SCAN_ORDER: [TokenKind; 22] = {
    let mut order = [TokenKind::Unknown; 22];
    let mut i = 0;
    while i < TokenKind::SYMBOLS.len() {
        order[i] = TokenKind::SYMBOLS[i];
        i += 1;
    }
    let mut k = 0;
    while k < TokenKind::KEYWORDS.len() {
        order[i + k] = TokenKind::KEYWORDS[k];
        k += 1;
    }
    order[20] = TokenKind::Identifier;
    order[21] = TokenKind::Integer;
    order
};

/// Match the token starting exactly at `start`.
///
/// `Ok(None)` when no rule matches. Strings come last and are the only rule
/// that can fail hard.
fn match_at(source: &str, start: usize) -> Result<Option<(TokenKind, usize)>, LexError> {
    for kind in SCAN_ORDER {
        let Some(rule) = rule(kind) else { continue };
        let end = rule(source, start);
        if end != start {
            return Ok(Some((kind, end)));
        }
    }

    match string_literal(source, start) {
        Ok(end) if end != start => Ok(Some((TokenKind::String, end))),
        Ok(_) => Ok(None),
        Err(unterminated) => Err(LexError::new(
            LexErrorKind::UnterminatedString,
            Span::new(unterminated.start, source.len()),
        )),
    }
}

/// Kind and span of the token at `offset`, after skipping whitespace.
///
/// `Ok(None)` at end of input. A position no rule accepts reports
/// [`TokenKind::Unknown`] spanning one character; an unterminated string is
/// the error. Used to name the "found" token in diagnostics.
pub fn peek(source: &str, offset: usize) -> Result<Option<(TokenKind, Span)>, LexError> {
    let start = skip_whitespace(source, offset);
    let Some(rest) = source.get(start..).filter(|rest| !rest.is_empty()) else {
        return Ok(None);
    };
    let found = match match_at(source, start)? {
        Some((kind, end)) => (kind, Span::new(start, end)),
        None => {
            let width = rest.chars().next().map_or(1, char::len_utf8);
            (TokenKind::Unknown, Span::new(start, start + width))
        }
    };
    Ok(Some(found))
}

/// Kind of the token at `offset`; see [`peek`].
pub fn peek_kind(source: &str, offset: usize) -> Result<Option<TokenKind>, LexError> {
    peek(source, offset).map(|found| found.map(|(kind, _)| kind))
}

/// Cursor over a single source buffer.
///
/// Position only moves forward. When no rule matches, the current token
/// becomes [`TokenKind::Unknown`] and the position stays put: calling
/// [`advance`](Scanner::advance) again yields the same unknown token forever.
/// Stopping on `Unknown` is the caller's job.
pub struct Scanner<'src> {
    source: &'src str,
    pos: usize,
    /// 1-based line of `pos`.
    line: u32,
    /// 1-based column of `pos`, in characters.
    column: u32,
    token: Option<Token>,
    collisions: Vec<KeywordCollision>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Scanner {
            source,
            pos: 0,
            line: 1,
            column: 1,
            token: None,
            collisions: Vec::new(),
        }
    }

    /// Produce the next token.
    ///
    /// Returns `Ok(false)` once only whitespace remains; the last token is
    /// left in place. An unterminated string is the only error, located at
    /// its opening quote.
    pub fn advance(&mut self) -> Result<bool, LexError> {
        let start = skip_whitespace(self.source, self.pos);
        self.move_to(start);
        if start >= self.source.len() {
            trace!(offset = start, "end of input");
            return Ok(false);
        }

        let (line, column) = (self.line, self.column);
        let matched = match_at(self.source, start).map_err(|err| err.with_location(line, column))?;
        match matched {
            Some((kind, end)) => {
                if kind == TokenKind::Identifier {
                    self.record_collision(start, end);
                }
                let text = if kind == TokenKind::String {
                    pattern::string_contents(self.source, start, end).unwrap_or_default()
                } else {
                    self.source.get(start..end).unwrap_or_default()
                };
                let token = Token::new(kind, text, Span::new(start, end), self.line, self.column);
                trace!(?token, "scanned");
                self.token = Some(token);
                self.move_to(end);
            }
            None => {
                let symbol = self
                    .source
                    .get(start..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or('\0');
                let span = Span::new(start, start + symbol.len_utf8());
                trace!(offset = start, %symbol, "no rule matches");
                self.token = Some(Token::new(
                    TokenKind::Unknown,
                    symbol.to_string(),
                    span,
                    self.line,
                    self.column,
                ));
            }
        }
        Ok(true)
    }

    /// The most recently produced token.
    #[inline]
    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// Byte offset the next `advance` starts from.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// `true` when nothing but whitespace remains.
    pub fn is_at_end(&self) -> bool {
        skip_whitespace(self.source, self.pos) >= self.source.len()
    }

    /// Reserved words glued to a preceding identifier, in source order.
    pub fn collisions(&self) -> &[KeywordCollision] {
        &self.collisions
    }

    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    fn record_collision(&mut self, start: usize, end: usize) {
        let Some(keyword) = keyword_collision(self.source, start) else {
            return;
        };
        let span = Span::new(start, end);
        if self.collisions.last().is_some_and(|seen| seen.span == span) {
            return;
        }
        debug!(%keyword, %span, "keyword scanned as identifier");
        self.collisions.push(KeywordCollision { span, keyword });
    }

    /// Move forward to `target`, keeping line and column in step.
    fn move_to(&mut self, target: usize) {
        if target <= self.pos {
            return;
        }
        let passed = self.source.get(self.pos..target).unwrap_or_default();
        for ch in passed.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos = target;
    }
}

/// Scan the whole source.
///
/// Unlike [`Scanner::advance`], an unknown symbol is an error here.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    while scanner.advance()? {
        let Some(token) = scanner.token.take() else {
            break;
        };
        if token.kind == TokenKind::Unknown {
            let symbol = token.text.chars().next().unwrap_or('\0');
            return Err(LexError::new(LexErrorKind::UnknownSymbol { symbol }, token.span)
                .with_location(token.line, token.column));
        }
        tokens.push(token);
    }
    Ok(tokens)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
