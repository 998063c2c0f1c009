//! Lexer error and warning values.
//!
//! Errors carry WHERE (`span`, plus line/column when the scanner knows
//! them) and WHAT (`kind`). Neither is ever printed by the lexer itself;
//! hosts convert them with `to_diagnostic`.

use we_diagnostic::{Diagnostic, ErrorCode, Location};
use we_ir::Span;
use we_lexer_core::Keyword;

/// A fatal lexer error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    /// 1-based line/column of `span.start`; unset by [`crate::peek`].
    pub location: Option<Location>,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Missing closing `"` for string literal.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// No rule matches at this position.
    #[error("unknown symbol `{symbol}`")]
    UnknownSymbol { symbol: char },
}

impl LexErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnknownSymbol { .. } => ErrorCode::E0002,
        }
    }
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError {
            kind,
            span,
            location: None,
        }
    }

    #[must_use]
    pub fn with_location(mut self, line: u32, column: u32) -> Self {
        self.location = Some(Location { line, column });
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.kind.code(), self.span).with_message(self.kind.to_string());
        if let Some(Location { line, column }) = self.location {
            diag = diag.with_location(line, column);
        }
        match self.kind {
            LexErrorKind::UnterminatedString => diag.with_note("add a closing `\"`"),
            LexErrorKind::UnknownSymbol { .. } => diag,
        }
    }
}

/// A reserved word glued to a preceding identifier byte, as in `123use`.
///
/// Scanned as an identifier; reported so the author can add a space.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct KeywordCollision {
    pub span: Span,
    pub keyword: Keyword,
}

impl KeywordCollision {
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::warning(ErrorCode::W0001, self.span)
            .with_message(format!(
                "possible keyword `{}` prefixed by identifier",
                self.keyword
            ))
            .with_note("separate the keyword from the preceding token with whitespace")
    }
}
