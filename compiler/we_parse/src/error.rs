//! Parse error types.
//!
//! A [`ParseError`] is WHERE (`span`, plus `location` once an entry point
//! has resolved it) and WHAT (`kind`). Soft failures that drive backtracking
//! are not errors; see [`Failure`](crate::Failure).

use we_diagnostic::span_utils::LineOffsetTable;
use we_diagnostic::{Diagnostic, ErrorCode, Location};
use we_ir::{Span, TokenKind, TokenSet};

/// A fatal parse error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    /// 1-based line/column of `span.start`. Filled in by the entry points.
    pub location: Option<Location>,
}

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected {}, found {}", describe_expected(.expected), describe_found(.found))]
    UnexpectedToken {
        expected: TokenSet,
        /// `None` at end of input.
        found: Option<TokenKind>,
    },
    #[error("unterminated string literal")]
    UnterminatedLiteral,
    #[error("unknown symbol `{symbol}`")]
    UnknownSymbol { symbol: char },
    #[error("duplicate key `{key}`")]
    DuplicateKey { key: String },
    #[error("integer literal `{text}` does not fit in 64 bits")]
    IntegerOverflow { text: String },
    #[error("invalid digit for base {radix} in `{text}`")]
    InvalidDigit { text: String, radix: u32 },
    #[error("values nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("parse exceeded its budget of {limit} steps")]
    StepLimitExceeded { limit: u32 },
}

#[allow(clippy::trivially_copy_pass_by_ref, reason = "called from the derived Display with field references")]
fn describe_expected(expected: &TokenSet) -> String {
    if expected.is_empty() {
        "end of input".to_owned()
    } else {
        expected.to_string()
    }
}

#[allow(clippy::trivially_copy_pass_by_ref, reason = "called from the derived Display with field references")]
fn describe_found(found: &Option<TokenKind>) -> String {
    found.map_or_else(|| "end of input".to_owned(), |kind| kind.to_string())
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::UnterminatedLiteral => ErrorCode::E1002,
            ParseErrorKind::UnknownSymbol { .. } => ErrorCode::E1003,
            ParseErrorKind::DuplicateKey { .. } => ErrorCode::E1004,
            ParseErrorKind::IntegerOverflow { .. } => ErrorCode::E1005,
            ParseErrorKind::NestingTooDeep { .. } => ErrorCode::E1006,
            ParseErrorKind::StepLimitExceeded { .. } => ErrorCode::E1007,
            ParseErrorKind::InvalidDigit { .. } => ErrorCode::E1008,
        }
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError {
            kind,
            span,
            location: None,
        }
    }

    /// Resolve `location` against the source the span points into.
    #[must_use]
    pub fn locate(mut self, source: &str, table: &LineOffsetTable) -> Self {
        let (line, column) = table.offset_to_line_col(source, self.span.start);
        self.location = Some(Location { line, column });
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag =
            Diagnostic::error(self.kind.code(), self.span).with_message(self.kind.to_string());
        if let Some(Location { line, column }) = self.location {
            diag = diag.with_location(line, column);
        }
        match &self.kind {
            ParseErrorKind::UnterminatedLiteral => diag.with_note("add a closing `\"`"),
            ParseErrorKind::DuplicateKey { .. } => {
                diag.with_note("each key may be defined once per map or module")
            }
            ParseErrorKind::NestingTooDeep { .. } | ParseErrorKind::StepLimitExceeded { .. } => {
                diag.with_note("raise the limit in `ParseConfig` to accept larger inputs")
            }
            _ => diag,
        }
    }
}
