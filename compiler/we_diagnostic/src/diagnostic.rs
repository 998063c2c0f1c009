use std::fmt;

use we_ir::Span;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// 1-based line and column of a diagnostic's primary span.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A structured diagnostic.
///
/// The front end never renders these; hosts decide how they surface.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    pub severity: Severity,
    /// Main message.
    pub message: String,
    /// Where it went wrong.
    pub span: Span,
    /// Line/column of `span.start`, when known.
    pub location: Option<Location>,
    /// Additional context.
    pub notes: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity, span: Span) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            span,
            location: None,
            notes: Vec::new(),
        }
    }

    /// Create a new error diagnostic.
    pub fn error(code: ErrorCode, span: Span) -> Self {
        Self::new_with_severity(code, Severity::Error, span)
    }

    /// Create a new warning diagnostic.
    pub fn warning(code: ErrorCode, span: Span) -> Self {
        Self::new_with_severity(code, Severity::Warning, span)
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach an explicit location.
    pub fn with_location(mut self, line: u32, column: u32) -> Self {
        self.location = Some(Location { line, column });
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;
        if let Some(location) = self.location {
            write!(f, " at {location}")?;
        }
        Ok(())
    }
}
