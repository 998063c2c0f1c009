use std::fmt;

/// Codes for every diagnostic the front end can produce.
///
/// Format: the leading letter gives the class, the first digit the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - W0xxx: Lexer warnings
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// No lexical rule matches the input
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Unterminated literal inside a production
    E1002,
    /// Unknown symbol inside a production
    E1003,
    /// Duplicate key in a map or module
    E1004,
    /// Integer literal does not fit in 64 bits
    E1005,
    /// Values nested deeper than the configured limit
    E1006,
    /// Parse exceeded its configured step budget
    E1007,
    /// Digit not valid for the literal's radix
    E1008,

    // Lexer Warnings (W0xxx)
    /// Keyword spelling directly follows an identifier character
    W0001,
}

impl ErrorCode {
    /// All codes, in declaration order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::W0001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::W0001 => "W0001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
