//! Token types shared by the scanner and the parser.
//!
//! `TokenKind` is a closed, fieldless enumeration. The literal text of a token
//! lives on [`Token`] itself, so kinds stay `Copy` and can be packed into the
//! parser's expected-token bitsets.

use std::fmt;

use crate::Span;

/// A classified lexeme produced by the scanner.
///
/// `text` is the exact matched substring. For string literals it is the bytes
/// between the quotes with escape sequences kept verbatim (`\"` stays two
/// bytes); `span` always covers the full lexeme, quotes included.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
    /// 1-based line of `span.start`.
    pub line: u32,
    /// 1-based column of `span.start`, counted in characters.
    pub column: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span, line: u32, column: u32) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
            line,
            column,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}({:?}) @ {} [{}:{}]",
            self.kind, self.text, self.span, self.line, self.column
        )
    }
}

/// Every kind of token the scanner can produce.
///
/// The discriminant doubles as the bit index in expected-token sets, so the
/// enum must stay below 32 variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    // === Delimiters ===
    /// `[`
    ListStart = 0,
    /// `]`
    ListEnd = 1,
    /// `{`
    MapStart = 2,
    /// `}`
    MapEnd = 3,
    /// `(`
    FunctionStart = 4,
    /// `)`
    FunctionEnd = 5,
    /// `<`
    TypeParameterStart = 6,
    /// `>`
    TypeParameterEnd = 7,

    // === Type markers ===
    /// `'`
    TypeAlias = 8,
    /// `*`
    TypeIdentity = 9,

    // === Separators ===
    /// `;`
    ClauseSeparator = 10,
    /// `,`
    ListSeparator = 11,
    /// `.`
    IdentifierSeparator = 12,

    // === Markers ===
    /// `:`
    Define = 13,
    /// `@`
    MacroSymbol = 14,
    /// `_`
    DiscardSymbol = 15,

    // === Keywords ===
    Use = 16,
    Alias = 17,
    Identity = 18,
    Fn = 19,

    // === Literals ===
    Integer = 20,
    Identifier = 21,
    String = 22,

    /// No rule matched at the current position.
    Unknown = 23,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 24] = [
        TokenKind::ListStart,
        TokenKind::ListEnd,
        TokenKind::MapStart,
        TokenKind::MapEnd,
        TokenKind::FunctionStart,
        TokenKind::FunctionEnd,
        TokenKind::TypeParameterStart,
        TokenKind::TypeParameterEnd,
        TokenKind::TypeAlias,
        TokenKind::TypeIdentity,
        TokenKind::ClauseSeparator,
        TokenKind::ListSeparator,
        TokenKind::IdentifierSeparator,
        TokenKind::Define,
        TokenKind::MacroSymbol,
        TokenKind::DiscardSymbol,
        TokenKind::Use,
        TokenKind::Alias,
        TokenKind::Identity,
        TokenKind::Fn,
        TokenKind::Integer,
        TokenKind::Identifier,
        TokenKind::String,
        TokenKind::Unknown,
    ];

    /// Single-character punctuation, in scanner priority order.
    pub const SYMBOLS: [TokenKind; 16] = [
        TokenKind::ListStart,
        TokenKind::ListEnd,
        TokenKind::MapStart,
        TokenKind::MapEnd,
        TokenKind::FunctionStart,
        TokenKind::FunctionEnd,
        TokenKind::TypeParameterStart,
        TokenKind::TypeParameterEnd,
        TokenKind::TypeAlias,
        TokenKind::TypeIdentity,
        TokenKind::ClauseSeparator,
        TokenKind::ListSeparator,
        TokenKind::Define,
        TokenKind::MacroSymbol,
        TokenKind::DiscardSymbol,
        TokenKind::IdentifierSeparator,
    ];

    /// Reserved words.
    pub const KEYWORDS: [TokenKind; 4] = [
        TokenKind::Use,
        TokenKind::Alias,
        TokenKind::Identity,
        TokenKind::Fn,
    ];

    /// Bit index used by expected-token sets.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// The fixed spelling of this kind, if it has one.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::ListStart => Some("["),
            TokenKind::ListEnd => Some("]"),
            TokenKind::MapStart => Some("{"),
            TokenKind::MapEnd => Some("}"),
            TokenKind::FunctionStart => Some("("),
            TokenKind::FunctionEnd => Some(")"),
            TokenKind::TypeParameterStart => Some("<"),
            TokenKind::TypeParameterEnd => Some(">"),
            TokenKind::TypeAlias => Some("'"),
            TokenKind::TypeIdentity => Some("*"),
            TokenKind::ClauseSeparator => Some(";"),
            TokenKind::ListSeparator => Some(","),
            TokenKind::IdentifierSeparator => Some("."),
            TokenKind::Define => Some(":"),
            TokenKind::MacroSymbol => Some("@"),
            TokenKind::DiscardSymbol => Some("_"),
            TokenKind::Use => Some("use"),
            TokenKind::Alias => Some("alias"),
            TokenKind::Identity => Some("identity"),
            TokenKind::Fn => Some("fn"),
            TokenKind::Integer
            | TokenKind::Identifier
            | TokenKind::String
            | TokenKind::Unknown => None,
        }
    }

    /// Human-readable name for diagnostics.
    pub const fn description(self) -> &'static str {
        match self {
            TokenKind::ListStart => "list start",
            TokenKind::ListEnd => "list end",
            TokenKind::MapStart => "map start",
            TokenKind::MapEnd => "map end",
            TokenKind::FunctionStart => "function start",
            TokenKind::FunctionEnd => "function end",
            TokenKind::TypeParameterStart => "type parameter start",
            TokenKind::TypeParameterEnd => "type parameter end",
            TokenKind::TypeAlias => "type alias marker",
            TokenKind::TypeIdentity => "type identity marker",
            TokenKind::ClauseSeparator => "clause separator",
            TokenKind::ListSeparator => "list separator",
            TokenKind::IdentifierSeparator => "identifier separator",
            TokenKind::Define => "define marker",
            TokenKind::MacroSymbol => "macro marker",
            TokenKind::DiscardSymbol => "discard marker",
            TokenKind::Use => "keyword `use`",
            TokenKind::Alias => "keyword `alias`",
            TokenKind::Identity => "keyword `identity`",
            TokenKind::Fn => "keyword `fn`",
            TokenKind::Integer => "integer literal",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string literal",
            TokenKind::Unknown => "unknown symbol",
        }
    }

    /// Single-byte punctuation kinds.
    #[inline]
    pub const fn is_symbol(self) -> bool {
        (self as u8) <= (TokenKind::DiscardSymbol as u8)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lexeme() {
            Some(lexeme) if self.is_symbol() => write!(f, "`{lexeme}`"),
            _ => f.write_str(self.description()),
        }
    }
}
