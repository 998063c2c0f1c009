//! Token kind → lexical rule table.
//!
//! The scanner and the parser's `exists`/`one` combinators both go through
//! [`rule`], so a token is always recognised the same way regardless of who
//! asks.

use we_ir::TokenKind;
use we_lexer_core::keyword::{
    alias_keyword, classify_keyword, function_keyword, identity_keyword, use_keyword,
    KeywordMatch,
};
use we_lexer_core::{lookup, pattern, symbol, Keyword, Rule};

/// The rule recognising `kind`, or `None` for [`TokenKind::Unknown`].
pub fn rule(kind: TokenKind) -> Option<Rule> {
    let rule: Rule = match kind {
        TokenKind::ListStart => symbol::list_start,
        TokenKind::ListEnd => symbol::list_end,
        TokenKind::MapStart => symbol::map_start,
        TokenKind::MapEnd => symbol::map_end,
        TokenKind::FunctionStart => symbol::function_start,
        TokenKind::FunctionEnd => symbol::function_end,
        TokenKind::TypeParameterStart => symbol::type_parameter_start,
        TokenKind::TypeParameterEnd => symbol::type_parameter_end,
        TokenKind::TypeAlias => symbol::type_alias,
        TokenKind::TypeIdentity => symbol::type_identity,
        TokenKind::ClauseSeparator => symbol::clause_separator,
        TokenKind::ListSeparator => symbol::list_separator,
        TokenKind::IdentifierSeparator => symbol::identifier_separator,
        TokenKind::Define => symbol::define,
        TokenKind::MacroSymbol => symbol::macro_symbol,
        TokenKind::DiscardSymbol => symbol::discard,
        TokenKind::Use => use_keyword,
        TokenKind::Alias => alias_keyword,
        TokenKind::Identity => identity_keyword,
        TokenKind::Fn => function_keyword,
        TokenKind::Integer => pattern::number,
        TokenKind::Identifier => identifier,
        TokenKind::String => pattern::string,
        TokenKind::Unknown => return None,
    };
    Some(rule)
}

/// Identifier that is not a reserved word.
///
/// A reserved spelling glued to a preceding identifier byte (`123use`) never
/// matches as a keyword, so it falls through to here and is accepted.
pub fn identifier(source: &str, start: usize) -> usize {
    let end = pattern::identifier(source, start);
    let Some(keyword) = source.get(start..end).and_then(lookup) else {
        return end;
    };
    match classify_keyword(source, start, keyword.as_str()) {
        KeywordMatch::Collision => end,
        KeywordMatch::Matched(_) | KeywordMatch::NoMatch => start,
    }
}

/// The reserved word at `start` that collides with the preceding byte, if any.
pub fn keyword_collision(source: &str, start: usize) -> Option<Keyword> {
    Keyword::ALL
        .into_iter()
        .find(|keyword| classify_keyword(source, start, keyword.as_str()) == KeywordMatch::Collision)
}
