//! Leaf values and the single-value wrappers.

use std::num::IntErrorKind;

use we_ir::types::{claims, requirements, Type};
use we_ir::{NodeKind, TokenKind};

use crate::combinator::{child, exists, first_match, many, one, predicate, push_child, sequence, try_one};
use crate::{NodeBuilder, ParseError, ParseErrorKind, Parser, Step};

use super::value;

/// `_`
pub fn discard(node: &mut NodeBuilder, parser: &mut Parser<'_>, start: usize) -> Step {
    let end = exists(TokenKind::DiscardSymbol)(node, parser, start)?;
    node.complete(NodeKind::Discard, Type::named(claims::DISCARD));
    Ok(end)
}

/// Decimal, `0x`, `0o` or `0b` integer.
pub fn integer(node: &mut NodeBuilder, parser: &mut Parser<'_>, start: usize) -> Step {
    try_one(TokenKind::Integer, |node, text, span| {
        let value = integer_value(text).map_err(|kind| ParseError::new(kind, span))?;
        node.complete(NodeKind::Integer(value), Type::named(claims::INTEGER));
        Ok(())
    })(node, parser, start)
}

fn integer_value(text: &str) -> Result<u64, ParseErrorKind> {
    let (digits, radix) = if let Some(digits) = text.strip_prefix("0x") {
        (digits, 16)
    } else if let Some(digits) = text.strip_prefix("0o") {
        (digits, 8)
    } else if let Some(digits) = text.strip_prefix("0b") {
        (digits, 2)
    } else {
        (text, 10)
    };
    u64::from_str_radix(digits, radix).map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => ParseErrorKind::IntegerOverflow {
            text: text.to_owned(),
        },
        _ => ParseErrorKind::InvalidDigit {
            text: text.to_owned(),
            radix,
        },
    })
}

/// String literal; escapes stay verbatim.
pub fn string(node: &mut NodeBuilder, parser: &mut Parser<'_>, start: usize) -> Step {
    one(TokenKind::String, |node, text| {
        node.complete(NodeKind::String(text.to_owned()), Type::named(claims::STRING));
    })(node, parser, start)
}

/// `a.b.c`. Claims its own dotted path.
pub fn identifier_chain(node: &mut NodeBuilder, parser: &mut Parser<'_>, start: usize) -> Step {
    let segment = || one(TokenKind::Identifier, |node, text| node.names.push(text.to_owned()));
    let more = predicate(|node, parser, start| {
        sequence(
            node,
            parser,
            start,
            &[&exists(TokenKind::IdentifierSeparator), &segment()],
        )
    });
    let end = sequence(node, parser, start, &[&segment(), &many(more)])?;

    let path = std::mem::take(&mut node.names);
    let claim = path.join(".");
    node.complete(NodeKind::IdentifierChain(path), Type::named(claim));
    Ok(end)
}

/// `'value` or `alias value`
pub fn type_alias(node: &mut NodeBuilder, parser: &mut Parser<'_>, start: usize) -> Step {
    let end = wrapped(node, parser, start, TokenKind::TypeAlias, TokenKind::Alias)?;
    let target = node.children.pop().map(Box::new);
    if let Some(target) = target {
        let self_type = Type::named(claims::ALIAS)
            .with_requirement(requirements::TARGET, target.self_type.clone());
        node.complete(NodeKind::TypeAlias(target), self_type);
    }
    Ok(end)
}

/// `*value` or `identity value`
pub fn type_identity(node: &mut NodeBuilder, parser: &mut Parser<'_>, start: usize) -> Step {
    let end = wrapped(node, parser, start, TokenKind::TypeIdentity, TokenKind::Identity)?;
    let target = node.children.pop().map(Box::new);
    if let Some(target) = target {
        let self_type = Type::named(claims::IDENTITY)
            .with_requirement(requirements::TARGET, target.self_type.clone());
        node.complete(NodeKind::TypeIdentity(target), self_type);
    }
    Ok(end)
}

/// Marker (symbol or keyword spelling) followed by one value, pushed as a child.
fn wrapped(
    node: &mut NodeBuilder,
    parser: &mut Parser<'_>,
    start: usize,
    symbol: TokenKind,
    keyword: TokenKind,
) -> Step {
    let marker = predicate(move |node, parser, start| {
        first_match(node, parser, start, &[&exists(symbol), &exists(keyword)])
    });
    sequence(node, parser, start, &[&marker, &child(value, push_child)])
}
