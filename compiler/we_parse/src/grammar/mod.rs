//! Grammar productions.
//!
//! ```text
//! module         := use_statement* (identifier ':' value)*
//! use_statement  := 'use' identifier_chain
//! value          := list | map | function | type_parameter | type_alias
//!                 | type_identity | discard | integer | identifier_chain | string
//! ```
//!
//! Every production has the predicate signature, so productions compose with
//! the combinators exactly like single tokens do.

mod atom;
mod collection;
mod function;


use we_ir::types::{claims, Type};
use we_ir::{Node, NodeKind, Span, TokenKind};

use crate::combinator::{child, exists, first_match, many, sequence, try_one};
use crate::{NodeBuilder, ParseError, Parser, Step};

pub use atom::{discard, identifier_chain, integer, string, type_alias, type_identity};
pub use collection::{list, map};
pub use function::{function, type_parameter};

/// Any value.
pub fn value(node: &mut NodeBuilder, parser: &mut Parser<'_>, start: usize) -> Step {
    first_match(
        node,
        parser,
        start,
        &[
            &list,
            &map,
            &function,
            &type_parameter,
            &type_alias,
            &type_identity,
            &discard,
            &integer,
            &identifier_chain,
            &string,
        ],
    )
}

/// A whole source unit. Must consume all input.
pub fn module(node: &mut NodeBuilder, parser: &mut Parser<'_>, start: usize) -> Step {
    let body = sequence(node, parser, start, &[&many(use_statement), &many(entry)])?;
    let end = parser.expect_end(body).map_err(|failure| failure.rebase(start))?;

    let entries = node.take_entries();
    let self_type = entries
        .iter()
        .fold(Type::named(claims::MODULE), |ty, (key, value)| {
            ty.with_requirement(key.clone(), value.self_type.clone())
        });
    let usings = std::mem::take(&mut node.usings);
    node.complete(NodeKind::Module { usings, entries }, self_type);
    Ok(end)
}

/// `use a.b.c`
pub fn use_statement(node: &mut NodeBuilder, parser: &mut Parser<'_>, start: usize) -> Step {
    sequence(
        node,
        parser,
        start,
        &[&exists(TokenKind::Use), &child(identifier_chain, attach_using)],
    )
}

/// `key: value`, shared by maps and modules.
pub(crate) fn entry(node: &mut NodeBuilder, parser: &mut Parser<'_>, start: usize) -> Step {
    sequence(
        node,
        parser,
        start,
        &[
            &try_one(TokenKind::Identifier, push_key),
            &exists(TokenKind::Define),
            &child(value, attach_entry),
        ],
    )
}

#[allow(clippy::unnecessary_wraps, reason = "matches the `try_one` handler signature")]
fn push_key(node: &mut NodeBuilder, key: &str, span: Span) -> Result<(), ParseError> {
    node.keys.push((key.to_owned(), span));
    Ok(())
}

fn attach_entry(node: &mut NodeBuilder, value: Node) -> Result<(), ParseError> {
    let (key, span) = node.keys.pop().unwrap_or_else(|| (String::new(), value.span));
    node.insert_entry(key, span, value)
}

#[allow(clippy::unnecessary_wraps, reason = "matches the `child` attach signature")]
fn attach_using(node: &mut NodeBuilder, chain: Node) -> Result<(), ParseError> {
    if let NodeKind::IdentifierChain(path) = chain.kind {
        node.usings.push(path);
    }
    Ok(())
}
