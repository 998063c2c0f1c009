//! Functions and type parameters.
//!
//! Values inside a clause are written right to left: data flows leftwards,
//! so `(c b a)` runs `a`, then `b`, then `c`. Clauses separated by `;` run
//! left to right. Steps are stored in execution order.

use we_ir::types::{claims, requirements, Type};
use we_ir::{NodeKind, TokenKind};

use crate::combinator::{child, exists, many, one, optional, predicate, push_child, sequence};
use crate::{NodeBuilder, Parser, Step};

use super::value;

/// `fn? ( <In Out>? clause (; clause)* )`
///
/// With a signature the in/out types are the two named claims. Without one,
/// the in type is the first step's in type (or its own type) and the out type
/// is the last step's type.
pub fn function(node: &mut NodeBuilder, parser: &mut Parser<'_>, start: usize) -> Step {
    let next_clause = predicate(|node, parser, start| {
        sequence(node, parser, start, &[&exists(TokenKind::ClauseSeparator), &clause])
    });
    let end = sequence(
        node,
        parser,
        start,
        &[
            &optional(exists(TokenKind::Fn)),
            &exists(TokenKind::FunctionStart),
            &optional(signature),
            &clause,
            &many(next_clause),
            &exists(TokenKind::FunctionEnd),
        ],
    )?;

    let steps = std::mem::take(&mut node.children);
    let in_type = node.in_type.take().or_else(|| {
        steps
            .first()
            .map(|first| first.in_type.clone().unwrap_or_else(|| first.self_type.clone()))
    });
    let out_type = node
        .out_type
        .take()
        .or_else(|| steps.last().map(|last| last.self_type.clone()));

    let self_type = Type::named(claims::FUNCTION)
        .with_requirement(requirements::IN, in_type.clone().unwrap_or_else(Type::none))
        .with_requirement(requirements::OUT, out_type.clone().unwrap_or_else(Type::none));
    node.in_type = in_type;
    node.out_type = out_type;
    node.complete(NodeKind::Function { steps }, self_type);
    Ok(end)
}

/// `<In Out>`: one identifier for each edge.
fn signature(node: &mut NodeBuilder, parser: &mut Parser<'_>, start: usize) -> Step {
    sequence(
        node,
        parser,
        start,
        &[
            &exists(TokenKind::TypeParameterStart),
            &one(TokenKind::Identifier, |node, text| {
                node.in_type = Some(Type::named(text));
            }),
            &one(TokenKind::Identifier, |node, text| {
                node.out_type = Some(Type::named(text));
            }),
            &exists(TokenKind::TypeParameterEnd),
        ],
    )
}

/// Zero or more values, appended to the steps in reverse.
fn clause(node: &mut NodeBuilder, parser: &mut Parser<'_>, start: usize) -> Step {
    let mark = node.children.len();
    let end = many(child(value, push_child))(node, parser, start)?;
    if let Some(written) = node.children.get_mut(mark..) {
        written.reverse();
    }
    Ok(end)
}

/// `<In, Out> value`: the value with its in/out types replaced by the two
/// parameters' types.
pub fn type_parameter(node: &mut NodeBuilder, parser: &mut Parser<'_>, start: usize) -> Step {
    let end = sequence(
        node,
        parser,
        start,
        &[
            &exists(TokenKind::TypeParameterStart),
            &child(value, push_child),
            &exists(TokenKind::ListSeparator),
            &child(value, push_child),
            &exists(TokenKind::TypeParameterEnd),
            &child(value, push_child),
        ],
    )?;

    let mut parts = std::mem::take(&mut node.children).into_iter();
    if let (Some(input), Some(output), Some(target)) = (parts.next(), parts.next(), parts.next()) {
        node.in_type = Some(input.self_type);
        node.out_type = Some(output.self_type);
        node.kind = Some(target.kind);
        node.self_type = Some(target.self_type);
    }
    Ok(end)
}
