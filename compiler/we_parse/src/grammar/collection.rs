use we_ir::types::{claims, requirements, Type};
use we_ir::{NodeKind, TokenKind};

use crate::combinator::{child, exists, many, push_child, sequence, separated};
use crate::{NodeBuilder, Parser, Step};

use super::{entry, value};

/// `[a, b, c]`, trailing `,` allowed. Requires `item`: the first element's
/// type, or `None` when empty.
pub fn list(node: &mut NodeBuilder, parser: &mut Parser<'_>, start: usize) -> Step {
    let end = sequence(
        node,
        parser,
        start,
        &[
            &exists(TokenKind::ListStart),
            &separated(child(value, push_child), TokenKind::ListSeparator),
            &exists(TokenKind::ListEnd),
        ],
    )?;

    let items = std::mem::take(&mut node.children);
    let item = items
        .first()
        .map_or_else(Type::none, |first| first.self_type.clone());
    node.complete(
        NodeKind::List(items),
        Type::named(claims::LIST).with_requirement(requirements::ITEM, item),
    );
    Ok(end)
}

/// `{ key: value ... }`, no separators. Requires each key's type.
pub fn map(node: &mut NodeBuilder, parser: &mut Parser<'_>, start: usize) -> Step {
    let end = sequence(
        node,
        parser,
        start,
        &[
            &exists(TokenKind::MapStart),
            &many(entry),
            &exists(TokenKind::MapEnd),
        ],
    )?;

    let entries = node.take_entries();
    let self_type = entries.iter().fold(Type::named(claims::MAP), |ty, (key, value)| {
        ty.with_requirement(key.clone(), value.self_type.clone())
    });
    node.complete(NodeKind::Map(entries), self_type);
    Ok(end)
}
