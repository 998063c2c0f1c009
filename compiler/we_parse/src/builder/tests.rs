use super::*;
use pretty_assertions::assert_eq;
use we_ir::types::claims;

fn integer(value: u64) -> Node {
    Node {
        self_type: Type::named(claims::INTEGER),
        in_type: None,
        out_type: None,
        span: Span::point(0),
        kind: NodeKind::Integer(value),
    }
}

#[test]
fn restore_truncates_scratch() {
    let mut builder = NodeBuilder::new();
    builder.names.push("a".into());
    builder.children.push(integer(1));
    let checkpoint = builder.checkpoint();

    builder.names.push("b".into());
    builder.children.push(integer(2));
    builder.in_type = Some(Type::named("X"));
    builder.restore(checkpoint);

    assert_eq!(builder.names, vec!["a".to_owned()]);
    assert_eq!(builder.children, vec![integer(1)]);
    assert_eq!(builder.in_type, None);
}

#[test]
fn restore_removes_later_entries() {
    let mut builder = NodeBuilder::new();
    assert_eq!(builder.insert_entry("a".into(), Span::new(0, 1), integer(1)), Ok(()));
    let checkpoint = builder.checkpoint();
    assert_eq!(builder.insert_entry("b".into(), Span::new(5, 6), integer(2)), Ok(()));
    builder.restore(checkpoint);

    // `b` is free again after the rollback.
    assert_eq!(builder.insert_entry("b".into(), Span::new(5, 6), integer(3)), Ok(()));
    let entries = builder.take_entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries.get("b"), Some(&integer(3)));
    assert!(builder.take_entries().is_empty());
}

#[test]
fn duplicate_entry_is_error() {
    let mut builder = NodeBuilder::new();
    assert_eq!(builder.insert_entry("k".into(), Span::new(0, 1), integer(1)), Ok(()));
    let err = builder.insert_entry("k".into(), Span::new(7, 8), integer(2));
    assert_eq!(
        err,
        Err(ParseError::new(
            ParseErrorKind::DuplicateKey { key: "k".into() },
            Span::new(7, 8)
        ))
    );
}

#[test]
fn finish_uses_completed_kind() {
    let mut builder = NodeBuilder::new();
    builder.complete(NodeKind::Integer(4), Type::named(claims::INTEGER));
    let node = builder.finish(Span::new(0, 1));
    assert_eq!(node.kind, NodeKind::Integer(4));
    assert_eq!(node.self_type, Type::named(claims::INTEGER));
    assert_eq!(node.span, Span::new(0, 1));
}

#[test]
fn unfinished_builder_is_discard() {
    let node = NodeBuilder::new().finish(Span::point(3));
    assert_eq!(node.kind, NodeKind::Discard);
    assert!(node.self_type.is_none());
}
