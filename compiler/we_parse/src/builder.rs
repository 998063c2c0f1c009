//! In-progress node state shared by the predicates of one production.

use rustc_hash::FxHashMap;
use tracing::debug;
use we_ir::{IdentifierChain, Node, NodeKind, Span, Type};

use crate::{ParseError, ParseErrorKind};

/// Mutable node under construction.
///
/// Predicates write into the scratch collections; the production that owns
/// the builder moves them into a [`NodeKind`] with
/// [`complete`](NodeBuilder::complete) once everything has matched.
#[derive(Clone, Debug, Default)]
pub struct NodeBuilder {
    pub self_type: Option<Type>,
    pub in_type: Option<Type>,
    pub out_type: Option<Type>,
    pub kind: Option<NodeKind>,
    /// Child values, in the order they were attached.
    pub children: Vec<Node>,
    /// Identifier segments collected so far.
    pub names: Vec<String>,
    /// Keys waiting for their value, with the key's span.
    pub keys: Vec<(String, Span)>,
    pub usings: Vec<IdentifierChain>,
    entries: FxHashMap<String, Node>,
    entry_order: Vec<String>,
}

/// Saved builder state for rolling back a failed alternative.
#[derive(Clone, Debug)]
pub struct Checkpoint {
    self_type: Option<Type>,
    in_type: Option<Type>,
    out_type: Option<Type>,
    kind: Option<NodeKind>,
    children: usize,
    names: usize,
    keys: usize,
    usings: usize,
    entries: usize,
}

impl NodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            self_type: self.self_type.clone(),
            in_type: self.in_type.clone(),
            out_type: self.out_type.clone(),
            kind: self.kind.clone(),
            children: self.children.len(),
            names: self.names.len(),
            keys: self.keys.len(),
            usings: self.usings.len(),
            entries: self.entry_order.len(),
        }
    }

    /// Discard everything added since `checkpoint`.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.self_type = checkpoint.self_type;
        self.in_type = checkpoint.in_type;
        self.out_type = checkpoint.out_type;
        self.kind = checkpoint.kind;
        self.children.truncate(checkpoint.children);
        self.names.truncate(checkpoint.names);
        self.keys.truncate(checkpoint.keys);
        self.usings.truncate(checkpoint.usings);
        for key in self.entry_order.drain(checkpoint.entries..) {
            self.entries.remove(&key);
        }
    }

    /// Add a named entry. Keys are unique per builder.
    pub fn insert_entry(&mut self, key: String, key_span: Span, value: Node) -> Result<(), ParseError> {
        if self.entries.contains_key(&key) {
            return Err(ParseError::new(ParseErrorKind::DuplicateKey { key }, key_span));
        }
        self.entry_order.push(key.clone());
        self.entries.insert(key, value);
        Ok(())
    }

    /// Move the collected entries out.
    pub fn take_entries(&mut self) -> FxHashMap<String, Node> {
        self.entry_order.clear();
        std::mem::take(&mut self.entries)
    }

    /// Record the production's result.
    pub fn complete(&mut self, kind: NodeKind, self_type: Type) {
        debug!(node = kind.name(), %self_type, "production complete");
        self.kind = Some(kind);
        self.self_type = Some(self_type);
    }

    /// Turn the builder into a node covering `span`.
    ///
    /// A builder no production completed finishes as a discard.
    pub fn finish(self, span: Span) -> Node {
        Node {
            self_type: self.self_type.unwrap_or_else(Type::none),
            in_type: self.in_type,
            out_type: self.out_type,
            span,
            kind: self.kind.unwrap_or(NodeKind::Discard),
        }
    }
}

#[cfg(test)]
mod tests;
