//! Syntax tree nodes.
//!
//! Every grammar production yields exactly one [`Node`]. The payload is a
//! closed tagged union ([`NodeKind`]) so adding a production forces every
//! consumer's `match` to be revisited.

use rustc_hash::FxHashMap;

use crate::{Span, Type};

/// A dotted name such as `bob.the.palindrome`, stored by value.
pub type IdentifierChain = Vec<String>;

/// A syntax tree element.
///
/// Children are owned exclusively. Names are copied out of the source so the
/// tree outlives the buffer it was parsed from.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// The claim this node makes about itself.
    pub self_type: Type,
    /// Declared or inferred input type; set by function-like productions.
    pub in_type: Option<Type>,
    /// Declared or inferred output type; set by function-like productions.
    pub out_type: Option<Type>,
    pub span: Span,
    pub kind: NodeKind,
}

/// Production-specific payload.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// A whole source unit: leading `use` chains and named definitions.
    Module {
        usings: Vec<IdentifierChain>,
        entries: FxHashMap<String, Node>,
    },
    /// `[a, b, c]`
    List(Vec<Node>),
    /// `{ key: value ... }`
    Map(FxHashMap<String, Node>),
    /// `( ... ; ... )`, steps in execution order.
    Function { steps: Vec<Node> },
    /// `'value`
    TypeAlias(Box<Node>),
    /// `*value`
    TypeIdentity(Box<Node>),
    /// `_`
    Discard,
    /// Integer atom, decimal or radix-prefixed in source.
    Integer(u64),
    /// `a.b.c`
    IdentifierChain(IdentifierChain),
    /// String literal with escapes preserved verbatim.
    String(String),
}

impl NodeKind {
    /// Short production name, used in logs and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Module { .. } => "module",
            NodeKind::List(_) => "list",
            NodeKind::Map(_) => "map",
            NodeKind::Function { .. } => "function",
            NodeKind::TypeAlias(_) => "type alias",
            NodeKind::TypeIdentity(_) => "type identity",
            NodeKind::Discard => "discard",
            NodeKind::Integer(_) => "integer",
            NodeKind::IdentifierChain(_) => "identifier chain",
            NodeKind::String(_) => "string",
        }
    }
}

impl Node {
    /// Direct children, in source order where the payload has one.
    ///
    /// Map and module entries come back sorted by key.
    pub fn children(&self) -> Vec<&Node> {
        match &self.kind {
            NodeKind::List(items) => items.iter().collect(),
            NodeKind::Function { steps } => steps.iter().collect(),
            NodeKind::Map(entries) | NodeKind::Module { entries, .. } => {
                let mut keyed: Vec<(&String, &Node)> = entries.iter().collect();
                keyed.sort_unstable_by(|a, b| a.0.cmp(b.0));
                keyed.into_iter().map(|(_, node)| node).collect()
            }
            NodeKind::TypeAlias(inner) | NodeKind::TypeIdentity(inner) => vec![inner.as_ref()],
            NodeKind::Discard
            | NodeKind::Integer(_)
            | NodeKind::IdentifierChain(_)
            | NodeKind::String(_) => Vec::new(),
        }
    }

    /// Look up a named entry of a map or module node.
    pub fn entry(&self, key: &str) -> Option<&Node> {
        match &self.kind {
            NodeKind::Map(entries) | NodeKind::Module { entries, .. } => entries.get(key),
            _ => None,
        }
    }
}
