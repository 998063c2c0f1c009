//! Structural type descriptors.
//!
//! A [`Type`] pairs a *claim* (what the type asserts about itself) with a set
//! of named *requirements* (what it demands of anything occupying its
//! position). Compatibility is structural: two types match when their
//! requirement sets are compatible, not when their claims are equal. The
//! matching algorithm itself belongs to later phases; this module only
//! defines the shape.

use std::fmt;

use rustc_hash::FxHashMap;

/// Well-known claims assigned by the parser's productions.
pub mod claims {
    /// Absence of a type (empty list element, untyped function edge).
    pub const NONE: &str = "None";
    pub const INTEGER: &str = "Integer";
    pub const STRING: &str = "String";
    pub const LIST: &str = "List";
    pub const MAP: &str = "Map";
    pub const FUNCTION: &str = "Function";
    pub const ALIAS: &str = "Alias";
    pub const IDENTITY: &str = "Identity";
    pub const DISCARD: &str = "Discard";
    pub const MODULE: &str = "Module";
}

/// Requirement names used by compound claims.
pub mod requirements {
    /// Element type of a list.
    pub const ITEM: &str = "item";
    /// Input edge of a function.
    pub const IN: &str = "in";
    /// Output edge of a function.
    pub const OUT: &str = "out";
    /// Wrapped type of an alias or identity.
    pub const TARGET: &str = "target";
}

/// A structural type: a claim plus named requirements.
///
/// Requirement keys are unique and unordered. A type without requirements is
/// a nominal leaf.
#[derive(Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Type {
    pub claim: String,
    pub requirements: FxHashMap<String, Type>,
}

impl Type {
    /// Nominal leaf type with the given claim.
    pub fn named(claim: impl Into<String>) -> Self {
        Type {
            claim: claim.into(),
            requirements: FxHashMap::default(),
        }
    }

    /// The `None` leaf.
    pub fn none() -> Self {
        Type::named(claims::NONE)
    }

    /// Add (or replace) a requirement.
    #[must_use]
    pub fn with_requirement(mut self, name: impl Into<String>, requirement: Type) -> Self {
        self.requirements.insert(name.into(), requirement);
        self
    }

    /// Look up a requirement by name.
    pub fn requirement(&self, name: &str) -> Option<&Type> {
        self.requirements.get(name)
    }

    /// `true` when the type imposes no structural constraints.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.requirements.is_empty()
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.claim == claims::NONE && self.is_leaf()
    }

    /// Requirement names in sorted order, for stable output.
    pub fn requirement_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.requirements.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.claim)?;
        if self.is_leaf() {
            return Ok(());
        }
        f.write_str(" { ")?;
        for (i, name) in self.requirement_names().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if let Some(requirement) = self.requirements.get(name) {
                write!(f, "{name}: {requirement}")?;
            }
        }
        f.write_str(" }")
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({self})")
    }
}
