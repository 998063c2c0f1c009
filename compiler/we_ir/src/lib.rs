//! Shared data model for the we front end.
//!
//! - [`Span`]: byte ranges into the source
//! - [`Token`] / [`TokenKind`]: scanner output
//! - [`TokenSet`]: expected-token bitsets for parse failures
//! - [`Type`]: structural claim + requirements
//! - [`Node`] / [`NodeKind`]: syntax tree produced by the parser

mod node;
mod span;
mod token;
mod token_set;
pub mod types;

pub use node::{IdentifierChain, Node, NodeKind};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use token_set::TokenSet;
pub use types::Type;
