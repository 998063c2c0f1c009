//! Scanner for the we language.
//!
//! Maps each [`TokenKind`](we_ir::TokenKind) onto a rule from `we_lexer_core` and drives those
//! rules with a stateful [`Scanner`]. Callers that want the whole stream at
//! once use [`tokenize`].

mod lex_error;
pub mod rules;
mod scanner;

pub use lex_error::{KeywordCollision, LexError, LexErrorKind};
pub use rules::rule;
pub use scanner::{peek, peek_kind, tokenize, Scanner};
