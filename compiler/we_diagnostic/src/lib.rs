//! Diagnostic values for the we front end.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Resolved line/column, when the source is at hand
//!
//! Rendering is left to hosts.

mod diagnostic;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Location, Severity};
pub use error_code::ErrorCode;
