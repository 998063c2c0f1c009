//! Per-parse resource limits.
//!
//! # Configuration
//!
//! - **Depth**: 256 nested values by default. The stack grows on demand, so
//!   the limit bounds work and tree size rather than guarding the stack.
//! - **Steps**: unbounded by default. Every lexical attempt (including the
//!   speculative ones made while trying alternatives) spends one step.

/// Default maximum nesting of values (`[[[...]]]`).
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Limits applied to a single parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseConfig {
    /// Lexical attempts allowed before the parse fails with
    /// `StepLimitExceeded`. `None` means no limit.
    pub max_steps: Option<u32>,
    /// Deepest value nesting allowed before the parse fails with
    /// `NestingTooDeep`.
    pub max_depth: usize,
}

impl ParseConfig {
    pub const fn new() -> Self {
        ParseConfig {
            max_steps: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new()
    }
}
