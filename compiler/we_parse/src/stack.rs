//! Stack growth for nested values.
//!
//! Every nested value re-enters [`build`](crate::combinator::build), which
//! costs a handful of frames per level. Native targets grow the stack on
//! demand through `stacker`; WASM manages its own stack and calls straight
//! through.

/// Grow when less than this remains.
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment.
const STACK_PER_GROWTH: usize = 1024 * 1024;

/// Run `f`, growing the stack first if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_GROWTH, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
