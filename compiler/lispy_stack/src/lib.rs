//! Stack growth guard for recursive descent.
//!
//! Both the parser and the evaluator recurse once per nesting level of the
//! input, so `((((((...))))))` typed at the prompt translates directly into
//! native stack depth. Wrapping each recursive step in
//! [`ensure_sufficient_stack`] moves deep inputs onto a freshly allocated
//! segment instead of overflowing.
//!
//! On `wasm32` the guard is a plain call.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
