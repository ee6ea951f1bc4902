//! Lispy IR - syntax types shared between the parser and the evaluator.
//!
//! This crate contains the data structures that cross the parser/evaluator
//! boundary:
//! - [`Span`] for byte-offset source locations
//! - [`SyntaxNode`] and [`NodeKind`], the generic tree produced by
//!   `lispy_parse` and consumed by the reader in `lispy_eval`
//!
//! The evaluator never sees tokens or grammar rules; it only walks a
//! `SyntaxNode` tree once to build its runtime values.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod syntax;

pub use span::{Span, SpanError};
pub use syntax::{NodeKind, SyntaxNode};
