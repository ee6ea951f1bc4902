//! Parse errors.
//!
//! A failed parse rejects the whole input; nothing reaches the evaluator.

use lispy_ir::Span;

/// Error produced when source text does not match the grammar.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A character that cannot start any token.
    #[error("unexpected character '{ch}'")]
    UnexpectedChar { ch: char, span: Span },
    /// An opening delimiter that is never closed.
    #[error("unclosed delimiter '{open}'")]
    UnclosedDelimiter { open: char, span: Span },
    /// A closing delimiter with no group open.
    #[error("unexpected closing delimiter '{close}'")]
    UnexpectedClose { close: char, span: Span },
    /// A group closed by the wrong delimiter, e.g. `(1 2}`.
    #[error("mismatched closing delimiter: expected '{expected}', found '{found}'")]
    MismatchedDelimiter {
        expected: char,
        found: char,
        span: Span,
    },
}

impl ParseError {
    /// Location the error points at.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedChar { span, .. }
            | ParseError::UnclosedDelimiter { span, .. }
            | ParseError::UnexpectedClose { span, .. }
            | ParseError::MismatchedDelimiter { span, .. } => *span,
        }
    }
}
