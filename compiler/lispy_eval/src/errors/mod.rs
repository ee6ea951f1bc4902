//! Runtime error values.
//!
//! Errors never unwind: every failure becomes a [`Value::Error`] that flows
//! back through the same return channel as a successful result. The
//! evaluator stops at the first one it sees among a list's children.
//!
//! `EvalErrorKind` carries the structured data for each failure so callers
//! and tests can match on it. Factory functions (e.g. `division_by_zero()`)
//! are the public way to build an error; they fill in both `kind` and the
//! rendered `message`.
//!
//! [`Value::Error`]: crate::Value::Error

use std::fmt;

use crate::Value;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Wrong value variant passed to a builtin.
    TypeMismatch {
        builtin: String,
        index: usize,
        got: String,
        expected: String,
    },
    /// Wrong number of arguments passed to a builtin.
    ArityMismatch {
        builtin: String,
        got: usize,
        expected: usize,
    },
    /// `head`/`tail` applied to `{}`.
    EmptyList { builtin: String },
    DivisionByZero,
    IntegerOverflow { operation: String },
    UnboundSymbol { name: String },
    /// First element of an S-expression is not a function.
    NotAFunction { got: String },
    /// Number literal does not fit a signed 64-bit integer.
    InvalidNumber,
    /// `def` symbol list contains something other than a symbol.
    NonSymbolInDefList { index: usize, got: String },
    /// `def` got a different number of values than symbols.
    DefCountMismatch { symbols: usize, values: usize },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch {
                builtin,
                index,
                got,
                expected,
            } => write!(
                f,
                "Function '{builtin}' passed incorrect type for argument {index}. \
                 Got {got}, Expected {expected}."
            ),
            Self::ArityMismatch {
                builtin,
                got,
                expected,
            } => write!(
                f,
                "Function '{builtin}' passed incorrect number of arguments. \
                 Got {got}, Expected {expected}."
            ),
            Self::EmptyList { builtin } => write!(f, "Function '{builtin}' passed {{}}!"),
            Self::DivisionByZero => write!(f, "Division By Zero!"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),
            Self::UnboundSymbol { name } => write!(f, "Unbound Symbol '{name}'"),
            Self::NotAFunction { got } => write!(
                f,
                "S-Expression starts with incorrect type. Got {got}, Expected Function."
            ),
            Self::InvalidNumber => write!(f, "invalid number"),
            Self::NonSymbolInDefList { index, got } => write!(
                f,
                "Function 'def' cannot define non-symbol. Got {got} at index {index}."
            ),
            Self::DefCountMismatch { symbols, values } => write!(
                f,
                "Function 'def' cannot define incorrect number of values to symbols. \
                 Got {values}, Expected {symbols}."
            ),
        }
    }
}

/// A runtime error, carried inside a `Value::Error`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message, always `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<EvalError> for Value {
    #[inline]
    fn from(err: EvalError) -> Self {
        Value::Error(err)
    }
}

// Builtin argument errors

/// Argument `index` of `builtin` has the wrong variant.
#[cold]
pub fn type_mismatch(builtin: &str, index: usize, got: &str, expected: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        builtin: builtin.to_string(),
        index,
        got: got.to_string(),
        expected: expected.to_string(),
    })
}

/// `builtin` received `got` arguments instead of `expected`.
#[cold]
pub fn arity_mismatch(builtin: &str, got: usize, expected: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        builtin: builtin.to_string(),
        got,
        expected,
    })
}

#[cold]
pub fn empty_list(builtin: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyList {
        builtin: builtin.to_string(),
    })
}

// Arithmetic errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

// Evaluation errors

#[cold]
pub fn unbound_symbol(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundSymbol {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_a_function(got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction {
        got: got.to_string(),
    })
}

#[cold]
pub fn invalid_number() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidNumber)
}

// Binding errors

#[cold]
pub fn non_symbol_in_def_list(index: usize, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonSymbolInDefList {
        index,
        got: got.to_string(),
    })
}

#[cold]
pub fn def_count_mismatch(symbols: usize, values: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DefCountMismatch { symbols, values })
}
