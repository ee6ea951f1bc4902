//! Lispy Eval - value model, environment and evaluator for Lispy.
//!
//! # Architecture
//!
//! - `Value`: numbers, symbols, error values, builtins, S- and Q-expressions
//! - `Environment`: the flat global symbol table
//! - `eval` / `eval_sexpr`: the tree-walking evaluator
//! - `builtins`: `list head tail eval join + - * / def`
//! - `reader`: syntax tree to `Value` conversion
//!
//! Errors are ordinary values (`Value::Error`) and never unwind.

mod builtins;
mod environment;
pub mod errors;
mod eval;
pub mod reader;
mod value;

pub use builtins::{fold_arith, register_builtins, ArithOp};
pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind};
pub use eval::{eval, eval_sexpr};
pub use value::{Builtin, BuiltinFn, Value};

