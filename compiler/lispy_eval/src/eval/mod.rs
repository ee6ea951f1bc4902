//! Tree-walking evaluator.
//!
//! Symbols resolve through the environment, S-expressions are calls, and
//! everything else (numbers, errors, functions, Q-expressions) evaluates to
//! itself. Evaluation consumes its input.

use lispy_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::errors::not_a_function;
use crate::{Environment, Value};

/// Evaluate a value.
pub fn eval(env: &mut Environment, value: Value) -> Value {
    match value {
        Value::Symbol(ref name) => env.lookup(name),
        Value::SExpr(_) => eval_sexpr(env, value.into_cells().unwrap_or_default()),
        other => other,
    }
}

/// Evaluate the children of an S-expression and apply the result.
///
/// Every child is evaluated left to right, including those after a child
/// that produced an error, so side effects such as `def` still happen.
/// The first error among the results is then returned.
///
/// - `()` evaluates to itself.
/// - A single child is returned as-is, so `(5)` is `5` and `((+ 1 2))`
///   is `3`.
/// - Otherwise the first child must be a function; it is called with the
///   remaining children as its arguments.
#[tracing::instrument(level = "trace", skip_all, fields(len = cells.len()))]
pub fn eval_sexpr(env: &mut Environment, cells: Vec<Value>) -> Value {
    ensure_sufficient_stack(|| {
        let mut cells: Vec<Value> = cells.into_iter().map(|cell| eval(env, cell)).collect();

        if let Some(pos) = cells.iter().position(Value::is_error) {
            return cells.swap_remove(pos);
        }

        match cells.len() {
            0 => return Value::SExpr(cells),
            1 => return cells.swap_remove(0),
            _ => {}
        }

        match cells.remove(0) {
            Value::Function(builtin) => {
                trace!(builtin = builtin.name(), argc = cells.len(), "call");
                builtin.call(env, cells)
            }
            head => not_a_function(head.type_name()).into(),
        }
    })
}
