//! The builtin library.
//!
//! Builtins receive their arguments already evaluated and own them. Each
//! validates its arguments in order and returns an error value on the first
//! failure, before doing any work.

mod arith;
mod list;

pub use arith::{fold_arith, ArithOp};

use tracing::debug;

use crate::errors::{arity_mismatch, def_count_mismatch, non_symbol_in_def_list, type_mismatch};
use crate::{Environment, Value};

/// Register every builtin in `env`.
pub fn register_builtins(env: &mut Environment) {
    env.register_builtin("list", list::builtin_list);
    env.register_builtin("head", list::builtin_head);
    env.register_builtin("tail", list::builtin_tail);
    env.register_builtin("eval", list::builtin_eval);
    env.register_builtin("join", list::builtin_join);

    env.register_builtin("+", arith::builtin_add);
    env.register_builtin("-", arith::builtin_sub);
    env.register_builtin("*", arith::builtin_mul);
    env.register_builtin("/", arith::builtin_div);

    env.register_builtin("def", builtin_def);
}

/// `(def {a b ...} x y ...)` binds each symbol to the matching value and
/// returns `()`.
fn builtin_def(env: &mut Environment, args: Vec<Value>) -> Value {
    let mut args = args.into_iter();
    let Some(first) = args.next() else {
        return arity_mismatch("def", 0, 1).into();
    };
    if !matches!(first, Value::QExpr(_)) {
        return type_mismatch("def", 0, first.type_name(), "Q-Expression").into();
    }
    let symbols = first.into_cells().unwrap_or_default();

    let mut names = Vec::with_capacity(symbols.len());
    for (index, symbol) in symbols.iter().enumerate() {
        match symbol.as_symbol() {
            Some(name) => names.push(name.to_string()),
            None => return non_symbol_in_def_list(index, symbol.type_name()).into(),
        }
    }

    let values: Vec<Value> = args.collect();
    if names.len() != values.len() {
        return def_count_mismatch(names.len(), values.len()).into();
    }

    for (name, value) in names.into_iter().zip(values) {
        debug!(%name, value = %value, "def");
        env.bind(&name, value);
    }
    Value::sexpr()
}
