//! Q-expression builtins: `list`, `head`, `tail`, `join`, `eval`.

use crate::errors::{arity_mismatch, empty_list, type_mismatch, EvalError};
use crate::eval::eval;
use crate::{Environment, Value};

/// Check that `args` is exactly one Q-expression and return it.
fn single_qexpr(builtin: &str, args: Vec<Value>) -> Result<Value, EvalError> {
    let [arg]: [Value; 1] = args
        .try_into()
        .map_err(|args: Vec<Value>| arity_mismatch(builtin, args.len(), 1))?;
    if matches!(arg, Value::QExpr(_)) {
        Ok(arg)
    } else {
        Err(type_mismatch(builtin, 0, arg.type_name(), "Q-Expression"))
    }
}

/// Like [`single_qexpr`], additionally rejecting `{}`.
fn non_empty_qexpr(builtin: &str, args: Vec<Value>) -> Result<Value, EvalError> {
    let list = single_qexpr(builtin, args)?;
    if list.is_empty() {
        return Err(empty_list(builtin));
    }
    Ok(list)
}

/// `(list a b ...)` turns its arguments into `{a b ...}`.
pub(super) fn builtin_list(_env: &mut Environment, args: Vec<Value>) -> Value {
    Value::qexpr_of(args)
}

/// `(head {a b ...})` is `{a}`.
pub(super) fn builtin_head(_env: &mut Environment, args: Vec<Value>) -> Value {
    match non_empty_qexpr("head", args) {
        Ok(list) => Value::qexpr().with(list.take_at(0)),
        Err(err) => err.into(),
    }
}

/// `(tail {a b ...})` is `{b ...}`.
pub(super) fn builtin_tail(_env: &mut Environment, args: Vec<Value>) -> Value {
    match non_empty_qexpr("tail", args) {
        Ok(mut list) => {
            list.pop_at(0);
            list
        }
        Err(err) => err.into(),
    }
}

/// `(join {a} {b c} ...)` concatenates Q-expressions in order.
pub(super) fn builtin_join(_env: &mut Environment, args: Vec<Value>) -> Value {
    if let Some((index, arg)) = args
        .iter()
        .enumerate()
        .find(|(_, arg)| !matches!(arg, Value::QExpr(_)))
    {
        return type_mismatch("join", index, arg.type_name(), "Q-Expression").into();
    }
    args.into_iter()
        .reduce(Value::join)
        .unwrap_or_else(|| arity_mismatch("join", 0, 1).into())
}

/// `(eval {f x ...})` evaluates the quoted list as an S-expression.
pub(super) fn builtin_eval(env: &mut Environment, args: Vec<Value>) -> Value {
    match single_qexpr("eval", args) {
        Ok(list) => {
            let cells = list.into_cells().unwrap_or_default();
            eval(env, Value::sexpr_of(cells))
        }
        Err(err) => err.into(),
    }
}
