//! Integer arithmetic builtins: `+`, `-`, `*`, `/`.
//!
//! All four share one left fold. Arithmetic is checked, so overflow is an
//! error value rather than a wrap or a panic.

use crate::errors::{arity_mismatch, division_by_zero, integer_overflow, type_mismatch, EvalError};
use crate::{Environment, Value};

/// An arithmetic operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    /// The symbol the operator is bound to.
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }

    fn operation(self) -> &'static str {
        match self {
            ArithOp::Add => "addition",
            ArithOp::Sub => "subtraction",
            ArithOp::Mul => "multiplication",
            ArithOp::Div => "division",
        }
    }

    /// Apply the operator to two numbers. Division truncates toward zero.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
        let result = match self {
            ArithOp::Add => lhs.checked_add(rhs),
            ArithOp::Sub => lhs.checked_sub(rhs),
            ArithOp::Mul => lhs.checked_mul(rhs),
            ArithOp::Div => {
                if rhs == 0 {
                    return Err(division_by_zero());
                }
                lhs.checked_div(rhs)
            }
        };
        result.ok_or_else(|| integer_overflow(self.operation()))
    }
}

/// Fold `args` left to right with `op`.
///
/// Every argument must be a number. A lone argument to `-` is negated; a
/// lone argument to any other operator is returned unchanged. The fold
/// stops at the first error.
pub fn fold_arith(op: ArithOp, args: &[Value]) -> Value {
    let mut numbers = Vec::with_capacity(args.len());
    for (index, arg) in args.iter().enumerate() {
        match arg.as_number() {
            Some(n) => numbers.push(n),
            None => return type_mismatch(op.symbol(), index, arg.type_name(), "Number").into(),
        }
    }

    let Some((&first, rest)) = numbers.split_first() else {
        return arity_mismatch(op.symbol(), 0, 1).into();
    };

    if op == ArithOp::Sub && rest.is_empty() {
        return match first.checked_neg() {
            Some(n) => Value::number(n),
            None => integer_overflow("negation").into(),
        };
    }

    let mut acc = first;
    for &n in rest {
        match op.apply(acc, n) {
            Ok(next) => acc = next,
            Err(err) => return err.into(),
        }
    }
    Value::number(acc)
}

pub(super) fn builtin_add(_env: &mut Environment, args: Vec<Value>) -> Value {
    fold_arith(ArithOp::Add, &args)
}

pub(super) fn builtin_sub(_env: &mut Environment, args: Vec<Value>) -> Value {
    fold_arith(ArithOp::Sub, &args)
}

pub(super) fn builtin_mul(_env: &mut Environment, args: Vec<Value>) -> Value {
    fold_arith(ArithOp::Mul, &args)
}

pub(super) fn builtin_div(_env: &mut Environment, args: Vec<Value>) -> Value {
    fold_arith(ArithOp::Div, &args)
}
