//! Conversion from syntax trees to values.

use lispy_ir::{NodeKind, SyntaxNode};
use lispy_stack::ensure_sufficient_stack;

use crate::errors::invalid_number;
use crate::Value;

/// Read a syntax node into a value.
///
/// The program root and `( )` groups become S-expressions, `{ }` groups
/// become Q-expressions. Delimiter children are skipped. A number literal
/// outside the `i64` range reads as an `invalid number` error value, which
/// the evaluator then reports like any other error.
pub fn read(node: &SyntaxNode) -> Value {
    match node.kind {
        NodeKind::Number => read_number(node.text()),
        NodeKind::Symbol => Value::symbol(node.text()),
        NodeKind::Program | NodeKind::SExpr => Value::sexpr_of(read_operands(node)),
        NodeKind::QExpr => Value::qexpr_of(read_operands(node)),
        // A bare delimiter carries no value.
        NodeKind::Punct => Value::sexpr(),
    }
}

/// Read each top-level expression of a program as a separate value.
pub fn read_each(program: &SyntaxNode) -> Vec<Value> {
    program.operands().map(read).collect()
}

fn read_operands(node: &SyntaxNode) -> Vec<Value> {
    ensure_sufficient_stack(|| node.operands().map(read).collect())
}

fn read_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::number(n),
        Err(_) => invalid_number().into(),
    }
}

#[cfg(test)]
mod tests;
