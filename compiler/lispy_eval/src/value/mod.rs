//! Runtime values.
//!
//! Every value is exclusively owned by its container. There is no sharing:
//! `Clone` produces an independent deep copy, and dropping a list drops its
//! whole subtree. Lists hand their children out by moving them (`pop_at`,
//! `take_at`, `into_cells`) rather than by reference counting.
//!
//! Nesting depth is bounded only by memory. Cloning and rendering grow the
//! stack as they descend, and dropping flattens the tree iteratively.

use std::{fmt, mem};

use lispy_stack::ensure_sufficient_stack;

use crate::Environment;
use crate::EvalError;

/// Signature every builtin implements.
///
/// Builtins take ownership of their already-evaluated arguments and may
/// mutate the environment (only `def` does).
pub type BuiltinFn = fn(&mut Environment, Vec<Value>) -> Value;

/// A native function together with the name it was registered under.
#[derive(Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    #[inline]
    pub const fn new(name: &'static str, func: BuiltinFn) -> Self {
        Builtin { name, func }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the builtin with its argument list.
    #[inline]
    pub fn call(&self, env: &mut Environment, args: Vec<Value>) -> Value {
        (self.func)(env, args)
    }
}

// Two builtins are the same when registered under the same name; function
// pointer comparison is not reliable across codegen units.
impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Builtin {}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

/// A Lispy value.
#[derive(Debug, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    Symbol(String),
    Error(EvalError),
    Function(Builtin),
    /// List evaluated as a call when evaluated.
    SExpr(Vec<Value>),
    /// Quoted list, evaluates to itself.
    QExpr(Vec<Value>),
}

impl Value {
    #[inline]
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    #[inline]
    pub fn error(err: EvalError) -> Self {
        Value::Error(err)
    }

    #[inline]
    pub fn function(builtin: Builtin) -> Self {
        Value::Function(builtin)
    }

    /// Empty S-expression `()`.
    #[inline]
    pub fn sexpr() -> Self {
        Value::SExpr(Vec::new())
    }

    /// Empty Q-expression `{}`.
    #[inline]
    pub fn qexpr() -> Self {
        Value::QExpr(Vec::new())
    }

    #[inline]
    pub fn sexpr_of(cells: Vec<Value>) -> Self {
        Value::SExpr(cells)
    }

    #[inline]
    pub fn qexpr_of(cells: Vec<Value>) -> Self {
        Value::QExpr(cells)
    }

    /// Name of the variant, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Symbol(_) => "Symbol",
            Value::Error(_) => "Error",
            Value::Function(_) => "Function",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name),
            _ => None,
        }
    }

    #[inline]
    pub fn as_error(&self) -> Option<&EvalError> {
        match self {
            Value::Error(err) => Some(err),
            _ => None,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Children of an S- or Q-expression; `None` for atoms.
    pub fn cells(&self) -> Option<&[Value]> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells),
            _ => None,
        }
    }

    /// Number of children. Atoms have none.
    pub fn len(&self) -> usize {
        self.cells().map_or(0, <[Value]>::len)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume a list and return its children; `None` for atoms.
    pub fn into_cells(mut self) -> Option<Vec<Value>> {
        match &mut self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(mem::take(cells)),
            _ => None,
        }
    }

    /// Append `child` to the end of this list.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not an S- or Q-expression.
    pub fn append(&mut self, child: Value) {
        self.cells_mut("append").push(child);
    }

    /// Builder form of [`append`](Self::append).
    ///
    /// # Panics
    ///
    /// Panics if `self` is not an S- or Q-expression.
    #[must_use]
    pub fn with(mut self, child: Value) -> Self {
        self.append(child);
        self
    }

    /// Remove and return the child at `index`, shifting later children left.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not a list or `index` is out of bounds.
    pub fn pop_at(&mut self, index: usize) -> Value {
        self.cells_mut("pop_at").remove(index)
    }

    /// Extract the child at `index` and drop the rest of the list.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not a list or `index` is out of bounds.
    pub fn take_at(mut self, index: usize) -> Value {
        self.pop_at(index)
    }

    /// Move every child of `other` onto the end of `self`, preserving order.
    /// The result keeps `self`'s list kind.
    ///
    /// # Panics
    ///
    /// Panics if either operand is not a list.
    #[must_use]
    pub fn join(mut self, other: Value) -> Self {
        let kind = other.type_name();
        let Some(tail) = other.into_cells() else {
            panic!("`join` requires a list operand, got {kind}");
        };
        self.cells_mut("join").extend(tail);
        self
    }

    fn cells_mut(&mut self, op: &str) -> &mut Vec<Value> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => cells,
            atom => panic!("`{op}` requires a list value, got {}", atom.type_name()),
        }
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Number(n) => Value::Number(*n),
            Value::Symbol(name) => Value::Symbol(name.clone()),
            Value::Error(err) => Value::Error(err.clone()),
            Value::Function(builtin) => Value::Function(*builtin),
            Value::SExpr(cells) => ensure_sufficient_stack(|| Value::SExpr(cells.clone())),
            Value::QExpr(cells) => ensure_sufficient_stack(|| Value::QExpr(cells.clone())),
        }
    }
}

impl Drop for Value {
    fn drop(&mut self) {
        let mut pending = match self {
            Value::SExpr(cells) | Value::QExpr(cells) => mem::take(cells),
            _ => return,
        };
        // Detach grandchildren before each child drops, so no drop recurses.
        while let Some(mut value) = pending.pop() {
            if let Value::SExpr(cells) | Value::QExpr(cells) = &mut value {
                pending.append(cells);
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Symbol(name) => f.write_str(name),
            Value::Error(err) => write!(f, "Error: {err}"),
            Value::Function(_) => f.write_str("<function>"),
            Value::SExpr(cells) => ensure_sufficient_stack(|| write_cells(f, cells, '(', ')')),
            Value::QExpr(cells) => ensure_sufficient_stack(|| write_cells(f, cells, '{', '}')),
        }
    }
}

fn write_cells(f: &mut fmt::Formatter<'_>, cells: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{cell}")?;
    }
    write!(f, "{close}")
}
