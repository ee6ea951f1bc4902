//! Global symbol table.
//!
//! A single flat namespace mapping names to owned values. Bindings keep
//! their insertion order (so listings are stable) and are found through an
//! `FxHashMap` index. Rebinding a name replaces its value in place.

use rustc_hash::FxHashMap;
use std::fmt;

use crate::builtins::register_builtins;
use crate::errors::unbound_symbol;
use crate::{Builtin, BuiltinFn, Value};

struct Binding {
    name: String,
    value: Value,
}

/// The interpreter's global environment.
#[derive(Default)]
pub struct Environment {
    bindings: Vec<Binding>,
    index: FxHashMap<String, usize>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Environment::default()
    }

    /// Create an environment with the full builtin library registered.
    pub fn with_builtins() -> Self {
        let mut env = Environment::new();
        register_builtins(&mut env);
        env
    }

    /// Look up a name, returning an independent copy of its value or an
    /// unbound-symbol error value.
    pub fn lookup(&self, name: &str) -> Value {
        match self.get(name) {
            Some(value) => value.clone(),
            None => unbound_symbol(name).into(),
        }
    }

    /// Borrow the value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let &slot = self.index.get(name)?;
        self.bindings.get(slot).map(|binding| &binding.value)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Bind `name` to `value`, replacing any existing binding.
    pub fn bind(&mut self, name: &str, value: Value) {
        if let Some(binding) = self
            .index
            .get(name)
            .and_then(|&slot| self.bindings.get_mut(slot))
        {
            binding.value = value;
            return;
        }
        self.index.insert(name.to_string(), self.bindings.len());
        self.bindings.push(Binding {
            name: name.to_string(),
            value,
        });
    }

    /// Bind `name` to a native function.
    pub fn register_builtin(&mut self, name: &'static str, func: BuiltinFn) {
        self.bind(name, Value::function(Builtin::new(name, func)));
    }

    /// Bindings in the order they were first defined.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings
            .iter()
            .map(|binding| (binding.name.as_str(), &binding.value))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests;
