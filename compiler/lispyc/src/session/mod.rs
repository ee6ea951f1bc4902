//! Interpreter sessions.
//!
//! A `Session` owns one global environment and evaluates source text
//! against it. Definitions made by one input are visible to the next.

use lispy_eval::reader::{read, read_each};
use lispy_eval::{eval, Environment, Value};
use lispy_parse::{parse, ParseError};
use parking_lot::Mutex;
use tracing::debug;

use crate::reporting::render_parse_error;

/// Source name used in diagnostics for interactive input.
pub const STDIN_NAME: &str = "<stdin>";

/// One interpreter instance with its global environment.
#[derive(Debug)]
pub struct Session {
    env: Environment,
}

impl Session {
    /// Create a session with the builtin library loaded.
    pub fn new() -> Self {
        Session {
            env: Environment::with_builtins(),
        }
    }

    /// The session's global environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Evaluate a whole input as a single S-expression.
    ///
    /// The input does not need outer parentheses: `+ 1 2` evaluates to `3`.
    /// On a parse error nothing is evaluated and the environment is left
    /// untouched.
    pub fn eval_source(&mut self, source: &str) -> Result<Value, ParseError> {
        let tree = parse(source)?;
        let value = eval(&mut self.env, read(&tree));
        debug!(result = %value, "evaluated input");
        Ok(value)
    }

    /// Evaluate each top-level expression of `source` separately, in order.
    ///
    /// The whole input is parsed before anything is evaluated.
    pub fn eval_each(&mut self, source: &str) -> Result<Vec<Value>, ParseError> {
        let tree = parse(source)?;
        let values = read_each(&tree)
            .into_iter()
            .map(|value| eval(&mut self.env, value))
            .collect();
        Ok(values)
    }

    /// Evaluate one REPL line and return exactly the text to print for it:
    /// the rendered result, or a rendered parse diagnostic.
    pub fn eval_line(&mut self, source: &str) -> String {
        match self.eval_source(source) {
            Ok(value) => value.to_string(),
            Err(err) => render_parse_error(STDIN_NAME, source, &err),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// A session that can be shared between threads.
///
/// The lock is held for the whole of each top-level evaluation, so a `def`
/// is never observed half-applied.
#[derive(Debug, Default)]
pub struct SharedSession {
    inner: Mutex<Session>,
}

impl SharedSession {
    pub fn new() -> Self {
        SharedSession {
            inner: Mutex::new(Session::new()),
        }
    }

    pub fn eval_source(&self, source: &str) -> Result<Value, ParseError> {
        self.inner.lock().eval_source(source)
    }

    pub fn eval_line(&self, source: &str) -> String {
        self.inner.lock().eval_line(source)
    }

    /// Run `f` with exclusive access to the underlying session.
    pub fn with<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
