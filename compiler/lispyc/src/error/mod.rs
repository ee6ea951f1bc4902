//! Driver-level failures.
//!
//! Evaluation errors are values and never reach this type; only failures
//! around the interpreter (files, the terminal, the command line, and
//! inputs that do not parse) do.

use rustyline::error::ReadlineError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// A rendered parse diagnostic.
    #[error("{0}")]
    Parse(String),
    #[error("line editor failed: {0}")]
    Readline(#[from] ReadlineError),
    #[error("{0}")]
    Usage(String),
}
