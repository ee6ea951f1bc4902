//! Lispy driver library.
//!
//! Everything the `lispy` binary does is available here for embedding and
//! tests:
//!
//! - `Session` / `SharedSession`: evaluate source against a persistent
//!   environment
//! - `OutputSink`: stdout or a capture buffer
//! - `render_parse_error`: line/column diagnostics with a caret
//! - `commands` and `repl`: the CLI entry points
//! - `init_tracing`: opt-in logging via `LISPY_LOG`

pub mod commands;
mod config;
mod error;
mod output;
pub mod repl;
mod reporting;
mod session;
mod tracing_setup;

pub use config::{parse_args, usage, Command, Config};
pub use error::DriverError;
pub use output::{BufferSink, OutputSink};
pub use reporting::render_parse_error;
pub use session::{Session, SharedSession, STDIN_NAME};
pub use tracing_setup::init_tracing;

/// Crate version reported by `lispy --version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
