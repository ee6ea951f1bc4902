//! Handlers for the non-interactive CLI commands.

use std::fs;
use std::path::Path;

use lispy_parse::parse;
use tracing::info;

use crate::reporting::render_parse_error;
use crate::{DriverError, OutputSink, Session};

/// Source name used in diagnostics for `lispy eval` / `lispy parse`.
const ARG_NAME: &str = "<arg>";

/// Evaluate each top-level expression of a file, printing one line each.
///
/// The file is parsed in full first; if it does not parse, nothing runs.
pub fn run_file(path: &Path, session: &mut Session, out: &OutputSink) -> Result<(), DriverError> {
    let name = path.display().to_string();
    let source = fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: name.clone(),
        source,
    })?;
    info!(file = %name, bytes = source.len(), "running file");

    let values = session
        .eval_each(&source)
        .map_err(|err| DriverError::Parse(render_parse_error(&name, &source, &err)))?;
    for value in values {
        out.println(&value.to_string());
    }
    Ok(())
}

/// Evaluate an expression given on the command line and print the result.
pub fn eval_expr(expr: &str, session: &mut Session, out: &OutputSink) -> Result<(), DriverError> {
    let value = session
        .eval_source(expr)
        .map_err(|err| DriverError::Parse(render_parse_error(ARG_NAME, expr, &err)))?;
    out.println(&value.to_string());
    Ok(())
}

/// Print the syntax tree of an expression.
pub fn parse_expr(expr: &str, out: &OutputSink) -> Result<(), DriverError> {
    let tree =
        parse(expr).map_err(|err| DriverError::Parse(render_parse_error(ARG_NAME, expr, &err)))?;
    out.print(&tree.dump());
    Ok(())
}
