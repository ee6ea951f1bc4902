//! Interactive read-eval-print loop.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::{Config, DriverError, OutputSink, Session};

pub const BANNER: &str = "Lispy Version 0.0.0.0.1";
pub const EXIT_HINT: &str = "Press Ctrl+c to Exit";

/// Print the startup banner followed by a blank line.
pub fn print_banner(out: &OutputSink) {
    out.println(BANNER);
    out.println(EXIT_HINT);
    out.println("");
}

/// Line editor settings derived from `config`.
pub fn editor_config(config: &Config) -> Result<rustyline::Config, DriverError> {
    let editor = rustyline::Config::builder()
        .max_history_size(config.history_size)?
        .auto_add_history(false)
        .build();
    Ok(editor)
}

/// Evaluate one entered line and print its result.
pub fn handle_line(session: &mut Session, line: &str, out: &OutputSink) {
    out.println(&session.eval_line(line));
}

/// Run the REPL until Ctrl-C or Ctrl-D.
pub fn run_repl(config: &Config, session: &mut Session, out: &OutputSink) -> Result<(), DriverError> {
    if config.banner {
        print_banner(out);
    }

    let mut editor = DefaultEditor::with_config(editor_config(config)?)?;
    loop {
        match editor.readline(&config.prompt) {
            Ok(line) => {
                if config.history && !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                handle_line(session, &line, out);
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                debug!("repl closed");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }
    }
}
