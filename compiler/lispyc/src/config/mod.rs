//! Command line and environment configuration.

use tracing::warn;

use crate::DriverError;

/// REPL settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Prompt shown before each line.
    pub prompt: String,
    /// Print the version banner on startup.
    pub banner: bool,
    /// Record entered lines in the editor's history.
    pub history: bool,
    /// Maximum number of history entries kept.
    pub history_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "lispy> ".to_string(),
            banner: true,
            history: true,
            history_size: 1000,
        }
    }
}

impl Config {
    /// Defaults overridden by `LISPY_PROMPT` and `LISPY_HISTORY_SIZE`.
    pub fn from_env() -> Self {
        Config::default().with_env(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an environment lookup function.
    ///
    /// An unparsable history size is ignored with a warning.
    #[must_use]
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(prompt) = lookup("LISPY_PROMPT") {
            self.prompt = prompt;
        }
        if let Some(raw) = lookup("LISPY_HISTORY_SIZE") {
            match raw.trim().parse() {
                Ok(size) => self.history_size = size,
                Err(_) => warn!(value = %raw, "ignoring invalid LISPY_HISTORY_SIZE"),
            }
        }
        self
    }
}

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Repl,
    /// Evaluate every top-level expression of a file.
    Run(String),
    /// Evaluate one expression given on the command line.
    Eval(String),
    /// Print the syntax tree of an expression.
    Parse(String),
    Help,
    Version,
}

/// Parse the arguments after the program name. Flags may appear anywhere
/// and update `config`.
pub fn parse_args(args: &[String], config: &mut Config) -> Result<Command, DriverError> {
    let mut positional = Vec::new();
    for arg in args {
        match arg.as_str() {
            "-q" | "--quiet" => config.banner = false,
            "--no-history" => config.history = false,
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "help" if positional.is_empty() => return Ok(Command::Help),
            "version" if positional.is_empty() => return Ok(Command::Version),
            flag if flag.starts_with('-') && flag.len() > 1 && !is_number(flag) => {
                return Err(DriverError::Usage(format!("unknown option '{flag}'")));
            }
            _ => positional.push(arg.as_str()),
        }
    }

    match positional.as_slice() {
        [] => Ok(Command::Repl),
        ["run", path] => Ok(Command::Run((*path).to_string())),
        ["eval", rest @ ..] if !rest.is_empty() => Ok(Command::Eval(rest.join(" "))),
        ["parse", rest @ ..] if !rest.is_empty() => Ok(Command::Parse(rest.join(" "))),
        ["run", ..] => Err(DriverError::Usage("usage: lispy run <file>".to_string())),
        ["eval"] => Err(DriverError::Usage("usage: lispy eval <expr>".to_string())),
        ["parse"] => Err(DriverError::Usage("usage: lispy parse <expr>".to_string())),
        [other, ..] => Err(DriverError::Usage(format!("unknown command '{other}'"))),
    }
}

// `lispy eval - 5` passes `-` and negative literals through as operands.
fn is_number(arg: &str) -> bool {
    arg.strip_prefix('-')
        .is_some_and(|digits| digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Help text for `--help`.
pub fn usage() -> &'static str {
    "Lispy - a small Lisp interpreter

Usage:
  lispy [options]                Start the interactive REPL
  lispy run <file> [options]     Evaluate each expression in a file
  lispy eval <expr> [options]    Evaluate an expression and print the result
  lispy parse <expr>             Print the syntax tree of an expression

Options:
  -q, --quiet       Do not print the startup banner
  --no-history      Do not record REPL history
  -h, --help        Show this help
  -V, --version     Show version information

Environment:
  LISPY_PROMPT         REPL prompt (default \"lispy> \")
  LISPY_HISTORY_SIZE   Maximum REPL history entries (default 1000)
  LISPY_LOG            Log filter, e.g. \"debug\" or \"lispy_eval=trace\"
  LISPY_LOG_TREE       Set to 1 for hierarchical log output"
}

#[cfg(test)]
mod tests;
