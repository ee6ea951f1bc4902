//! Lispy CLI
//!
//! `lispy` starts the REPL; `lispy run`, `lispy eval` and `lispy parse`
//! work on files and arguments.

use std::path::Path;

use lispyc::commands::{eval_expr, parse_expr, run_file};
use lispyc::repl::run_repl;
use lispyc::{init_tracing, parse_args, usage, Command, Config, DriverError, OutputSink, Session};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = Config::from_env();
    let out = OutputSink::stdout();

    let result = parse_args(&args, &mut config).and_then(|command| {
        let mut session = Session::new();
        match command {
            Command::Repl => run_repl(&config, &mut session, &out),
            Command::Run(path) => run_file(Path::new(&path), &mut session, &out),
            Command::Eval(expr) => eval_expr(&expr, &mut session, &out),
            Command::Parse(expr) => parse_expr(&expr, &out),
            Command::Help => {
                println!("{}", usage());
                Ok(())
            }
            Command::Version => {
                println!("lispy {}", lispyc::VERSION);
                Ok(())
            }
        }
    });

    if let Err(err) = result {
        eprintln!("{err}");
        if matches!(err, DriverError::Usage(_)) {
            eprintln!();
            eprintln!("{}", usage());
        }
        std::process::exit(1);
    }
}
