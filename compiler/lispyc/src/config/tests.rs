use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

fn command(list: &[&str]) -> Command {
    parse_args(&args(list), &mut Config::default()).unwrap()
}

fn usage_error(list: &[&str]) -> String {
    match parse_args(&args(list), &mut Config::default()) {
        Err(DriverError::Usage(msg)) => msg,
        other => panic!("expected usage error, got {other:?}"),
    }
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.prompt, "lispy> ");
    assert!(config.banner);
    assert!(config.history);
    assert_eq!(config.history_size, 1000);
}

#[test]
fn test_env_overrides() {
    let config = Config::default().with_env(|key| match key {
        "LISPY_PROMPT" => Some("> ".to_string()),
        "LISPY_HISTORY_SIZE" => Some(" 50 ".to_string()),
        _ => None,
    });
    assert_eq!(config.prompt, "> ");
    assert_eq!(config.history_size, 50);
}

#[test]
fn test_invalid_history_size_is_ignored() {
    let config = Config::default().with_env(|key| {
        (key == "LISPY_HISTORY_SIZE").then(|| "lots".to_string())
    });
    assert_eq!(config, Config::default());
}

#[test]
fn test_commands() {
    assert_eq!(command(&[]), Command::Repl);
    assert_eq!(command(&["run", "prog.lspy"]), Command::Run("prog.lspy".into()));
    assert_eq!(command(&["eval", "+", "1", "2"]), Command::Eval("+ 1 2".into()));
    assert_eq!(command(&["eval", "(head {1 2})"]), Command::Eval("(head {1 2})".into()));
    assert_eq!(command(&["parse", "{1}"]), Command::Parse("{1}".into()));
    assert_eq!(command(&["--help"]), Command::Help);
    assert_eq!(command(&["help"]), Command::Help);
    assert_eq!(command(&["-V"]), Command::Version);
}

#[test]
fn test_negative_operands_are_not_flags() {
    assert_eq!(command(&["eval", "-", "-5"]), Command::Eval("- -5".into()));
}

#[test]
fn test_flags_update_config() {
    let mut config = Config::default();
    let cmd = parse_args(&args(&["-q", "--no-history"]), &mut config).unwrap();
    assert_eq!(cmd, Command::Repl);
    assert!(!config.banner);
    assert!(!config.history);
}

#[test]
fn test_usage_errors() {
    assert_eq!(usage_error(&["run"]), "usage: lispy run <file>");
    assert_eq!(usage_error(&["run", "a", "b"]), "usage: lispy run <file>");
    assert_eq!(usage_error(&["eval"]), "usage: lispy eval <expr>");
    assert_eq!(usage_error(&["frobnicate"]), "unknown command 'frobnicate'");
    assert_eq!(usage_error(&["--bogus"]), "unknown option '--bogus'");
}

#[test]
fn test_usage_mentions_every_command() {
    for word in ["run", "eval", "parse", "--quiet", "LISPY_LOG"] {
        assert!(usage().contains(word), "{word}");
    }
}
