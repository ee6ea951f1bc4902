use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn test_new_is_empty() {
    let env = Environment::new();
    assert!(env.is_empty());
    assert_eq!(env.len(), 0);
    assert!(!env.contains("x"));
}

#[test]
fn test_lookup_unbound() {
    let env = Environment::new();
    let result = env.lookup("nope");
    assert_eq!(
        result.as_error().map(|err| &err.kind),
        Some(&EvalErrorKind::UnboundSymbol {
            name: "nope".to_string()
        })
    );
    assert_eq!(result.to_string(), "Error: Unbound Symbol 'nope'");
}

#[test]
fn test_bind_then_lookup() {
    let mut env = Environment::new();
    env.bind("x", Value::number(100));
    assert_eq!(env.lookup("x"), Value::number(100));
    assert_eq!(env.get("x"), Some(&Value::number(100)));
    assert!(env.contains("x"));
}

#[test]
fn test_rebind_replaces_in_place() {
    let mut env = Environment::new();
    env.bind("a", Value::number(1));
    env.bind("b", Value::number(2));
    env.bind("a", Value::symbol("one"));
    assert_eq!(env.len(), 2);
    let names: Vec<&str> = env.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(env.lookup("a"), Value::symbol("one"));
}

#[test]
fn test_lookup_returns_independent_copy() {
    let mut env = Environment::new();
    env.bind("xs", Value::qexpr_of(vec![Value::number(1)]));
    let mut copy = env.lookup("xs");
    copy.append(Value::number(2));
    assert_eq!(env.lookup("xs"), Value::qexpr_of(vec![Value::number(1)]));
}

#[test]
fn test_with_builtins_registers_library() {
    let env = Environment::with_builtins();
    for name in [
        "list", "head", "tail", "eval", "join", "+", "-", "*", "/", "def",
    ] {
        match env.get(name) {
            Some(Value::Function(builtin)) => assert_eq!(builtin.name(), name),
            other => panic!("{name} bound to {other:?}"),
        }
    }
    assert_eq!(env.len(), 10);
}

#[test]
fn test_debug_lists_bindings() {
    let mut env = Environment::new();
    env.bind("x", Value::number(1));
    assert_eq!(format!("{env:?}"), r#"{"x": Number(1)}"#);
}
