use super::*;
use crate::errors::EvalErrorKind;
use lispy_parse::parse;
use pretty_assertions::assert_eq;

fn read_source(source: &str) -> Value {
    match parse(source) {
        Ok(tree) => read(&tree),
        Err(err) => panic!("parse of {source:?} failed: {err}"),
    }
}

#[test]
fn test_program_is_sexpr() {
    assert_eq!(read_source("").to_string(), "()");
    assert_eq!(read_source("+ 1 2").to_string(), "(+ 1 2)");
    assert!(matches!(read_source("+ 1 2"), Value::SExpr(_)));
}

#[test]
fn test_groups() {
    let value = read_source("(def {x y} 1 -2)");
    assert_eq!(value.to_string(), "((def {x y} 1 -2))");
    let inner = value.take_at(0);
    let cells = inner.cells().map(<[Value]>::to_vec).unwrap_or_default();
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[0], Value::symbol("def"));
    assert!(matches!(cells[1], Value::QExpr(_)));
    assert_eq!(cells[3], Value::number(-2));
}

#[test]
fn test_number_out_of_range() {
    let value = read_source("99999999999999999999").take_at(0);
    assert_eq!(
        value.as_error().map(|err| &err.kind),
        Some(&EvalErrorKind::InvalidNumber)
    );
}

#[test]
fn test_number_bounds() {
    assert_eq!(
        read_source("9223372036854775807 -9223372036854775808").into_cells(),
        Some(vec![Value::number(i64::MAX), Value::number(i64::MIN)])
    );
}

#[test]
fn test_read_each_splits_top_level() {
    let tree = parse("(+ 1 2) {a} x").unwrap();
    let values: Vec<String> = read_each(&tree).iter().map(ToString::to_string).collect();
    assert_eq!(values, vec!["(+ 1 2)", "{a}", "x"]);
}

#[test]
fn test_punct_alone() {
    let tree = parse("()").unwrap();
    let punct = &tree.children[0].children[0];
    assert!(punct.is_punct());
    assert_eq!(read(punct), Value::sexpr());
}
