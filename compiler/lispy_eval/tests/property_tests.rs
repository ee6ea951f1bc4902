//! Property-based tests for the evaluator and builtin library.
//!
//! Inputs are generated as source text and run through the real parser and
//! reader, so these also cover the path the REPL takes.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use lispy_eval::reader::read;
use lispy_eval::{eval, Environment, EvalErrorKind, Value};
use lispy_parse::parse;
use proptest::prelude::*;

/// Evaluate a whole line in `env`, the way the REPL does.
fn run(env: &mut Environment, source: &str) -> Value {
    let tree = parse(source).expect("generated source parses");
    eval(env, read(&tree))
}

fn run_fresh(source: &str) -> Value {
    run(&mut Environment::with_builtins(), source)
}

fn error_kind(value: &Value) -> Option<EvalErrorKind> {
    value.as_error().map(|err| err.kind.clone())
}

/// Numbers small enough that sums and products of three never overflow.
fn small() -> impl Strategy<Value = i64> {
    -1_000_000i64..1_000_000
}

fn quoted(ns: &[i64]) -> String {
    let inner: Vec<String> = ns.iter().map(ToString::to_string).collect();
    format!("{{{}}}", inner.join(" "))
}

proptest! {
    #[test]
    fn add_is_associative(a in small(), b in small(), c in small()) {
        prop_assert_eq!(
            run_fresh(&format!("+ {a} {b} {c}")),
            run_fresh(&format!("+ {a} (+ {b} {c})"))
        );
    }

    #[test]
    fn mul_is_associative(a in small(), b in small(), c in small()) {
        let a = a / 1_000;
        let b = b / 1_000;
        let c = c / 1_000;
        prop_assert_eq!(
            run_fresh(&format!("* {a} {b} {c}")),
            run_fresh(&format!("* (* {a} {b}) {c}"))
        );
    }

    #[test]
    fn add_and_mul_commute(a in small(), b in small()) {
        prop_assert_eq!(run_fresh(&format!("+ {a} {b}")), run_fresh(&format!("+ {b} {a}")));
        prop_assert_eq!(run_fresh(&format!("* {a} {b}")), run_fresh(&format!("* {b} {a}")));
    }

    #[test]
    fn division_by_zero_always_fails(n in any::<i64>(), rest in prop::collection::vec(small(), 0..4)) {
        let tail: Vec<String> = rest.iter().map(ToString::to_string).collect();
        let result = run_fresh(&format!("/ {n} 0 {}", tail.join(" ")));
        prop_assert_eq!(error_kind(&result), Some(EvalErrorKind::DivisionByZero));
    }

    #[test]
    fn overflow_never_panics(a in any::<i64>(), b in any::<i64>()) {
        for op in ["+", "-", "*", "/"] {
            let result = run_fresh(&format!("{op} {a} {b}"));
            prop_assert!(result.as_number().is_some() || result.is_error());
        }
    }

    #[test]
    fn join_is_associative(
        xs in prop::collection::vec(small(), 0..5),
        ys in prop::collection::vec(small(), 0..5),
        zs in prop::collection::vec(small(), 0..5),
    ) {
        let (x, y, z) = (quoted(&xs), quoted(&ys), quoted(&zs));
        let flat = run_fresh(&format!("join {x} {y} {z}"));
        prop_assert_eq!(&flat, &run_fresh(&format!("join (join {x} {y}) {z}")));
        prop_assert_eq!(&flat, &run_fresh(&format!("join {x} (join {y} {z})")));
        let all: Vec<i64> = xs.iter().chain(&ys).chain(&zs).copied().collect();
        prop_assert_eq!(flat.to_string(), quoted(&all));
    }

    #[test]
    fn head_and_tail_split_a_list(xs in prop::collection::vec(small(), 1..8)) {
        let list = quoted(&xs);
        prop_assert_eq!(run_fresh(&format!("head {list}")).to_string(), quoted(&xs[..1]));
        prop_assert_eq!(run_fresh(&format!("tail {list}")).to_string(), quoted(&xs[1..]));
    }

    #[test]
    fn clone_is_a_deep_copy(xs in prop::collection::vec(small(), 0..8)) {
        let original = run_fresh(&format!("list {} {}", quoted(&xs), xs.len()));
        let mut copy = original.clone();
        prop_assert_eq!(copy.to_string(), original.to_string());
        copy.append(Value::symbol("extra"));
        let mut inner = copy.pop_at(0);
        inner.append(Value::number(0));
        prop_assert_eq!(original.to_string(), format!("{{{} {}}}", quoted(&xs), xs.len()));
    }

    #[test]
    fn unbound_lookup_is_an_error(name in "[a-z]{1,8}_unbound") {
        let env = Environment::with_builtins();
        prop_assert_eq!(
            error_kind(&env.lookup(&name)),
            Some(EvalErrorKind::UnboundSymbol { name: name.clone() })
        );
    }

    #[test]
    fn def_then_sum(a in small(), b in small()) {
        let mut env = Environment::with_builtins();
        prop_assert_eq!(run(&mut env, &format!("def {{x y}} {a} {b}")), Value::sexpr());
        prop_assert_eq!(run(&mut env, "+ x y"), Value::number(a + b));
        run(&mut env, "def {x} 5");
        prop_assert_eq!(run(&mut env, "list x y").to_string(), format!("{{5 {b}}}"));
    }
}
