use super::*;
use lispy_parse::parse;
use pretty_assertions::assert_eq;

fn render(source: &str) -> String {
    match parse(source) {
        Ok(_) => panic!("{source:?} parsed"),
        Err(err) => render_parse_error("<stdin>", source, &err),
    }
}

#[test]
fn test_unclosed_delimiter() {
    assert_eq!(
        render("(head {1 2"),
        "<stdin>:1:7: error: unclosed delimiter '{'\n(head {1 2\n      ^"
    );
}

#[test]
fn test_second_line() {
    assert_eq!(
        render("(+ 1\n  2 $)"),
        "<stdin>:2:5: error: unexpected character '$'\n  2 $)\n    ^"
    );
}

#[test]
fn test_unexpected_close_at_start() {
    assert_eq!(
        render(")"),
        "<stdin>:1:1: error: unexpected closing delimiter ')'\n)\n^"
    );
}

#[test]
fn test_source_name_is_used() {
    let source = "(1 2}";
    let err = parse(source).unwrap_err();
    let text = render_parse_error("demo.lspy", source, &err);
    assert_eq!(
        text,
        "demo.lspy:1:5: error: mismatched closing delimiter: expected ')', found '}'\n(1 2}\n    ^"
    );
}
