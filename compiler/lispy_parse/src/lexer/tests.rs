use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|t| t.kind).collect()
}

fn texts(source: &str) -> Vec<&str> {
    lex(source)
        .into_iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .map(|t| t.text(source))
        .collect()
}

#[test]
fn test_empty_input_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("   \n\t "), vec![TokenKind::Eof]);
}

#[test]
fn test_delimiters() {
    assert_eq!(
        kinds("( ) { }"),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_numbers() {
    assert_eq!(texts("1 42 -7"), vec!["1", "42", "-7"]);
    assert!(kinds("1 42 -7")[..3].iter().all(|k| *k == TokenKind::Number));
}

#[test]
fn test_operator_symbols() {
    for op in ["+", "-", "*", "/", "\\", "==", "<=", "!", "&&"] {
        assert_eq!(kinds(op), vec![TokenKind::Symbol, TokenKind::Eof], "{op}");
    }
}

#[test]
fn test_longest_match_prefers_symbol() {
    assert_eq!(kinds("-5x"), vec![TokenKind::Symbol, TokenKind::Eof]);
    assert_eq!(kinds("x1"), vec![TokenKind::Symbol, TokenKind::Eof]);
    assert_eq!(kinds("head_2"), vec![TokenKind::Symbol, TokenKind::Eof]);
}

#[test]
fn test_expression_tokens_and_spans() {
    let tokens = lex("(+ 1 {2})");
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::LParen, Span::new(0, 1)),
            Token::new(TokenKind::Symbol, Span::new(1, 2)),
            Token::new(TokenKind::Number, Span::new(3, 4)),
            Token::new(TokenKind::LBrace, Span::new(5, 6)),
            Token::new(TokenKind::Number, Span::new(6, 7)),
            Token::new(TokenKind::RBrace, Span::new(7, 8)),
            Token::new(TokenKind::RParen, Span::new(8, 9)),
            Token::new(TokenKind::Eof, Span::new(9, 9)),
        ]
    );
}

#[test]
fn test_invalid_character() {
    assert_eq!(
        kinds("(+ 1 $)"),
        vec![
            TokenKind::LParen,
            TokenKind::Symbol,
            TokenKind::Number,
            TokenKind::Error,
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_delimiter_chars() {
    assert_eq!(TokenKind::LBrace.delimiter(), Some('{'));
    assert_eq!(TokenKind::Symbol.delimiter(), None);
}
