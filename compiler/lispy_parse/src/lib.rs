//! Lispy Parse - turns source text into a generic syntax tree.
//!
//! # Grammar
//!
//! ```text
//! number  : /-?[0-9]+/
//! symbol  : /[a-zA-Z0-9_+\-*\/\\=<>!&]+/
//! sexpr   : '(' <expr>* ')'
//! qexpr   : '{' <expr>* '}'
//! expr    : <number> | <symbol> | <sexpr> | <qexpr>
//! program : <expr>*
//! ```
//!
//! Lexing uses longest match: `-5` is a number, `-5x` and `-` are symbols.
//!
//! # Output
//!
//! [`parse`] returns a [`lispy_ir::SyntaxNode`] rooted at a `Program` node.
//! Group nodes keep their delimiters as `Punct` children.

mod error;
mod lexer;
mod parser;

pub use error::ParseError;
pub use lexer::{lex, Token, TokenKind};
pub use parser::parse;
