//! Lexer for Lispy using logos.

use lispy_ir::Span;
use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Outranks Symbol when both match the same text (`-5`, `42`).
    #[regex(r"-?[0-9]+", priority = 3)]
    Number,

    #[regex(r"[a-zA-Z0-9_+\-*/\\=<>!&]+")]
    Symbol,
}

/// Kind of a lexed token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LParen,
    RParen,
    LBrace,
    RBrace,
    Number,
    Symbol,
    /// A character outside the grammar.
    Error,
    Eof,
}

impl TokenKind {
    /// The delimiter character for bracket tokens.
    pub fn delimiter(self) -> Option<char> {
        match self {
            TokenKind::LParen => Some('('),
            TokenKind::RParen => Some(')'),
            TokenKind::LBrace => Some('{'),
            TokenKind::RBrace => Some('}'),
            _ => None,
        }
    }
}

/// A token with its location in the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// The source text this token covers.
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        source.get(self.span.to_range()).unwrap_or("")
    }
}

/// Lex source code into a token list terminated by `Eof`.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let span = Span::from_range(logos.span());
        let kind = match result {
            Ok(RawToken::LParen) => TokenKind::LParen,
            Ok(RawToken::RParen) => TokenKind::RParen,
            Ok(RawToken::LBrace) => TokenKind::LBrace,
            Ok(RawToken::RBrace) => TokenKind::RBrace,
            Ok(RawToken::Number) => TokenKind::Number,
            Ok(RawToken::Symbol) => TokenKind::Symbol,
            Err(()) => TokenKind::Error,
        };
        tokens.push(Token::new(kind, span));
    }

    let eof = Span::from_range(source.len()..source.len());
    tokens.push(Token::new(TokenKind::Eof, eof));
    tokens
}

#[cfg(test)]
mod tests;
