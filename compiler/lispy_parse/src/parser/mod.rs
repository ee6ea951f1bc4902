//! Recursive-descent parser over the token list.

use lispy_ir::{NodeKind, Span, SyntaxNode};
use lispy_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::lexer::{lex, Token, TokenKind};
use crate::ParseError;

/// Parse a complete input into a `Program` node.
///
/// An empty (or all-whitespace) input parses to a `Program` with no
/// children.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<SyntaxNode, ParseError> {
    let mut parser = Parser {
        source,
        tokens: lex(source),
        pos: 0,
    };
    parser.program()
}

struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Token {
        // The token list always ends with Eof and `pos` never passes it.
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .copied()
            .unwrap_or(Token::new(TokenKind::Eof, Span::DUMMY))
    }

    fn bump(&mut self) -> Token {
        let token = self.peek();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn program(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children = Vec::new();
        loop {
            let token = self.peek();
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::RParen | TokenKind::RBrace => {
                    return Err(ParseError::UnexpectedClose {
                        close: token.kind.delimiter().unwrap_or(')'),
                        span: token.span,
                    });
                }
                _ => children.push(self.expr()?),
            }
        }
        let span = Span::from_range(0..self.source.len());
        Ok(SyntaxNode::branch(NodeKind::Program, children, span))
    }

    /// Parse one expression. The caller guarantees the next token is
    /// neither `Eof` nor a closing delimiter.
    fn expr(&mut self) -> Result<SyntaxNode, ParseError> {
        let token = self.bump();
        let node = match token.kind {
            TokenKind::Number => SyntaxNode::number(token.text(self.source), token.span),
            TokenKind::Symbol => SyntaxNode::symbol(token.text(self.source), token.span),
            TokenKind::LParen => self.group(token, NodeKind::SExpr, ')')?,
            TokenKind::LBrace => self.group(token, NodeKind::QExpr, '}')?,
            TokenKind::Error => {
                let ch = token.text(self.source).chars().next().unwrap_or('\0');
                return Err(ParseError::UnexpectedChar {
                    ch,
                    span: token.span,
                });
            }
            TokenKind::RParen | TokenKind::RBrace | TokenKind::Eof => {
                return Err(ParseError::UnexpectedClose {
                    close: token.kind.delimiter().unwrap_or(')'),
                    span: token.span,
                });
            }
        };
        trace!(kind = %node.kind, span = %node.span, "parsed node");
        Ok(node)
    }

    fn group(
        &mut self,
        open: Token,
        kind: NodeKind,
        close: char,
    ) -> Result<SyntaxNode, ParseError> {
        ensure_sufficient_stack(|| {
            let open_char = open.kind.delimiter().unwrap_or('(');
            let mut children = vec![SyntaxNode::punct(open_char, open.span)];
            loop {
                let token = self.peek();
                match token.kind {
                    TokenKind::Eof => {
                        return Err(ParseError::UnclosedDelimiter {
                            open: open_char,
                            span: open.span,
                        });
                    }
                    TokenKind::RParen | TokenKind::RBrace => {
                        self.bump();
                        let found = token.kind.delimiter().unwrap_or(close);
                        if found != close {
                            return Err(ParseError::MismatchedDelimiter {
                                expected: close,
                                found,
                                span: token.span,
                            });
                        }
                        children.push(SyntaxNode::punct(found, token.span));
                        let span = open.span.merge(token.span);
                        return Ok(SyntaxNode::branch(kind, children, span));
                    }
                    _ => children.push(self.expr()?),
                }
            }
        })
    }
}
