//! Generic syntax tree.
//!
//! The parser produces a loosely-typed tree of tagged nodes: every node has
//! a [`NodeKind`], optional literal text, a span, and ordered children.
//! Group nodes keep their delimiter tokens as [`NodeKind::Punct`] children,
//! so the tree mirrors the input token-for-token. Consumers skip the
//! punctuation they do not care about.

use std::fmt::{self, Write as _};
use std::mem;

use crate::Span;

/// Tag of a syntax node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Root of a parsed input: the sequence of top-level expressions.
    Program,
    /// Integer literal, text is the literal as written.
    Number,
    /// Symbol, text is the name.
    Symbol,
    /// Parenthesized group `( ... )`.
    SExpr,
    /// Braced group `{ ... }`.
    QExpr,
    /// Structural delimiter token, text is the delimiter.
    Punct,
}

impl NodeKind {
    /// Short tag used when dumping a tree.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Program => "program",
            NodeKind::Number => "number",
            NodeKind::Symbol => "symbol",
            NodeKind::SExpr => "sexpr",
            NodeKind::QExpr => "qexpr",
            NodeKind::Punct => "punct",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the syntax tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub text: Option<String>,
    pub span: Span,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Create a leaf node carrying literal text.
    pub fn leaf(kind: NodeKind, text: impl Into<String>, span: Span) -> Self {
        SyntaxNode {
            kind,
            text: Some(text.into()),
            span,
            children: Vec::new(),
        }
    }

    /// Create an interior node.
    pub fn branch(kind: NodeKind, children: Vec<SyntaxNode>, span: Span) -> Self {
        SyntaxNode {
            kind,
            text: None,
            span,
            children,
        }
    }

    #[inline]
    pub fn number(text: impl Into<String>, span: Span) -> Self {
        Self::leaf(NodeKind::Number, text, span)
    }

    #[inline]
    pub fn symbol(text: impl Into<String>, span: Span) -> Self {
        Self::leaf(NodeKind::Symbol, text, span)
    }

    #[inline]
    pub fn punct(delim: char, span: Span) -> Self {
        Self::leaf(NodeKind::Punct, delim.to_string(), span)
    }

    /// Literal text, or the empty string for interior nodes.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Whether this node is a structural delimiter.
    #[inline]
    pub fn is_punct(&self) -> bool {
        self.kind == NodeKind::Punct
    }

    /// Children that carry meaning (delimiters filtered out).
    pub fn operands(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.children.iter().filter(|child| !child.is_punct())
    }

    /// Render the tree one node per line, indented by depth.
    ///
    /// ```text
    /// program 0..7
    ///   sexpr 0..7
    ///     punct "(" 0..1
    ///     symbol "+" 1..2
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut pending = vec![(self, 0)];
        while let Some((node, depth)) = pending.pop() {
            let _ = write!(out, "{:indent$}{}", "", node.kind, indent = depth * 2);
            if let Some(text) = &node.text {
                let _ = write!(out, " {text:?}");
            }
            let _ = writeln!(out, " {}", node.span);
            pending.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        }
        out
    }
}

impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
