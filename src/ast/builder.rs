//! # Node constructors
//!
//! One constructor per node kind. Every constructor produces a node with an
//! empty span; use `Node::at` to attach position records.

use crate::ast::{ContainerKind, Expr, Node, Span, TokenKind, WithSpan};

/// Wraps an expression with an empty span.
pub fn node(expr: Expr) -> Node {
    WithSpan {
        value: expr,
        span: Span::default(),
    }
}

pub fn token(kind: TokenKind, text: impl Into<String>) -> Node {
    node(Expr::Token {
        kind,
        text: text.into(),
    })
}

pub fn ident(text: impl Into<String>) -> Node {
    token(TokenKind::Identifier, text)
}

pub fn op(text: impl Into<String>) -> Node {
    token(TokenKind::Operator, text)
}

pub fn punct(text: impl Into<String>) -> Node {
    token(TokenKind::Punctuation, text)
}

/// The `,` argument separator.
pub fn comma() -> Node {
    punct(",")
}

pub fn number(text: impl Into<String>) -> Node {
    token(TokenKind::Number, text)
}

pub fn variable(name: impl Into<String>) -> Node {
    token(TokenKind::Variable, name)
}

pub fn color_hex(text: impl Into<String>) -> Node {
    token(TokenKind::ColorHex, text)
}

pub fn string_double(text: impl Into<String>) -> Node {
    token(TokenKind::StringDouble, text)
}

pub fn space() -> Node {
    token(TokenKind::Space, " ")
}

/// A `value` node with an unset default flag.
pub fn value(tokens: Vec<Node>) -> Node {
    node(Expr::Value {
        tokens,
        is_default: false,
    })
}

/// A function call whose argument list holds the given flat token stream.
pub fn function(name: impl Into<String>, args: Vec<Node>) -> Node {
    node(Expr::Function {
        children: vec![ident(name), arguments(args)],
        is_color: false,
    })
}

pub fn arguments(children: Vec<Node>) -> Node {
    container(ContainerKind::Arguments, children)
}

pub fn container(kind: ContainerKind, children: Vec<Node>) -> Node {
    node(Expr::Container { kind, children })
}

pub fn group(children: Vec<Node>) -> Node {
    node(Expr::Group(children))
}

/// `$name: <value>;` as the parser lays it out.
pub fn declaration(name: impl Into<String>, val: Node) -> Node {
    container(
        ContainerKind::Declaration,
        vec![container(ContainerKind::Property, vec![variable(name)]), val],
    )
}

pub fn stylesheet(children: Vec<Node>) -> Node {
    container(ContainerKind::Stylesheet, children)
}
