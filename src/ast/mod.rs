//! AST module for SCSS expression trees
//!
//! This module provides the node model consumed and produced by the
//! normalization passes: a closed `Expr` sum type wrapped in `WithSpan`
//! so every node carries the upstream parser's position records.

// ============================================================================
// IMPORTS
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A single position record as produced by the upstream parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Cursor {
    pub cursor: usize,
    pub line: usize,
    pub column: usize,
}

/// Source position metadata of a node.
///
/// Passes never interpret it. Synthesized nodes copy it from the node that
/// owns them so later line reconciliation can still find them.
///
/// # Examples
///
/// ```rust
/// use scss_normalize::ast::{Cursor, Span};
/// let span = Span::new(Cursor { cursor: 0, line: 1, column: 1 }, Cursor { cursor: 5, line: 1, column: 6 });
/// assert_eq!(span.line(), Some(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Span {
    pub start: Option<Cursor>,
    pub next: Option<Cursor>,
}

/// Wrapper for carrying source span information with any value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithSpan<T> {
    pub value: T,
    pub span: Span,
}

/// Canonical tree node.
pub type Node = WithSpan<Expr>;

/// Leaf token kinds emitted by the upstream tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Identifier,
    Operator,
    Punctuation,
    Number,
    StringDouble,
    StringSingle,
    ColorHex,
    Variable,
    Atkeyword,
    Space,
    CommentSingleline,
    CommentMultiline,
}

/// Structural container kinds whose only payload is an ordered child list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    Stylesheet,
    Declaration,
    Property,
    Arguments,
    Parentheses,
    Block,
    Rule,
    Selector,
    Atrule,
    Interpolation,
    Class,
    Id,
    PseudoClass,
    PseudoElement,
    Attribute,
}

/// The core expression type.
///
/// # Examples
///
/// ```rust
/// use scss_normalize::ast::{Expr, NodeKind, TokenKind};
/// let expr = Expr::Token { kind: TokenKind::Identifier, text: "red".to_string() };
/// assert_eq!(expr.kind(), NodeKind::Token(TokenKind::Identifier));
/// assert_eq!(expr.pretty(), "red");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Right-hand side of a declaration.
    Value { tokens: Vec<Node>, is_default: bool },
    /// Function call: `children[0]` is the name, `children[1]` the argument list.
    /// `is_color` is set on calls to CSS color constructors.
    Function {
        children: Vec<Node>,
        #[serde(default)]
        is_color: bool,
    },
    /// Multi-token argument synthesized by argument grouping. Never empty.
    Group(Vec<Node>),
    Container {
        kind: ContainerKind,
        children: Vec<Node>,
    },
    Token { kind: TokenKind, text: String },
    Dimension { value: String, unit: String },
    Percentage(String),
    Boolean(bool),
    Null,
    /// Identifier naming a CSS color, such as `red`.
    NamedColor(String),
}

/// Flat tag identifying a node's semantic role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Value,
    Function,
    NodeGroup,
    Container(ContainerKind),
    Token(TokenKind),
    Dimension,
    Percentage,
    Boolean,
    Null,
    NamedColor,
}

// ============================================================================
// PUBLIC API IMPLEMENTATION
// ============================================================================

impl Span {
    pub fn new(start: Cursor, next: Cursor) -> Self {
        Span {
            start: Some(start),
            next: Some(next),
        }
    }

    /// Line of the start position, if known.
    pub fn line(&self) -> Option<usize> {
        self.start.map(|c| c.line)
    }
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Number => "number",
            TokenKind::StringDouble => "string_double",
            TokenKind::StringSingle => "string_single",
            TokenKind::ColorHex => "color_hex",
            TokenKind::Variable => "variable",
            TokenKind::Atkeyword => "atkeyword",
            TokenKind::Space => "space",
            TokenKind::CommentSingleline => "comment_singleline",
            TokenKind::CommentMultiline => "comment_multiline",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "identifier" => TokenKind::Identifier,
            "operator" => TokenKind::Operator,
            "punctuation" => TokenKind::Punctuation,
            "number" => TokenKind::Number,
            "string_double" => TokenKind::StringDouble,
            "string_single" => TokenKind::StringSingle,
            "color_hex" => TokenKind::ColorHex,
            "variable" => TokenKind::Variable,
            "atkeyword" => TokenKind::Atkeyword,
            "space" => TokenKind::Space,
            "comment_singleline" => TokenKind::CommentSingleline,
            "comment_multiline" => TokenKind::CommentMultiline,
            _ => return None,
        };
        Some(kind)
    }
}

impl ContainerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::Stylesheet => "stylesheet",
            ContainerKind::Declaration => "declaration",
            ContainerKind::Property => "property",
            ContainerKind::Arguments => "arguments",
            ContainerKind::Parentheses => "parentheses",
            ContainerKind::Block => "block",
            ContainerKind::Rule => "rule",
            ContainerKind::Selector => "selector",
            ContainerKind::Atrule => "atrule",
            ContainerKind::Interpolation => "interpolation",
            ContainerKind::Class => "class",
            ContainerKind::Id => "id",
            ContainerKind::PseudoClass => "pseudo_class",
            ContainerKind::PseudoElement => "pseudo_element",
            ContainerKind::Attribute => "attribute",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "stylesheet" => ContainerKind::Stylesheet,
            "declaration" => ContainerKind::Declaration,
            "property" => ContainerKind::Property,
            "arguments" => ContainerKind::Arguments,
            "parentheses" => ContainerKind::Parentheses,
            "block" => ContainerKind::Block,
            "rule" => ContainerKind::Rule,
            "selector" => ContainerKind::Selector,
            "atrule" => ContainerKind::Atrule,
            "interpolation" => ContainerKind::Interpolation,
            "class" => ContainerKind::Class,
            "id" => ContainerKind::Id,
            "pseudo_class" => ContainerKind::PseudoClass,
            "pseudo_element" => ContainerKind::PseudoElement,
            "attribute" => ContainerKind::Attribute,
            _ => return None,
        };
        Some(kind)
    }

    /// Selector components. The parser may give these a bare string
    /// payload instead of a child list.
    pub fn is_selector_part(&self) -> bool {
        matches!(
            self,
            ContainerKind::Class
                | ContainerKind::Id
                | ContainerKind::PseudoClass
                | ContainerKind::PseudoElement
                | ContainerKind::Attribute
        )
    }
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Value => "value",
            NodeKind::Function => "function",
            NodeKind::NodeGroup => "node_group",
            NodeKind::Container(kind) => kind.as_str(),
            NodeKind::Token(kind) => kind.as_str(),
            NodeKind::Dimension => "dimension",
            NodeKind::Percentage => "percentage",
            NodeKind::Boolean => "boolean",
            NodeKind::Null => "null",
            NodeKind::NamedColor => "named_color",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Expr {
    /// Returns the tag of this expression.
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Value { .. } => NodeKind::Value,
            Expr::Function { .. } => NodeKind::Function,
            Expr::Group(_) => NodeKind::NodeGroup,
            Expr::Container { kind, .. } => NodeKind::Container(*kind),
            Expr::Token { kind, .. } => NodeKind::Token(*kind),
            Expr::Dimension { .. } => NodeKind::Dimension,
            Expr::Percentage(_) => NodeKind::Percentage,
            Expr::Boolean(_) => NodeKind::Boolean,
            Expr::Null => NodeKind::Null,
            Expr::NamedColor(_) => NodeKind::NamedColor,
        }
    }

    /// True if this is a token of `kind` whose text is exactly `text`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scss_normalize::ast::{Expr, TokenKind};
    /// let comma = Expr::Token { kind: TokenKind::Punctuation, text: ",".to_string() };
    /// assert!(comma.is_token(TokenKind::Punctuation, ","));
    /// assert!(!comma.is_token(TokenKind::Operator, ","));
    /// ```
    pub fn is_token(&self, kind: TokenKind, text: &str) -> bool {
        matches!(self, Expr::Token { kind: k, text: t } if *k == kind && t == text)
    }

    /// Child list of nodes that hold one. Value tokens are not children.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Expr::Function { children, .. } | Expr::Container { children, .. } => {
                Some(children.as_slice())
            }
            Expr::Group(children) => Some(children.as_slice()),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Expr::Function { children, .. } | Expr::Container { children, .. } => Some(children),
            Expr::Group(children) => Some(children),
            _ => None,
        }
    }

    /// Pretty-prints the expression as a compact string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scss_normalize::ast::builder::{ident, number, value};
    /// let expr = value(vec![number("1"), ident("px")]);
    /// assert_eq!(expr.value.pretty(), "1 px");
    /// ```
    pub fn pretty(&self) -> String {
        match self {
            Expr::Value { tokens, is_default } => {
                let body = Self::pretty_seq(tokens, " ");
                match (*is_default, body.is_empty()) {
                    (true, true) => "!default".to_string(),
                    (true, false) => format!("{} !default", body),
                    (false, _) => body,
                }
            }
            Expr::Function { children, .. } => Self::pretty_call(children),
            Expr::Group(children) => format!("({})", Self::pretty_seq(children, " ")),
            Expr::Container { kind, children } => Self::pretty_container(*kind, children),
            Expr::Token { kind, text } => Self::pretty_token(*kind, text),
            Expr::Dimension { value, unit } => format!("{}{}", value, unit),
            Expr::Percentage(value) => format!("{}%", value),
            Expr::Boolean(b) => b.to_string(),
            Expr::Null => "null".to_string(),
            Expr::NamedColor(name) => name.clone(),
        }
    }

    // ------------------------------------------------------------------------
    // Pretty-printing helpers
    // ------------------------------------------------------------------------

    fn pretty_seq(nodes: &[Node], sep: &str) -> String {
        nodes
            .iter()
            .map(|n| n.value.pretty())
            .collect::<Vec<_>>()
            .join(sep)
    }

    fn pretty_call(children: &[Node]) -> String {
        let name = children
            .first()
            .map(|n| n.value.pretty())
            .unwrap_or_default();
        let args = match children.get(1).and_then(|n| n.value.children()) {
            Some(args) => Self::pretty_seq(args, ", "),
            None => String::new(),
        };
        format!("{}({})", name, args)
    }

    fn pretty_container(kind: ContainerKind, children: &[Node]) -> String {
        match kind {
            ContainerKind::Arguments | ContainerKind::Parentheses => {
                format!("({})", Self::pretty_seq(children, " "))
            }
            ContainerKind::Block => format!("{{ {} }}", Self::pretty_seq(children, " ")),
            ContainerKind::Interpolation => format!("#{{{}}}", Self::pretty_seq(children, " ")),
            ContainerKind::Declaration => format!("{};", Self::pretty_seq(children, ": ")),
            ContainerKind::Class => format!(".{}", Self::pretty_seq(children, "")),
            ContainerKind::Id => format!("#{}", Self::pretty_seq(children, "")),
            ContainerKind::PseudoClass => format!(":{}", Self::pretty_seq(children, "")),
            ContainerKind::PseudoElement => format!("::{}", Self::pretty_seq(children, "")),
            ContainerKind::Attribute => format!("[{}]", Self::pretty_seq(children, "")),
            _ => Self::pretty_seq(children, " "),
        }
    }

    fn pretty_token(kind: TokenKind, text: &str) -> String {
        match kind {
            TokenKind::StringDouble => format!("\"{}\"", text),
            TokenKind::StringSingle => format!("'{}'", text),
            TokenKind::ColorHex => format!("#{}", text),
            TokenKind::Variable => format!("${}", text),
            TokenKind::Atkeyword => format!("@{}", text),
            TokenKind::CommentSingleline => format!("//{}", text),
            TokenKind::CommentMultiline => format!("/*{}*/", text),
            _ => text.to_string(),
        }
    }
}

impl WithSpan<Expr> {
    pub fn kind(&self) -> NodeKind {
        self.value.kind()
    }

    pub fn pretty(&self) -> String {
        self.value.pretty()
    }

    /// Returns the node with its span replaced.
    pub fn at(self, span: Span) -> Self {
        WithSpan {
            value: self.value,
            span,
        }
    }

    // ------------------------------------------------------------------------
    // Keyed child access
    // ------------------------------------------------------------------------

    /// The child of `kind`, addressable only while every child kind is
    /// unique among its siblings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scss_normalize::ast::builder::*;
    /// use scss_normalize::ast::NodeKind;
    /// let decl = declaration("gap", value(vec![number("4")]));
    /// assert_eq!(decl.child(NodeKind::Value).map(|v| v.pretty()), Some("4".to_string()));
    /// let pair = group(vec![ident("a"), ident("b")]);
    /// assert!(pair.child(pair.value.children().unwrap()[0].kind()).is_none());
    /// ```
    pub fn child(&self, kind: NodeKind) -> Option<&Node> {
        let children = self.value.children()?;
        let mut seen = HashSet::with_capacity(children.len());
        if !children.iter().all(|c| seen.insert(c.kind())) {
            return None;
        }
        children.iter().find(|c| c.kind() == kind)
    }

    /// Property side of a declaration.
    pub fn property(&self) -> Option<&Node> {
        self.child(NodeKind::Container(ContainerKind::Property))
    }

    /// Value side of a declaration.
    pub fn declared_value(&self) -> Option<&Node> {
        self.child(NodeKind::Value)
    }

    /// Name of the variable a declaration assigns, without the `$`.
    pub fn variable_name(&self) -> Option<&str> {
        match &self.property()?.child(NodeKind::Token(TokenKind::Variable))?.value {
            Expr::Token { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }

    /// Name of a function call.
    pub fn function_name(&self) -> Option<&str> {
        match &self.value {
            Expr::Function { children, .. } => match &children.first()?.value {
                Expr::Token {
                    kind: TokenKind::Identifier,
                    text,
                } => Some(text.as_str()),
                _ => None,
            },
            _ => None,
        }
    }

    /// Argument entries of a function call.
    pub fn arguments(&self) -> Option<&[Node]> {
        match &self.value {
            Expr::Function { .. } => self
                .child(NodeKind::Container(ContainerKind::Arguments))?
                .value
                .children(),
            _ => None,
        }
    }

    pub fn selector(&self) -> Option<&Node> {
        self.child(NodeKind::Container(ContainerKind::Selector))
    }

    pub fn block(&self) -> Option<&Node> {
        self.child(NodeKind::Container(ContainerKind::Block))
    }
}

// ============================================================================
// MODULE EXPORTS
// ============================================================================

pub mod builder;
pub mod json;

#[cfg(test)]
mod tests {
    use super::builder::*;
    use super::*;

    #[test]
    fn test_kind_names_match_parser_types() {
        assert_eq!(NodeKind::NodeGroup.to_string(), "node_group");
        assert_eq!(NodeKind::Token(TokenKind::CommentMultiline).to_string(), "comment_multiline");
        assert_eq!(NodeKind::Container(ContainerKind::Arguments).to_string(), "arguments");
        for kind in [TokenKind::Identifier, TokenKind::ColorHex, TokenKind::Space] {
            assert_eq!(TokenKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(ContainerKind::from_name("value"), None);
    }

    #[test]
    fn test_pretty_function_and_default_value() {
        let call = function("mix", vec![variable("a"), comma(), variable("b")]);
        assert_eq!(call.pretty(), "mix($a, ,, $b)");

        let mut v = value(vec![color_hex("fff")]);
        if let Expr::Value { is_default, .. } = &mut v.value {
            *is_default = true;
        }
        assert_eq!(v.pretty(), "#fff !default");
    }

    #[test]
    fn test_structural_equality_includes_span() {
        let a = ident("x");
        let b = ident("x").at(Span::new(Cursor::default(), Cursor::default()));
        assert_ne!(a, b);
        assert_eq!(a, ident("x"));
    }

    #[test]
    fn test_keyed_access_on_declarations_and_calls() {
        let call = function("rgba", vec![ident("a"), comma(), ident("b")]);
        let decl = declaration("link", value(vec![call]));
        assert_eq!(decl.variable_name(), Some("link"));
        assert_eq!(decl.property().map(|p| p.pretty()), Some("$link".to_string()));

        let call = match &decl.declared_value().unwrap().value {
            Expr::Value { tokens, .. } => &tokens[0],
            _ => unreachable!(),
        };
        assert_eq!(call.function_name(), Some("rgba"));
        assert_eq!(call.arguments().map(<[Node]>::len), Some(3));
        assert!(decl.function_name().is_none());
        assert!(ident("x").child(NodeKind::Value).is_none());
    }

    #[test]
    fn test_keyed_access_requires_unique_kinds() {
        let twice = stylesheet(vec![
            declaration("a", value(vec![])),
            declaration("b", value(vec![])),
        ]);
        assert!(twice.child(NodeKind::Container(ContainerKind::Declaration)).is_none());

        let rule = container(
            ContainerKind::Rule,
            vec![
                container(ContainerKind::Selector, vec![container(ContainerKind::Class, vec![ident("nav")])]),
                container(ContainerKind::Block, vec![]),
            ],
        );
        assert_eq!(rule.selector().map(|s| s.pretty()), Some(".nav".to_string()));
        assert!(rule.block().is_some());
    }
}
