//! Value typing: dimensions, percentages and immediate literals.
//!
//! The tokenizer emits `1px` as `number("1")` followed by
//! `identifier("px")`, and `50%` as `number("50")` followed by
//! `operator("%")`. These passes fold such pairs into single typed leaves and
//! turn the `true`, `false` and `null` identifiers into literals.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::ast::{Expr, Node, NodeKind, TokenKind, WithSpan};
use crate::diagnostics::NormalizeResult;
use crate::passes::Pass;
use crate::traverse::with_type;

/// CSS units recognized after a number.
pub static KNOWN_UNITS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // length
        "cap", "ic", "lh", "rcap", "rch", "rex", "ric", "rlh", "vb", "vi", "cqw", "cqh", "cqi",
        "cqmin", "cqmax", "Q", "rem", "em", "px", "pt", "pc", "cm", "mm", "in", "ex", "ch", "vw",
        "vh", "vmin", "vmax",
        // angle
        "deg", "grad", "rad", "turn",
        // time
        "s", "ms",
        // resolution
        "dpi", "dpcm", "dppx", "x",
        // frequency
        "Hz", "kHz",
    ]
    .into_iter()
    .collect()
});

/// Dimension and percentage detection inside value nodes.
#[derive(Debug, Clone, Default)]
pub struct TagDimensions {
    extra_units: HashSet<String>,
}

impl TagDimensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recognizes `units` in addition to the known CSS units.
    pub fn with_extra_units<I>(units: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        TagDimensions {
            extra_units: units.into_iter().collect(),
        }
    }

    pub fn is_unit(&self, text: &str) -> bool {
        KNOWN_UNITS.contains(text) || self.extra_units.contains(text)
    }

    /// Folds number/unit pairs in the tokens of one value node.
    pub fn tag_value(&self, node: Node) -> Node {
        let WithSpan { value, span } = node;
        let value = match value {
            Expr::Value { tokens, is_default } => Expr::Value {
                tokens: self.fold_tokens(tokens),
                is_default,
            },
            other => other,
        };
        WithSpan { value, span }
    }

    fn fold_tokens(&self, tokens: Vec<Node>) -> Vec<Node> {
        let mut out = Vec::with_capacity(tokens.len());
        let mut iter = tokens.into_iter().peekable();

        while let Some(token) = iter.next() {
            let folded = match (&token.value, iter.peek().map(|next| &next.value)) {
                (
                    Expr::Token {
                        kind: TokenKind::Number,
                        text: number,
                    },
                    Some(Expr::Token {
                        kind: TokenKind::Identifier,
                        text: unit,
                    }),
                ) if self.is_unit(unit) => Some(Expr::Dimension {
                    value: number.clone(),
                    unit: unit.clone(),
                }),
                (
                    Expr::Token {
                        kind: TokenKind::Number,
                        text: number,
                    },
                    Some(next),
                ) if next.is_token(TokenKind::Operator, "%") => {
                    Some(Expr::Percentage(number.clone()))
                }
                _ => None,
            };

            match folded {
                Some(expr) => {
                    iter.next();
                    out.push(WithSpan {
                        value: expr,
                        span: token.span,
                    });
                }
                None => out.push(token),
            }
        }
        out
    }
}

impl Pass for TagDimensions {
    fn name(&self) -> &str {
        "tag_dimensions"
    }

    fn apply(&self, root: Node) -> NormalizeResult<Node> {
        with_type(root, NodeKind::Value, &mut |node| Ok(self.tag_value(node)))
    }
}

/// Dimension detection with the known CSS units only.
pub fn tag_dimensions(root: Node) -> NormalizeResult<Node> {
    TagDimensions::new().apply(root)
}

/// Turns `true`, `false` and `null` identifiers into literals.
pub fn tag_immediate_types(root: Node) -> NormalizeResult<Node> {
    with_type(
        root,
        NodeKind::Token(TokenKind::Identifier),
        &mut |node| Ok(immediate_type(node)),
    )
}

fn immediate_type(node: Node) -> Node {
    let literal = match &node.value {
        Expr::Token { text, .. } => match text.as_str() {
            "true" => Some(Expr::Boolean(true)),
            "false" => Some(Expr::Boolean(false)),
            "null" => Some(Expr::Null),
            _ => None,
        },
        _ => None,
    };
    match literal {
        Some(value) => WithSpan {
            value,
            span: node.span,
        },
        None => node,
    }
}
