//! Removal of entries that carry no meaning for analysis.

use crate::ast::{Expr, Node, TokenKind};
use crate::diagnostics::NormalizeResult;
use crate::traverse::filter_deep;

/// Removes whitespace and comment tokens at every depth.
pub fn strip_nonsemantic(root: Node) -> NormalizeResult<Node> {
    Ok(filter_deep(root, &is_semantic))
}

/// Removes punctuation tokens at every depth.
///
/// Run this only after argument grouping, which needs the commas.
pub fn strip_punctuation(root: Node) -> NormalizeResult<Node> {
    Ok(filter_deep(root, &|n: &Node| !is_punctuation(n)))
}

pub fn is_semantic(node: &Node) -> bool {
    !matches!(
        node.value,
        Expr::Token {
            kind: TokenKind::Space | TokenKind::CommentSingleline | TokenKind::CommentMultiline,
            ..
        }
    )
}

pub fn is_punctuation(node: &Node) -> bool {
    matches!(
        node.value,
        Expr::Token {
            kind: TokenKind::Punctuation,
            ..
        }
    )
}
