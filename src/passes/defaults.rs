//! Default-flag lifting.
//!
//! The parser leaves `!default` as the last two tokens of a value
//! (`operator("!")`, `identifier("default")`). This pass strips them and
//! records the flag on the value node instead.

use crate::ast::{Expr, Node, NodeKind, TokenKind, WithSpan};
use crate::diagnostics::NormalizeResult;
use crate::traverse::with_type;

/// Lifts trailing `!default` tokens of every value node in the tree.
pub fn lift_defaults(root: Node) -> NormalizeResult<Node> {
    with_type(root, NodeKind::Value, &mut |node| Ok(lift_default(node)))
}

/// Lifts the flag of a single value node. Anything else is returned as is.
pub fn lift_default(node: Node) -> Node {
    match node.value {
        Expr::Value { mut tokens, .. } if ends_with_default(&tokens) => {
            tokens.truncate(tokens.len() - 2);
            WithSpan {
                value: Expr::Value {
                    tokens,
                    is_default: true,
                },
                span: node.span,
            }
        }
        value => WithSpan {
            value,
            span: node.span,
        },
    }
}

fn ends_with_default(tokens: &[Node]) -> bool {
    match tokens {
        [.., bang, default] => {
            bang.value.is_token(TokenKind::Operator, "!")
                && default.value.is_token(TokenKind::Identifier, "default")
        }
        _ => false,
    }
}
