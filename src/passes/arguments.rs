//! Argument grouping.
//!
//! The parser hands function calls over with a flat argument list:
//! `f(a + b, c)` arrives as `[a, +, b, ",", c]`. This pass splits that list
//! at the commas into one entry per argument. Multi-token arguments are
//! wrapped in a `node_group`; single-token arguments are kept as they are.
//!
//! Empty argument slots (`f(a,,b)`, a leading or trailing comma) are
//! dropped rather than represented.

use crate::ast::{Expr, Node, NodeKind, Span, TokenKind, WithSpan};
use crate::diagnostics::NormalizeResult;
use crate::malformed;
use crate::traverse::with_type;

/// Groups the arguments of every function call in the tree.
///
/// Nested calls are grouped before the calls that contain them.
pub fn group_arguments(root: Node) -> NormalizeResult<Node> {
    with_type(root, NodeKind::Function, &mut group_function_arguments)
}

/// Groups the arguments of a single function node.
///
/// Fails with `MalformedNode` if the node has no argument list child or if
/// that child cannot hold children.
pub fn group_function_arguments(node: Node) -> NormalizeResult<Node> {
    let WithSpan { value, span } = node;
    let (mut children, is_color) = match value {
        Expr::Function { children, is_color } => (children, is_color),
        other => return Ok(WithSpan { value: other, span }),
    };

    if children.len() < 2 {
        return Err(malformed!(
            NodeKind::Function,
            "expected a name and an argument list, found {} child node(s)",
            children.len()
        ));
    }

    let arg_list = &mut children[1];
    let arg_kind = arg_list.kind();
    let Some(tokens) = arg_list.value.children_mut() else {
        return Err(malformed!(
            NodeKind::Function,
            "argument list is a {} node, which holds no children",
            arg_kind
        ));
    };
    let flat = std::mem::take(tokens);
    *tokens = split_arguments(flat, span);

    Ok(WithSpan {
        value: Expr::Function { children, is_color },
        span,
    })
}

/// Splits a flat token stream at `,` separators.
///
/// Groups take the span of the owning function, not of their first token.
pub fn split_arguments(flat: Vec<Node>, function_span: Span) -> Vec<Node> {
    let mut args = Vec::new();
    let mut current = Vec::new();

    for token in flat {
        if token.value.is_token(TokenKind::Punctuation, ",") {
            flush(&mut current, function_span, &mut args);
        } else {
            current.push(token);
        }
    }
    flush(&mut current, function_span, &mut args);

    args
}

fn flush(current: &mut Vec<Node>, span: Span, args: &mut Vec<Node>) {
    let mut members = std::mem::take(current);
    match members.len() {
        0 => {}
        1 => args.extend(members.pop()),
        _ => args.push(WithSpan {
            value: Expr::Group(members),
            span,
        }),
    }
}
