//! Typed traversal engine.
//!
//! Every pass in this crate is a node-level rewrite lifted to the whole tree
//! by this module. The rewrite is post-order: a node's children, tokens and
//! group members are rebuilt first, then the node itself is offered to the
//! rewrite function. A node returned by the rewrite function is not visited
//! again.
//!
//! Nodes are moved through the traversal, so subtrees that no rewrite
//! touches are relocated rather than copied, and no caller can keep an
//! alias to a subtree it handed over.

use crate::ast::{Expr, Node, NodeKind, WithSpan};
use crate::diagnostics::NormalizeResult;

// =============================
// Public API
// =============================

/// Applies `f` to every node, children before parents.
pub fn map_deep<F>(node: Node, f: &mut F) -> NormalizeResult<Node>
where
    F: FnMut(Node) -> NormalizeResult<Node>,
{
    rewrite(node, &|_: NodeKind| true, f)
}

/// Applies `f` to every node of the given kind, children before parents.
///
/// Nodes of other kinds are rebuilt around their rewritten children and
/// otherwise left alone.
///
/// # Examples
///
/// ```rust
/// use scss_normalize::ast::{Expr, NodeKind, TokenKind};
/// use scss_normalize::ast::builder::{ident, value};
/// use scss_normalize::traverse::with_type;
///
/// let tree = value(vec![ident("a"), ident("b")]);
/// let upper = with_type(tree, NodeKind::Token(TokenKind::Identifier), &mut |mut n| {
///     if let Expr::Token { text, .. } = &mut n.value {
///         *text = text.to_uppercase();
///     }
///     Ok(n)
/// })
/// .unwrap();
/// assert_eq!(upper.pretty(), "A B");
/// ```
pub fn with_type<F>(node: Node, kind: NodeKind, f: &mut F) -> NormalizeResult<Node>
where
    F: FnMut(Node) -> NormalizeResult<Node>,
{
    rewrite(node, &|k: NodeKind| k == kind, f)
}

/// Post-order rewrite of `node`, invoking `f` on every node whose kind
/// satisfies `pred`.
///
/// Errors from `f` are returned unchanged and siblings not yet visited are
/// abandoned.
pub fn rewrite<P, F>(node: Node, pred: &P, f: &mut F) -> NormalizeResult<Node>
where
    P: Fn(NodeKind) -> bool,
    F: FnMut(Node) -> NormalizeResult<Node>,
{
    let WithSpan { value, span } = node;
    let rebuilt = match value {
        Expr::Value { tokens, is_default } => Expr::Value {
            tokens: map_nodes(tokens, pred, f)?,
            is_default,
        },
        Expr::Function { children, is_color } => Expr::Function {
            children: map_nodes(children, pred, f)?,
            is_color,
        },
        Expr::Group(children) => Expr::Group(map_nodes(children, pred, f)?),
        Expr::Container { kind, children } => Expr::Container {
            kind,
            children: map_nodes(children, pred, f)?,
        },
        // Leaves carry no nested nodes
        leaf @ (Expr::Token { .. }
        | Expr::Dimension { .. }
        | Expr::Percentage(_)
        | Expr::Boolean(_)
        | Expr::Null
        | Expr::NamedColor(_)) => leaf,
    };

    let node = WithSpan {
        value: rebuilt,
        span,
    };
    if pred(node.kind()) {
        f(node)
    } else {
        Ok(node)
    }
}

/// Removes every nested entry for which `keep` is false.
///
/// Filtering happens before descending, so a removed node's subtree is
/// never visited. The root itself is always kept.
pub fn filter_deep<K>(node: Node, keep: &K) -> Node
where
    K: Fn(&Node) -> bool,
{
    let WithSpan { value, span } = node;
    let value = match value {
        Expr::Value { tokens, is_default } => Expr::Value {
            tokens: filter_nodes(tokens, keep),
            is_default,
        },
        Expr::Function { children, is_color } => Expr::Function {
            children: filter_nodes(children, keep),
            is_color,
        },
        Expr::Group(children) => Expr::Group(filter_nodes(children, keep)),
        Expr::Container { kind, children } => Expr::Container {
            kind,
            children: filter_nodes(children, keep),
        },
        leaf => leaf,
    };
    WithSpan { value, span }
}

/// Number of nodes in the tree, root included.
pub fn count_nodes(node: &Node) -> usize {
    let nested = match &node.value {
        Expr::Value { tokens, .. } => tokens.as_slice(),
        Expr::Function { children, .. } | Expr::Container { children, .. } => children.as_slice(),
        Expr::Group(children) => children.as_slice(),
        _ => &[],
    };
    1 + nested.iter().map(count_nodes).sum::<usize>()
}

// =============================
// Internal helpers
// =============================

fn map_nodes<P, F>(nodes: Vec<Node>, pred: &P, f: &mut F) -> NormalizeResult<Vec<Node>>
where
    P: Fn(NodeKind) -> bool,
    F: FnMut(Node) -> NormalizeResult<Node>,
{
    nodes.into_iter().map(|n| rewrite(n, pred, f)).collect()
}

fn filter_nodes<K>(nodes: Vec<Node>, keep: &K) -> Vec<Node>
where
    K: Fn(&Node) -> bool,
{
    nodes
        .into_iter()
        .filter(|n| keep(n))
        .map(|n| filter_deep(n, keep))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builder::*;
    use crate::ast::TokenKind;
    use crate::malformed;

    fn nested_tree() -> Node {
        // f(g(h(x)))
        function("f", vec![function("g", vec![function("h", vec![ident("x")])])])
    }

    #[test]
    fn test_children_are_visited_before_parents() {
        let mut order = Vec::new();
        map_deep(nested_tree(), &mut |n| {
            order.push(n.pretty());
            Ok(n)
        })
        .unwrap();

        let pos = |s: &str| order.iter().position(|o| o == s).unwrap();
        assert!(pos("x") < pos("(x)"));
        assert!(pos("(x)") < pos("h(x)"));
        assert!(pos("h(x)") < pos("g(h(x))"));
        assert!(pos("g(h(x))") < pos("f(g(h(x)))"));
        assert_eq!(order.last().map(String::as_str), Some("f(g(h(x)))"));
    }

    #[test]
    fn test_each_node_visited_once() {
        let tree = nested_tree();
        let total = count_nodes(&tree);
        let mut visits = 0;
        map_deep(tree, &mut |n| {
            visits += 1;
            Ok(n)
        })
        .unwrap();
        assert_eq!(visits, total);
    }

    #[test]
    fn test_with_type_only_touches_matching_kind() {
        let tree = value(vec![ident("a"), op("+"), number("1")]);
        let mut seen = Vec::new();
        let out = with_type(tree.clone(), NodeKind::Token(TokenKind::Operator), &mut |n| {
            seen.push(n.kind());
            Ok(n)
        })
        .unwrap();
        assert_eq!(seen, vec![NodeKind::Token(TokenKind::Operator)]);
        assert_eq!(out, tree);
    }

    #[test]
    fn test_rewrite_error_abandons_remaining_siblings() {
        let tree = arguments(vec![ident("a"), ident("boom"), ident("c")]);
        let mut visited = Vec::new();
        let result = with_type(tree, NodeKind::Token(TokenKind::Identifier), &mut |n| {
            visited.push(n.pretty());
            if n.pretty() == "boom" {
                return Err(malformed!(n.kind(), "refused"));
            }
            Ok(n)
        });
        assert!(result.is_err());
        assert_eq!(visited, vec!["a", "boom"]);
    }

    #[test]
    fn test_filter_deep_keeps_root_and_prunes_nested() {
        let tree = space();
        assert_eq!(filter_deep(tree.clone(), &|_| false), tree);

        let tree = value(vec![ident("a"), space(), function("f", vec![space(), ident("b")])]);
        let out = filter_deep(tree, &|n| n.kind() != NodeKind::Token(TokenKind::Space));
        assert_eq!(out.pretty(), "a f(b)");
    }

    #[test]
    fn test_count_nodes_includes_value_tokens() {
        assert_eq!(count_nodes(&value(vec![ident("a"), ident("b")])), 3);
        assert_eq!(count_nodes(&function("f", vec![])), 3);
    }
}
