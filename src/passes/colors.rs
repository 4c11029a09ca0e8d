//! Color tagging.
//!
//! Calls to the CSS color constructors get their `is_color` flag set, and
//! identifiers naming a CSS color become `named_color` leaves. Only entries
//! that sit directly in a value, a node group, an argument list or a
//! parenthesized list are considered, so function names, properties and
//! selectors are left alone.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::ast::{ContainerKind, Expr, Node, NodeKind, TokenKind, WithSpan};
use crate::diagnostics::NormalizeResult;
use crate::traverse::{rewrite, with_type};

static COLOR_CONSTRUCTORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color"]
        .into_iter()
        .collect()
});

/// CSS named colors, lowercase.
pub static NAMED_COLORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
        "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
        "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
        "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
        "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
        "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
        "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
        "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
        "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
        "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
        "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
        "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
        "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen",
        "magenta", "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
        "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
        "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
        "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid",
        "palegoldenrod", "palegreen", "paleturquoise", "palevioletred", "papayawhip",
        "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "rebeccapurple", "red",
        "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell",
        "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow",
        "springgreen", "steelblue", "tan", "teal", "thistle", "tomato", "transparent",
        "turquoise", "violet", "wheat", "white", "whitesmoke", "yellow", "yellowgreen",
    ]
    .into_iter()
    .collect()
});

/// Flags calls to `rgb`, `rgba`, `hsl` and the other color constructors.
pub fn tag_color_constructors(root: Node) -> NormalizeResult<Node> {
    with_type(root, NodeKind::Function, &mut |node| Ok(tag_constructor(node)))
}

/// Turns identifiers such as `red` or `RebeccaPurple` into named colors.
pub fn tag_named_colors(root: Node) -> NormalizeResult<Node> {
    rewrite(root, &holds_values, &mut |node| Ok(tag_entries(node)))
}

fn is_color_constructor(name: &str) -> bool {
    COLOR_CONSTRUCTORS.contains(name.to_ascii_lowercase().as_str())
}

fn tag_constructor(node: Node) -> Node {
    let constructor = node.function_name().is_some_and(is_color_constructor);
    let WithSpan { value, span } = node;
    let value = match value {
        Expr::Function { children, is_color } => Expr::Function {
            children,
            is_color: is_color || constructor,
        },
        other => other,
    };
    WithSpan { value, span }
}

fn holds_values(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::Value
            | NodeKind::NodeGroup
            | NodeKind::Container(ContainerKind::Arguments | ContainerKind::Parentheses)
    )
}

fn tag_entries(mut node: Node) -> Node {
    let entries = match &mut node.value {
        Expr::Value { tokens, .. } => Some(tokens),
        other => other.children_mut(),
    };
    for entry in entries.into_iter().flatten() {
        if let Expr::Token {
            kind: TokenKind::Identifier,
            text,
        } = &mut entry.value
        {
            if NAMED_COLORS.contains(text.to_ascii_lowercase().as_str()) {
                let name = std::mem::take(text);
                entry.value = Expr::NamedColor(name);
            }
        }
    }
    node
}
