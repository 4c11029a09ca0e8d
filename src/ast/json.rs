//! Conversion from the upstream parser's JSON output.
//!
//! The parser emits objects of the form
//! `{ "type": "...", "value": ..., "start": {..}, "next": {..} }`.
//! An array `value` holds nested nodes (the tokens of a `value` node, the
//! children of everything else); a string or number `value` is token text.
//! Selector parts (`class`, `id`, `pseudo_class`, `pseudo_element`,
//! `attribute`) accept either form; a bare string becomes one identifier
//! child.

use serde::Deserialize;
use serde_json::Value as Json;

use crate::ast::{ContainerKind, Cursor, Expr, Node, Span, TokenKind, WithSpan};
use crate::diagnostics::{NormalizeError, NormalizeResult};
use crate::invalid_input;

/// Parses parser output text into a tree.
pub fn from_parser_str(src: &str) -> NormalizeResult<Node> {
    let json: Json = serde_json::from_str(src)?;
    from_parser_json(&json)
}

/// Converts one parser JSON object (and everything below it) into a node.
pub fn from_parser_json(json: &Json) -> NormalizeResult<Node> {
    let obj = json
        .as_object()
        .ok_or_else(|| invalid_input!("expected a node object, found {}", json))?;
    let node_type = obj
        .get("type")
        .and_then(Json::as_str)
        .ok_or_else(|| invalid_input!("node object without a \"type\" string"))?;
    let payload = obj.get("value");

    let value = match node_type {
        "value" => Expr::Value {
            tokens: nested(node_type, payload)?,
            is_default: false,
        },
        "function" => Expr::Function {
            children: nested(node_type, payload)?,
            is_color: false,
        },
        "node_group" => Expr::Group(nested(node_type, payload)?),
        other => {
            if let Some(kind) = ContainerKind::from_name(other) {
                let children = match payload {
                    Some(Json::String(name)) if kind.is_selector_part() => {
                        vec![WithSpan {
                            value: Expr::Token {
                                kind: TokenKind::Identifier,
                                text: name.clone(),
                            },
                            span: Span::default(),
                        }]
                    }
                    _ => nested(node_type, payload)?,
                };
                Expr::Container { kind, children }
            } else if let Some(kind) = TokenKind::from_name(other) {
                Expr::Token {
                    kind,
                    text: text(node_type, payload)?,
                }
            } else {
                return Err(NormalizeError::UnsupportedNode {
                    node_type: other.to_string(),
                });
            }
        }
    };

    Ok(WithSpan {
        value,
        span: Span {
            start: cursor(obj.get("start"))?,
            next: cursor(obj.get("next"))?,
        },
    })
}

fn nested(node_type: &str, payload: Option<&Json>) -> NormalizeResult<Vec<Node>> {
    match payload {
        None | Some(Json::Null) => Ok(Vec::new()),
        Some(Json::Array(items)) => items.iter().map(from_parser_json).collect(),
        Some(other) => Err(invalid_input!(
            "{} node expects an array value, found {}",
            node_type,
            other
        )),
    }
}

fn text(node_type: &str, payload: Option<&Json>) -> NormalizeResult<String> {
    match payload {
        Some(Json::String(s)) => Ok(s.clone()),
        Some(Json::Number(n)) => Ok(n.to_string()),
        None | Some(Json::Null) => Ok(String::new()),
        Some(other) => Err(invalid_input!(
            "{} token expects a string value, found {}",
            node_type,
            other
        )),
    }
}

fn cursor(json: Option<&Json>) -> NormalizeResult<Option<Cursor>> {
    match json {
        None | Some(Json::Null) => Ok(None),
        Some(pos) => Cursor::deserialize(pos)
            .map(Some)
            .map_err(|e| invalid_input!("bad position record {}: {}", pos, e)),
    }
}
