//! Error handling for the normalization pipeline.
//!
//! All failures produced by the traversal engine, the passes, parser-JSON
//! conversion and configuration loading are represented by `NormalizeError`.
//! Structural precondition failures are built with the `malformed!` macro:
//!
//! ```rust
//! use scss_normalize::{malformed, NormalizeError};
//! use scss_normalize::ast::NodeKind;
//! let err = malformed!(NodeKind::Function, "expected {} children, found {}", 2, 1);
//! assert!(matches!(err, NormalizeError::MalformedNode { .. }));
//! ```
//!
//! `MalformedNode` signals a bug in whatever produced the tree, not a
//! problem in the stylesheet; syntax errors are reported before the tree
//! reaches this crate.

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::NodeKind;

/// The canonical result type for every fallible operation in this crate.
pub type NormalizeResult<T> = Result<T, NormalizeError>;

#[derive(Error, Diagnostic, Debug)]
pub enum NormalizeError {
    #[error("malformed {kind} node: {reason}")]
    #[diagnostic(
        code(normalize::malformed_node),
        help("the input tree violates a structural invariant; this is an internal error in the tree producer")
    )]
    MalformedNode { kind: NodeKind, reason: String },

    #[error("unsupported node type '{node_type}'")]
    #[diagnostic(code(normalize::input::unsupported))]
    UnsupportedNode { node_type: String },

    #[error("invalid parser output: {message}")]
    #[diagnostic(code(normalize::input::invalid))]
    InvalidInput { message: String },

    #[error("invalid JSON document")]
    #[diagnostic(code(normalize::json))]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML document")]
    #[diagnostic(code(normalize::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl NormalizeError {
    /// Node kind involved in a structural failure, if any.
    pub fn node_kind(&self) -> Option<NodeKind> {
        match self {
            NormalizeError::MalformedNode { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Builds a `NormalizeError::MalformedNode` from a node kind and a format string.
#[macro_export]
macro_rules! malformed {
    ($kind:expr, $($arg:tt)+) => {
        $crate::diagnostics::NormalizeError::MalformedNode {
            kind: $kind,
            reason: format!($($arg)+),
        }
    };
}

/// Builds a `NormalizeError::InvalidInput` from a format string.
#[macro_export]
macro_rules! invalid_input {
    ($($arg:tt)+) => {
        $crate::diagnostics::NormalizeError::InvalidInput {
            message: format!($($arg)+),
        }
    };
}
