//! Normalization middle-end for SCSS expression trees.
//!
//! A parsed stylesheet tree goes in, a semantically normalized tree comes
//! out. Every pass is a post-order rewrite built on [`traverse`]:
//!
//! - `group_arguments` splits a call's flat comma-separated token list into
//!   one entry per argument, wrapping multi-token arguments in a
//!   `node_group`.
//! - `lift_defaults` turns trailing `! default` tokens of a value into its
//!   `is_default` flag.
//! - `strip_nonsemantic`, `strip_punctuation`, `tag_dimensions` and
//!   `tag_immediate_types` remove noise and type literal values.
//! - `tag_color_constructors` and `tag_named_colors` mark color values.
//!
//! ```rust
//! use scss_normalize::ast::builder::*;
//! use scss_normalize::normalize;
//!
//! let tree = declaration(
//!     "link",
//!     value(vec![
//!         function("mix", vec![variable("a"), comma(), number("10"), op("%")]),
//!         op("!"),
//!         ident("default"),
//!     ]),
//! );
//! let out = normalize(tree).unwrap();
//! assert_eq!(out.pretty(), "$link: mix($a, (10 %)) !default;");
//! ```

pub use crate::ast::{Expr, Node, NodeKind};
pub use crate::config::NormalizeConfig;
pub use crate::diagnostics::{NormalizeError, NormalizeResult};
pub use crate::passes::{Pass, PassName};
pub use crate::pipeline::{normalize, PassStep, Pipeline};

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod passes;
pub mod pipeline;
pub mod traverse;
