//! Normalization passes.
//!
//! A pass is a total `Node -> Node` rewrite built on the traversal engine.
//! Each pass is usable on its own; the pipeline only threads the root
//! through them in order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::ast::Node;
use crate::diagnostics::NormalizeResult;

pub mod arguments;
pub mod colors;
pub mod content;
pub mod defaults;
pub mod value_types;

pub use arguments::group_arguments;
pub use colors::{tag_color_constructors, tag_named_colors};
pub use content::{strip_nonsemantic, strip_punctuation};
pub use defaults::lift_defaults;
pub use value_types::{tag_dimensions, tag_immediate_types, TagDimensions};

/// A whole-tree normalization step.
pub trait Pass: Send + Sync {
    fn name(&self) -> &str;

    /// Consumes the tree and returns its normalized form.
    fn apply(&self, root: Node) -> NormalizeResult<Node>;
}

/// A native pass is a plain function over the whole tree.
///
/// # Examples
///
/// ```rust
/// use scss_normalize::passes::{FnPass, Pass};
/// use scss_normalize::ast::builder::ident;
/// let identity = FnPass::new("identity", |node| Ok(node));
/// assert_eq!(identity.apply(ident("a")).unwrap(), ident("a"));
/// ```
#[derive(Clone, Copy)]
pub struct FnPass {
    name: &'static str,
    func: fn(Node) -> NormalizeResult<Node>,
}

impl FnPass {
    pub fn new(name: &'static str, func: fn(Node) -> NormalizeResult<Node>) -> Self {
        FnPass { name, func }
    }
}

impl fmt::Debug for FnPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPass").field("name", &self.name).finish()
    }
}

impl Pass for FnPass {
    fn name(&self) -> &str {
        self.name
    }

    fn apply(&self, root: Node) -> NormalizeResult<Node> {
        (self.func)(root)
    }
}

/// Built-in passes, addressable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassName {
    StripNonsemantic,
    GroupArguments,
    StripPunctuation,
    LiftDefaults,
    TagDimensions,
    TagImmediateTypes,
    TagColorConstructors,
    TagNamedColors,
}

impl PassName {
    /// The standard cleanup order. Grouping must see the commas, so
    /// punctuation is stripped only after it.
    pub const STANDARD: [PassName; 8] = [
        PassName::StripNonsemantic,
        PassName::GroupArguments,
        PassName::StripPunctuation,
        PassName::LiftDefaults,
        PassName::TagDimensions,
        PassName::TagImmediateTypes,
        PassName::TagColorConstructors,
        PassName::TagNamedColors,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PassName::StripNonsemantic => "strip_nonsemantic",
            PassName::GroupArguments => "group_arguments",
            PassName::StripPunctuation => "strip_punctuation",
            PassName::LiftDefaults => "lift_defaults",
            PassName::TagDimensions => "tag_dimensions",
            PassName::TagImmediateTypes => "tag_immediate_types",
            PassName::TagColorConstructors => "tag_color_constructors",
            PassName::TagNamedColors => "tag_named_colors",
        }
    }

    /// Instantiates the pass. `extra_units` only affects `tag_dimensions`.
    pub fn build(&self, extra_units: &HashSet<String>) -> Box<dyn Pass> {
        match self {
            PassName::StripNonsemantic => Box::new(FnPass::new(self.as_str(), strip_nonsemantic)),
            PassName::GroupArguments => Box::new(FnPass::new(self.as_str(), group_arguments)),
            PassName::StripPunctuation => Box::new(FnPass::new(self.as_str(), strip_punctuation)),
            PassName::LiftDefaults => Box::new(FnPass::new(self.as_str(), lift_defaults)),
            PassName::TagDimensions => Box::new(TagDimensions::with_extra_units(
                extra_units.iter().cloned(),
            )),
            PassName::TagImmediateTypes => {
                Box::new(FnPass::new(self.as_str(), tag_immediate_types))
            }
            PassName::TagColorConstructors => {
                Box::new(FnPass::new(self.as_str(), tag_color_constructors))
            }
            PassName::TagNamedColors => Box::new(FnPass::new(self.as_str(), tag_named_colors)),
        }
    }
}

impl fmt::Display for PassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
