//! Pipeline configuration.
//!
//! ```yaml
//! passes: [strip_nonsemantic, group_arguments, lift_defaults]
//! extra_units: [fr]
//! ```
//!
//! Missing keys take their defaults: the standard pass order and no extra
//! units.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::diagnostics::NormalizeResult;
use crate::passes::PassName;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizeConfig {
    /// Passes to run, in order.
    pub passes: Vec<PassName>,
    /// Units recognized by `tag_dimensions` on top of the CSS ones.
    pub extra_units: Vec<String>,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        NormalizeConfig {
            passes: PassName::STANDARD.to_vec(),
            extra_units: Vec::new(),
        }
    }
}

impl NormalizeConfig {
    pub fn from_json_str(src: &str) -> NormalizeResult<Self> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn from_yaml_str(src: &str) -> NormalizeResult<Self> {
        Ok(serde_yaml::from_str(src)?)
    }

    pub fn extra_unit_set(&self) -> HashSet<String> {
        self.extra_units.iter().cloned().collect()
    }
}
