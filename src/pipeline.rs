//! Pipeline driver.
//!
//! Threads one tree through an ordered list of passes. Each run owns its
//! tree exclusively and the pipeline holds no per-run state, so a single
//! `Pipeline` can normalize independent trees on several threads at once.

use serde::Serialize;

use crate::ast::Node;
use crate::config::NormalizeConfig;
use crate::diagnostics::NormalizeResult;
use crate::passes::{Pass, PassName};
use crate::traverse::count_nodes;

/// Record of one pass application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassStep {
    pub pass: String,
    pub nodes_before: usize,
    pub nodes_after: usize,
}

#[derive(Default)]
pub struct Pipeline {
    passes: Vec<Box<dyn Pass>>,
}

impl Pipeline {
    /// An empty pipeline; running it returns the tree unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard cleanup sequence with the known CSS units.
    pub fn standard() -> Self {
        Self::from_config(&NormalizeConfig::default())
    }

    pub fn from_config(config: &NormalizeConfig) -> Self {
        let units = config.extra_unit_set();
        Pipeline {
            passes: config.passes.iter().map(|name| name.build(&units)).collect(),
        }
    }

    /// Appends a pass to the end of the sequence.
    pub fn with_pass<P: Pass + 'static>(mut self, pass: P) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    pub fn with_named(mut self, name: PassName) -> Self {
        self.passes.push(name.build(&Default::default()));
        self
    }

    pub fn pass_names(&self) -> Vec<&str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    /// Runs every pass in order; the first failure aborts the run.
    pub fn run(&self, root: Node) -> NormalizeResult<Node> {
        self.passes.iter().try_fold(root, |tree, pass| pass.apply(tree))
    }

    /// Like `run`, also recording the tree size around each pass.
    pub fn run_traced(&self, root: Node) -> NormalizeResult<(Node, Vec<PassStep>)> {
        let mut trace = Vec::with_capacity(self.passes.len());
        let mut tree = root;
        for pass in &self.passes {
            let nodes_before = count_nodes(&tree);
            tree = pass.apply(tree)?;
            trace.push(PassStep {
                pass: pass.name().to_string(),
                nodes_before,
                nodes_after: count_nodes(&tree),
            });
        }
        Ok((tree, trace))
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("passes", &self.pass_names())
            .finish()
    }
}

/// Normalizes `root` with the standard pipeline.
pub fn normalize(root: Node) -> NormalizeResult<Node> {
    Pipeline::standard().run(root)
}
