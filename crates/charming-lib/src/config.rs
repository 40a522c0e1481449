//! Resolver configuration.

use serde::{Deserialize, Serialize};

/// Which resolution strategy the façade uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Syntax tree only.
    Syntax,
    /// Lexical scan only. Never touches the parsing engine.
    Lexical,
    /// Syntax tree first, lexical scan when no node is found.
    #[default]
    Auto,
}

/// Subtree pruning during the node search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pruning {
    /// Skip subtrees ending before the target row or starting right of the
    /// target column. Can miss multi-line nodes.
    #[default]
    Heuristic,
    /// Visit every node.
    Exhaustive,
}

/// Bounds for the lexical fixpoint loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanLimits {
    /// Maximum fixpoint iterations (default: 512).
    pub(crate) max_iterations: u32,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            max_iterations: 512,
        }
    }
}

impl ScanLimits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the iteration cap.
    pub fn max_iterations(mut self, limit: u32) -> Self {
        self.max_iterations = limit;
        self
    }

    pub fn get_max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

/// Configuration for [`BoundaryResolver`](crate::BoundaryResolver).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    pub(crate) strategy: Strategy,
    pub(crate) pruning: Pruning,
    pub(crate) limits: ScanLimits,
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn limits(mut self, limits: ScanLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Shorthand for setting the scanner iteration cap.
    pub fn max_iterations(mut self, limit: u32) -> Self {
        self.limits = self.limits.max_iterations(limit);
        self
    }

    pub fn get_strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn get_pruning(&self) -> Pruning {
        self.pruning
    }

    pub fn get_limits(&self) -> ScanLimits {
        self.limits
    }
}
