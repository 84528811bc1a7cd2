//! Builder pattern API for depth analysis.
//!
//! Provides a fluent interface for configuring and running a full check:
//!
//! ```rust,ignore
//! use nestcheck_core::prelude::*;
//!
//! let result = NestCheck::new(universe)
//!     .max_depth(8)
//!     .extend_builtins(["Engine.Vector3"])
//!     .analyze();
//!
//! for violation in &result.violations {
//!     println!("{:?}", violation.root());
//! }
//! ```

use crate::builtins::BuiltinSet;
use crate::graph::{build_graph, DependencyGraph};
use crate::root::find_root_types;
use crate::universe::TypeUniverse;
use crate::walk::{walk_from_roots, Violation, DEFAULT_MAX_DEPTH};

/// Builder for configuring a depth analysis run.
#[derive(Debug)]
pub struct NestCheck {
    universe: TypeUniverse,
    max_depth: usize,
    extra_builtins: Vec<String>,
    ignored_roots: Vec<String>,
}

impl NestCheck {
    /// Create an analysis builder over a frozen universe.
    pub fn new(universe: TypeUniverse) -> Self {
        Self {
            universe,
            max_depth: DEFAULT_MAX_DEPTH,
            extra_builtins: Vec::new(),
            ignored_roots: Vec::new(),
        }
    }

    /// Override the serialization depth bound.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Append host-supplied value types to the built-in serializable set.
    pub fn extend_builtins(
        mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.extra_builtins
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Add patterns for root types to skip.
    pub fn ignore_roots(
        mut self,
        patterns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.ignored_roots
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Run the analysis and return results.
    ///
    /// Classification, graph building and walking are total, so there is no
    /// error path here; fallible work (loading, config) happens before the
    /// builder is constructed.
    pub fn analyze(&self) -> AnalysisResult {
        // 1. Freeze the built-in set
        let mut builtins = BuiltinSet::standard();
        builtins.extend(self.extra_builtins.iter().cloned());

        // 2. Build the dependency graph over every serializable type
        let graph = build_graph(&self.universe, &builtins);

        // 3. Collect roots, minus ignored patterns
        let roots: Vec<String> = find_root_types(&self.universe, &graph)
            .into_iter()
            .filter(|name| !self.is_ignored(name))
            .collect();

        // 4. Walk each root to the bound
        let violations =
            walk_from_roots(roots.iter().map(String::as_str), self.max_depth, &graph);

        AnalysisResult {
            total_types: self.universe.len(),
            serializable_types: graph.len(),
            edge_count: graph.edge_count(),
            max_depth: self.max_depth,
            roots,
            violations,
            graph,
        }
    }

    /// Check if a root name matches any ignored pattern.
    fn is_ignored(&self, name: &str) -> bool {
        for pattern in &self.ignored_roots {
            if pattern.ends_with('*') {
                let prefix = &pattern[..pattern.len() - 1];
                if name.starts_with(prefix) {
                    return true;
                }
            } else if let Some(suffix) = pattern.strip_prefix('*') {
                if name.ends_with(suffix) {
                    return true;
                }
            } else if name == pattern || name.contains(pattern) {
                return true;
            }
        }
        false
    }
}

/// Result of running a depth analysis.
#[derive(Debug)]
pub struct AnalysisResult {
    /// Total number of type records in the universe
    pub total_types: usize,

    /// Types the classifier accepted (graph entries)
    pub serializable_types: usize,

    /// Total dependency edges across the graph
    pub edge_count: usize,

    /// Depth bound the walk used
    pub max_depth: usize,

    /// Traversal roots, in universe declaration order
    pub roots: Vec<String>,

    /// Every member chain that reached the bound
    pub violations: Vec<Violation>,

    /// The dependency graph (for DOT export and downstream tooling)
    pub graph: DependencyGraph,
}

impl AnalysisResult {
    /// Check if any violation was found.
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Number of offending chains.
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }
}
