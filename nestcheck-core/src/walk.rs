//! Depth-bounded path enumeration.
//!
//! Exhaustive depth-first traversal from a root type, reporting every path
//! that reaches the configured maximum depth. There is deliberately no
//! cycle detection and no memoization: a cyclic dependency simply keeps
//! accumulating edges until it hits the bound and gets reported, which is
//! exactly how unbounded self-referential nesting is detected. Cycles and
//! "merely too deep" chains are indistinguishable here, and both are unsafe
//! for the host's fixed-depth serializer.
//!
//! Worst case is exponential in branching factor x depth; the bound is
//! small (default 8) and enumerating every distinct offending chain is the
//! point.

use crate::graph::{DependencyEdge, DependencyGraph};
use serde::Serialize;

/// Depth bound the host serializer enforces.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// A member chain that reached the depth bound: exactly `max_depth` edges,
/// in root-to-leaf order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub chain: Vec<DependencyEdge>,
}

impl Violation {
    /// The root type the chain starts from, if the bound is nonzero.
    pub fn root(&self) -> Option<&str> {
        self.chain.first().map(|e| e.from.as_str())
    }

    /// Number of hops in the chain (always the configured bound).
    pub fn depth(&self) -> usize {
        self.chain.len()
    }
}

/// Walks from a single root and collects every chain that reaches
/// `max_depth` hops.
pub fn walk_from_root(root: &str, max_depth: usize, graph: &DependencyGraph) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut buffer = Vec::with_capacity(max_depth);
    visit(graph, root, 0, max_depth, &mut buffer, &mut violations);
    violations
}

/// Walks from each root in turn, concatenating the reports in root order.
pub fn walk_from_roots<'a>(
    roots: impl IntoIterator<Item = &'a str>,
    max_depth: usize,
    graph: &DependencyGraph,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut buffer = Vec::with_capacity(max_depth);
    for root in roots {
        visit(graph, root, 0, max_depth, &mut buffer, &mut violations);
    }
    violations
}

fn visit(
    graph: &DependencyGraph,
    ty: &str,
    depth: usize,
    max_depth: usize,
    buffer: &mut Vec<DependencyEdge>,
    violations: &mut Vec<Violation>,
) {
    if depth >= max_depth {
        // The path reached the bound; the buffer holds the full chain.
        violations.push(Violation {
            chain: buffer.clone(),
        });
        return;
    }

    // Edges only point at serializable types, so a lookup miss should not
    // happen for reachable nodes - but the walker stays total over any
    // graph shape. Missing entry or empty entry: the path terminates clean.
    let Some(edges) = graph.edges_from(ty) else {
        return;
    };

    for edge in edges {
        buffer.push(edge.clone());
        visit(graph, &edge.to, depth + 1, max_depth, buffer, violations);
        buffer.pop();
    }
}
