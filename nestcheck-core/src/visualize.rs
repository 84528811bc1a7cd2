//! Graphviz DOT visualization for dependency graphs.
//!
//! Edges carry the field name that produces the hop, so a rendered graph
//! reads as "which member drags which type into the serialized blob".

use crate::graph::DependencyGraph;
use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Generate a Graphviz DOT representation of the dependency graph.
///
/// Nodes are type names; edge labels are field names. Edge targets outside
/// the graph (built-in value types) still get nodes so every hop is
/// visible. Node insertion is sorted by name for deterministic output.
pub fn generate_dot(graph: &DependencyGraph) -> String {
    let mut g: DiGraph<String, String> = DiGraph::new();
    let mut ids: HashMap<String, NodeIndex> = HashMap::new();

    let mut names: Vec<&str> = graph.types().collect();
    names.sort_unstable();

    for name in &names {
        let idx = g.add_node((*name).to_string());
        ids.insert((*name).to_string(), idx);
    }

    for name in &names {
        let Some(edges) = graph.edges_from(name) else {
            continue;
        };
        for edge in edges {
            let from = ids[&edge.from];
            let to = *ids
                .entry(edge.to.clone())
                .or_insert_with(|| g.add_node(edge.to.clone()));
            g.add_edge(from, to, edge.field.clone());
        }
    }

    format!("{}", Dot::new(&g))
}
