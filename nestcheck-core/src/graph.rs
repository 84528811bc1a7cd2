//! Dependency graph construction.
//!
//! Performance characteristics:
//! - Graph build: O(|T| + |F|) where T = types, F = declared fields
//! - Each type's edges depend only on its own fields, so the build is
//!   order-independent across types and fully deterministic
//!
//! The graph is a hand-rolled adjacency map rather than a `DiGraphMap`:
//! two fields of the same type produce two distinct labeled edges, and an
//! explicit empty entry ("serializable, no edges") must stay distinct from
//! a missing entry ("not serializable").

use crate::builtins::BuiltinSet;
use crate::classify::Classifier;
use crate::universe::TypeUniverse;
use serde::Serialize;
use std::collections::HashMap;

/// A directed, field-labeled dependency: an instance of `from` may directly
/// contain a serialized instance of `to` through `field`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyEdge {
    pub from: String,
    pub to: String,
    pub field: String,
}

/// Mapping from each serializable type to its outgoing edges, in field
/// declaration order.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    edges: HashMap<String, Vec<DependencyEdge>>,
}

impl DependencyGraph {
    /// Outgoing edges of a type. `None` means the type is not serializable;
    /// an empty slice means it is serializable but contributes no edges.
    pub fn edges_from(&self, name: &str) -> Option<&[DependencyEdge]> {
        self.edges.get(name).map(Vec::as_slice)
    }

    /// Whether the type has an entry (i.e. was classified serializable).
    pub fn contains(&self, name: &str) -> bool {
        self.edges.contains_key(name)
    }

    /// Iterates the types that have an entry. Unordered; callers that need
    /// determinism sort or go through the universe's declaration order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    /// Number of serializable types in the graph.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total number of edges across all entries.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

/// Builds the dependency graph over every serializable type in the universe.
///
/// For each accepted type, its instance fields are walked in declaration
/// order. A field contributes an edge unless it is explicitly excluded, its
/// unwrapped type is an engine-root subclass (such references are stored by
/// identity, not value-nested, so they never deepen the serialized graph),
/// or its unwrapped type is not serializable.
///
/// Every accepted type gets an entry, empty or not. The full universe is
/// available up front, so fields referencing types processed later resolve
/// the same as any other; there is no partial build and no error condition.
pub fn build_graph(universe: &TypeUniverse, builtins: &BuiltinSet) -> DependencyGraph {
    let classifier = Classifier::new(universe, builtins);
    let mut edges = HashMap::new();

    for ty in universe.iter() {
        if !classifier.is_serializable(&ty.name) {
            continue;
        }

        let mut outgoing = Vec::new();
        for field in &ty.fields {
            if field.excluded {
                continue;
            }
            let target = universe.unwrap_collection(&field.type_name);
            if universe.is_engine_subclass(target) {
                continue;
            }
            if !classifier.is_serializable(target) {
                continue;
            }
            outgoing.push(DependencyEdge {
                from: ty.name.clone(),
                to: target.to_string(),
                field: field.name.clone(),
            });
        }

        // Explicit entry even when empty: absence must keep meaning
        // "not serializable" during traversal.
        edges.insert(ty.name.clone(), outgoing);
    }

    DependencyGraph { edges }
}
