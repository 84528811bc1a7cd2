//! Root type discovery.
//!
//! The serializer starts from engine objects: every serializable type that
//! is a proper subclass of the engine-object root is a traversal root.

use crate::graph::DependencyGraph;
use crate::universe::TypeUniverse;

/// Collects the traversal roots, in universe declaration order.
///
/// A type qualifies when it has a graph entry (the classifier accepted it)
/// and properly subclasses the engine-object root. Declaration order keeps
/// reports deterministic across runs.
pub fn find_root_types(universe: &TypeUniverse, graph: &DependencyGraph) -> Vec<String> {
    universe
        .iter()
        .filter(|ty| graph.contains(&ty.name) && universe.is_engine_subclass(&ty.name))
        .map(|ty| ty.name.clone())
        .collect()
}
