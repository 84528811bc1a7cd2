//! Serializability classification.
//!
//! Decides whether a type participates in the host's object-graph
//! serialization. Pure function of the type universe and the built-in set;
//! no side effects, no caching.

use crate::builtins::BuiltinSet;
use crate::universe::{TypeDef, TypeUniverse};

/// Classifier over a frozen universe and built-in set.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    universe: &'a TypeUniverse,
    builtins: &'a BuiltinSet,
}

impl<'a> Classifier<'a> {
    pub fn new(universe: &'a TypeUniverse, builtins: &'a BuiltinSet) -> Self {
        Self { universe, builtins }
    }

    /// Whether the named type is subject to the host's value serialization.
    ///
    /// The collection-unwrap rule is applied exactly once: arrays are judged
    /// by their element type, list-like generics by their single argument.
    /// A type that is still generic after unwrapping is categorically not
    /// serializable. Otherwise any of three rules qualifies it: built-in set
    /// membership (enumerations qualify through their base type), proper
    /// subclassing of the engine-object root, or presence of the marker
    /// attribute.
    pub fn is_serializable(&self, name: &str) -> bool {
        let target = self.universe.unwrap_collection(name);
        match self.universe.get(target) {
            Some(ty) => {
                if ty.shape.is_generic() {
                    return false;
                }
                self.builtins.covers(ty)
                    || self.universe.is_engine_subclass(target)
                    || self.has_marker(ty)
            }
            // Types outside the universe (foreign assemblies the loading
            // stage did not decode) qualify only through the built-in set.
            None => self.builtins.contains(target),
        }
    }

    /// Marker attributes are matched on the full declared identity of the
    /// attribute type, never on its short name.
    fn has_marker(&self, ty: &TypeDef) -> bool {
        ty.attributes
            .iter()
            .any(|attr| attr == self.universe.marker_attribute())
    }
}
