//! The built-in serializable value-type set.
//!
//! The host serializer accepts a fixed collection of primitive value types
//! plus a host-supplied extension set (geometric/color value types loaded
//! from the engine's own assemblies). The set is assembled once before graph
//! construction and handed to the classifier by shared reference - there is
//! no process-wide mutable state.

use crate::universe::TypeDef;
use std::collections::HashSet;

/// Base type every enumeration inherits in the host metadata model.
pub const ENUM_BASE: &str = "System.Enum";

/// Primitive value types the host serializer always accepts.
const STANDARD: &[&str] = &[
    "System.SByte",
    "System.Byte",
    "System.Int16",
    "System.UInt16",
    "System.Int32",
    "System.UInt32",
    "System.Int64",
    "System.UInt64",
    "System.Boolean",
    "System.Single",
    "System.Double",
    "System.Char",
    "System.String",
];

/// Set of type identities the serializer treats as built-in values.
#[derive(Debug, Clone, Default)]
pub struct BuiltinSet {
    names: HashSet<String>,
}

impl BuiltinSet {
    /// The standard primitive set, before host extensions.
    pub fn standard() -> Self {
        Self {
            names: STANDARD.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// An empty set, useful for universes that spell out every member.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends host-supplied value types. Call before analysis begins; the
    /// set is read-only once the classifier holds it.
    pub fn extend(&mut self, names: impl IntoIterator<Item = impl Into<String>>) {
        self.names.extend(names.into_iter().map(Into::into));
    }

    /// Membership by type identity.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Whether a type record qualifies as a built-in value: its own identity
    /// is in the set, or it is an enumeration (direct inheritor of the enum
    /// base type, as every enum appears in the host metadata).
    pub fn covers(&self, ty: &TypeDef) -> bool {
        self.names.contains(&ty.name) || ty.superclass.as_deref() == Some(ENUM_BASE)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_covers_primitives() {
        let set = BuiltinSet::standard();
        assert!(set.contains("System.Int32"));
        assert!(set.contains("System.String"));
        assert!(set.contains("System.Boolean"));
        assert!(!set.contains("Game.Stats"));
    }

    #[test]
    fn test_extend_adds_host_types() {
        let mut set = BuiltinSet::standard();
        set.extend(["Engine.Vector3", "Engine.Color"]);
        assert!(set.contains("Engine.Vector3"));
        assert!(set.contains("Engine.Color"));
    }

    #[test]
    fn test_covers_enumeration_via_base() {
        let set = BuiltinSet::standard();
        let damage_kind = TypeDef::new("Game.DamageKind").with_superclass(ENUM_BASE);
        assert!(set.covers(&damage_kind));

        let plain = TypeDef::new("Game.Stats");
        assert!(!set.covers(&plain));
    }

    #[test]
    fn test_covers_by_identity() {
        let mut set = BuiltinSet::empty();
        set.extend(["Engine.Vector2"]);
        let vec2 = TypeDef::new("Engine.Vector2");
        assert!(set.covers(&vec2));
    }
}
