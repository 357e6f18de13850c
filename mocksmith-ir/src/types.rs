//! Core descriptor enums.

use serde::{Deserialize, Serialize};

/// Identity of a type inside a [`crate::TypeUniverse`].
///
/// Two descriptors refer to the same type exactly when their ids are equal;
/// names are display data, never identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Arena index of this id.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Kind of a described type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    /// Abstract interface shape; the only kind eligible as a generation target.
    Interface,
    /// Any other type (primitive, struct, class, delegate), treated opaquely.
    Value,
}

/// How a method parameter is passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassingMode {
    Value,
    Ref,
    Out,
    In,
}

impl PassingMode {
    /// The C# parameter modifier, if any.
    pub fn modifier(&self) -> Option<&'static str> {
        match self {
            PassingMode::Value => None,
            PassingMode::Ref => Some("ref"),
            PassingMode::Out => Some("out"),
            PassingMode::In => Some("in"),
        }
    }

    /// Returns true for `ref`, `out` and `in` parameters.
    pub fn is_by_reference(&self) -> bool {
        !matches!(self, PassingMode::Value)
    }
}

/// The three read-only sequence shapes recognized by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceKind {
    Enumerable,
    ReadOnlyCollection,
    ReadOnlyList,
}

impl SequenceKind {
    /// Simple name of the interface in `System.Collections.Generic`.
    pub fn interface_name(&self) -> &'static str {
        match self {
            SequenceKind::Enumerable => "IEnumerable",
            SequenceKind::ReadOnlyCollection => "IReadOnlyCollection",
            SequenceKind::ReadOnlyList => "IReadOnlyList",
        }
    }

    /// Recognize a sequence interface by its simple name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "IEnumerable" => Some(SequenceKind::Enumerable),
            "IReadOnlyCollection" => Some(SequenceKind::ReadOnlyCollection),
            "IReadOnlyList" => Some(SequenceKind::ReadOnlyList),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passing_mode_modifier() {
        assert_eq!(PassingMode::Value.modifier(), None);
        assert_eq!(PassingMode::Ref.modifier(), Some("ref"));
        assert_eq!(PassingMode::Out.modifier(), Some("out"));
        assert_eq!(PassingMode::In.modifier(), Some("in"));
    }

    #[test]
    fn test_passing_mode_is_by_reference() {
        assert!(!PassingMode::Value.is_by_reference());
        assert!(PassingMode::Ref.is_by_reference());
        assert!(PassingMode::Out.is_by_reference());
        assert!(PassingMode::In.is_by_reference());
    }

    #[test]
    fn test_sequence_kind_round_trip() {
        for kind in [
            SequenceKind::Enumerable,
            SequenceKind::ReadOnlyCollection,
            SequenceKind::ReadOnlyList,
        ] {
            assert_eq!(SequenceKind::from_name(kind.interface_name()), Some(kind));
        }
        assert_eq!(SequenceKind::from_name("IList"), None);
    }
}
