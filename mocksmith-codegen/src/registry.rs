//! Identity-keyed memo cache for builder naming.

use indexmap::IndexMap;
use mocksmith_ir::{TypeId, TypeUniverse};

use crate::BuilderInfo;

/// Maps a target type to its [`BuilderInfo`], computed once per type identity.
///
/// Keyed by [`TypeId`], never by name, so same-named types from different
/// namespaces stay distinct and every reference to one type (generation root,
/// nested property, sequence element) resolves identically. Entries live for
/// one generation pass.
#[derive(Debug, Default)]
pub struct BuilderRegistry {
    cache: IndexMap<TypeId, BuilderInfo>,
}

impl BuilderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Naming tuple for `target`, derived on first request and memoized.
    pub fn info(&mut self, universe: &TypeUniverse, target: TypeId) -> BuilderInfo {
        self.cache
            .entry(target)
            .or_insert_with(|| BuilderInfo::derive(universe, target))
            .clone()
    }

    /// Number of distinct types resolved so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memoizes_per_identity() {
        let mut universe = TypeUniverse::new();
        let thing = universe.interface("Lib", "IThing");
        let other = universe.interface("Other", "IThing");

        let mut registry = BuilderRegistry::new();
        let first = registry.info(&universe, thing);
        let second = registry.info(&universe, thing);
        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);

        // Same simple name, different identity: distinct entries.
        let foreign = registry.info(&universe, other);
        assert_eq!(registry.len(), 2);
        assert_eq!(first.builder_name, foreign.builder_name);
        assert_ne!(first.builder_full_name, foreign.builder_full_name);
    }
}
