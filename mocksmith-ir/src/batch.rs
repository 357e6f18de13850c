//! Generation targets and the per-pass batch.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, TypeId, TypeKind, TypeUniverse};

/// One type marked for builder generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDescriptor {
    pub type_id: TypeId,
    /// Member names excluded from generation.
    #[serde(default)]
    pub ignore: BTreeSet<String>,
}

impl TargetDescriptor {
    pub fn new(type_id: TypeId) -> Self {
        Self {
            type_id,
            ignore: BTreeSet::new(),
        }
    }

    pub fn with_ignored<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(names.into_iter().map(Into::into));
        self
    }
}

/// The ordered, duplicate-free set of targets for one generation pass.
///
/// The whole batch is threaded through every classification and synthesis
/// call, so a target's builder can resolve sibling targets regardless of
/// generation order; cycles between targets need no special handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationBatch {
    targets: Vec<TargetDescriptor>,
}

impl GenerationBatch {
    /// Validate and seal a batch: every target must be a distinct interface.
    pub fn new(targets: Vec<TargetDescriptor>, universe: &TypeUniverse) -> Result<Self> {
        let mut seen = Vec::new();
        for target in &targets {
            if target.type_id.index() >= universe.len() {
                return Err(Error::DanglingTypeId {
                    id: target.type_id.0,
                    len: universe.len(),
                });
            }
            if seen.contains(&target.type_id) {
                return Err(Error::DuplicateTarget {
                    name: universe.display_name(target.type_id),
                });
            }
            if universe.get(target.type_id).kind != TypeKind::Interface {
                return Err(Error::NotAnInterface {
                    name: universe.display_name(target.type_id),
                });
            }
            seen.push(target.type_id);
        }
        Ok(Self { targets })
    }

    pub fn targets(&self) -> &[TargetDescriptor] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Is this type itself being generated in this pass?
    pub fn contains(&self, id: TypeId) -> bool {
        self.targets.iter().any(|target| target.type_id == id)
    }

    /// Batch targets that can stand in for a declared type: the type itself
    /// when it is a target, and every other target transitively implementing
    /// it, in batch order.
    pub fn assignable_targets(&self, universe: &TypeUniverse, declared: TypeId) -> Vec<TypeId> {
        self.targets
            .iter()
            .map(|target| target.type_id)
            .filter(|id| *id == declared || universe.implements(*id, declared))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_duplicate_target() {
        let mut universe = TypeUniverse::new();
        let thing = universe.interface("Lib", "IThing");
        let result = GenerationBatch::new(
            vec![TargetDescriptor::new(thing), TargetDescriptor::new(thing)],
            &universe,
        );
        assert!(matches!(result, Err(Error::DuplicateTarget { .. })));
    }

    #[test]
    fn test_rejects_non_interface_target() {
        let mut universe = TypeUniverse::new();
        let string = universe.primitive("System", "String", "string");
        let result = GenerationBatch::new(vec![TargetDescriptor::new(string)], &universe);
        assert!(matches!(result, Err(Error::NotAnInterface { .. })));
    }

    #[test]
    fn test_rejects_dangling_target_id() {
        let universe = TypeUniverse::new();
        let result = GenerationBatch::new(vec![TargetDescriptor::new(TypeId(7))], &universe);
        assert!(matches!(result, Err(Error::DanglingTypeId { id: 7, .. })));
    }

    #[test]
    fn test_assignable_targets_exact_and_subtypes() {
        let mut universe = TypeUniverse::new();
        let base = universe.interface("Lib", "IBase");
        let one = universe.interface("Lib", "IOne");
        let two = universe.interface("Lib", "ITwo");
        let unrelated = universe.interface("Lib", "IUnrelated");
        universe.add_base(one, base);
        universe.add_base(two, base);

        let batch = GenerationBatch::new(
            vec![
                TargetDescriptor::new(base),
                TargetDescriptor::new(one),
                TargetDescriptor::new(two),
                TargetDescriptor::new(unrelated),
            ],
            &universe,
        )
        .unwrap();

        assert_eq!(batch.assignable_targets(&universe, base), vec![base, one, two]);
        assert_eq!(batch.assignable_targets(&universe, one), vec![one]);
        assert!(batch.contains(unrelated));
    }
}
