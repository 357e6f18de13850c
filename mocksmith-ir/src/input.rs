//! The interchange document handed over by the discovery front end.
//!
//! The front end scans host syntax for marker annotations, resolves them
//! against the host compiler's semantic model, and serializes the result as
//! one JSON document per generation pass. Parsing and validating that
//! document is the only fallible step before synthesis.

use serde::{Deserialize, Serialize};

use crate::{Error, GenerationBatch, Result, TargetDescriptor, TypeId, TypeUniverse};

/// One pass worth of descriptors: the full type universe plus the targets
/// marked for generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptorSet {
    pub universe: TypeUniverse,
    pub targets: Vec<TargetDescriptor>,
}

impl DescriptorSet {
    /// Parse and validate a JSON interchange document, yielding the read-only
    /// inputs of one generation pass.
    pub fn from_json(text: &str) -> Result<(TypeUniverse, GenerationBatch)> {
        let set: DescriptorSet = serde_json::from_str(text)?;
        set.into_inputs()
    }

    /// Validate an already-deserialized set.
    pub fn into_inputs(self) -> Result<(TypeUniverse, GenerationBatch)> {
        validate_ids(&self.universe)?;
        let batch = GenerationBatch::new(self.targets, &self.universe)?;
        Ok((self.universe, batch))
    }
}

fn validate_ids(universe: &TypeUniverse) -> Result<()> {
    let len = universe.len();
    let check = |id: TypeId| -> Result<()> {
        if id.index() >= len {
            Err(Error::DanglingTypeId { id: id.0, len })
        } else {
            Ok(())
        }
    };

    for data in universe.types() {
        for id in data.type_args.iter().chain(&data.implements) {
            check(*id)?;
        }
        for property in &data.properties {
            check(property.ty)?;
        }
        for method in &data.methods {
            check(method.return_type)?;
            for param in &method.params {
                check(param.ty)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_json() {
        let mut universe = TypeUniverse::new();
        let string = universe.primitive("System", "String", "string");
        let thing = universe.interface("ClassLibrary", "IMyInterface");
        universe.add_property(thing, "Name", string);

        let set = DescriptorSet {
            universe,
            targets: vec![TargetDescriptor::new(thing)],
        };
        let json = serde_json::to_string(&set).unwrap();

        let (universe, batch) = DescriptorSet::from_json(&json).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(universe.display_name(thing), "ClassLibrary.IMyInterface");
    }

    #[test]
    fn test_rejects_dangling_property_type() {
        let mut universe = TypeUniverse::new();
        let thing = universe.interface("Lib", "IThing");
        universe.add_property(thing, "Name", TypeId(42));

        let set = DescriptorSet {
            universe,
            targets: vec![TargetDescriptor::new(thing)],
        };
        assert!(matches!(
            set.into_inputs(),
            Err(Error::DanglingTypeId { id: 42, .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            DescriptorSet::from_json("{ not json"),
            Err(Error::Parse(_))
        ));
    }
}
