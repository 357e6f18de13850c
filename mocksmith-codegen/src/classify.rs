//! Member classification.
//!
//! Each member of a target is classified exactly once into a closed shape
//! enum; the synthesizer matches these exhaustively, so no type-shape checks
//! happen at emission time.

use mocksmith_ir::{GenerationBatch, Method, Property, SequenceKind, TypeId, TypeUniverse};

/// A batch target that can serve a nested property, with the declared type
/// either matched exactly or implemented structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NestedCandidate {
    pub target: TypeId,
    /// True when the candidate *is* the declared type; exact matches drive
    /// non-generic overloads, structural subtypes generic ones.
    pub exact: bool,
}

/// Shape of a property's declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// No recognized shape; direct setter only.
    Plain,
    /// Declared type is served by one or more batch targets.
    Nested { candidates: Vec<NestedCandidate> },
    /// Read-only sequence shape; `builders` lists the batch targets that can
    /// build elements (the element itself and/or its structural subtypes).
    Sequence {
        element: TypeId,
        builders: Vec<TypeId>,
    },
    /// Stack-only contiguous buffer shape, served by the secondary mock.
    Buffer {
        element: TypeId,
        /// Character elements additionally get a string-valued setter.
        char_element: bool,
    },
}

/// What to emit for an ordinary method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodPlan {
    /// Delegate-valued setter against the primary mock.
    Behavioral,
    /// No representable overload: some parameter is a stack-only buffer.
    Skip,
}

/// Classify a property's declared type against the current batch.
pub fn classify_property(
    universe: &TypeUniverse,
    batch: &GenerationBatch,
    property: &Property,
) -> Classification {
    if let Some(element) = buffer_element(universe, property.ty) {
        return Classification::Buffer {
            element,
            char_element: is_char(universe, element),
        };
    }
    if let Some(element) = sequence_element(universe, property.ty) {
        return Classification::Sequence {
            element,
            builders: batch.assignable_targets(universe, element),
        };
    }
    let candidates: Vec<NestedCandidate> = batch
        .assignable_targets(universe, property.ty)
        .into_iter()
        .map(|target| NestedCandidate {
            target,
            exact: target == property.ty,
        })
        .collect();
    if candidates.is_empty() {
        Classification::Plain
    } else {
        Classification::Nested { candidates }
    }
}

/// Classify an ordinary method.
pub fn classify_method(universe: &TypeUniverse, method: &Method) -> MethodPlan {
    let has_buffer_param = method
        .params
        .iter()
        .any(|param| buffer_element(universe, param.ty).is_some());
    if has_buffer_param {
        MethodPlan::Skip
    } else {
        MethodPlan::Behavioral
    }
}

/// Element type of a stack-only contiguous buffer shape, if `id` is one.
pub fn buffer_element(universe: &TypeUniverse, id: TypeId) -> Option<TypeId> {
    let data = universe.get(id);
    let buffer_name = matches!(data.name.as_str(), "Span" | "ReadOnlySpan");
    if data.ref_like && data.namespace == "System" && buffer_name && data.type_args.len() == 1 {
        Some(data.type_args[0])
    } else {
        None
    }
}

fn sequence_element(universe: &TypeUniverse, id: TypeId) -> Option<TypeId> {
    let data = universe.get(id);
    let sequence_name = SequenceKind::from_name(&data.name).is_some();
    if data.namespace == "System.Collections.Generic" && sequence_name && data.type_args.len() == 1
    {
        Some(data.type_args[0])
    } else {
        None
    }
}

fn is_char(universe: &TypeUniverse, id: TypeId) -> bool {
    let data = universe.get(id);
    data.namespace == "System" && data.name == "Char"
}

#[cfg(test)]
mod tests {
    use mocksmith_ir::{Param, PassingMode, TargetDescriptor};

    use super::*;

    fn batch_of(universe: &TypeUniverse, targets: &[TypeId]) -> GenerationBatch {
        GenerationBatch::new(
            targets.iter().copied().map(TargetDescriptor::new).collect(),
            universe,
        )
        .unwrap()
    }

    #[test]
    fn test_plain_property() {
        let mut universe = TypeUniverse::new();
        let string = universe.primitive("System", "String", "string");
        let thing = universe.interface("Lib", "IThing");
        universe.add_property(thing, "Name", string);
        let batch = batch_of(&universe, &[thing]);

        let property = &universe.get(thing).properties[0];
        assert_eq!(
            classify_property(&universe, &batch, property),
            Classification::Plain
        );
    }

    #[test]
    fn test_exact_nested_property() {
        let mut universe = TypeUniverse::new();
        let thing = universe.interface("Lib", "IThing");
        let other = universe.interface("Lib", "IOther");
        universe.add_property(thing, "Other", other);
        let batch = batch_of(&universe, &[thing, other]);

        let property = &universe.get(thing).properties[0];
        assert_eq!(
            classify_property(&universe, &batch, property),
            Classification::Nested {
                candidates: vec![NestedCandidate {
                    target: other,
                    exact: true
                }]
            }
        );
    }

    #[test]
    fn test_polymorphic_property_collects_every_subtype() {
        let mut universe = TypeUniverse::new();
        let thing = universe.interface("Lib", "IThing");
        let base = universe.interface("Lib", "IBase");
        let one = universe.interface("Lib", "IOne");
        let two = universe.interface("Lib", "ITwo");
        universe.add_base(one, base);
        universe.add_base(two, base);
        universe.add_property(thing, "Other", base);
        let batch = batch_of(&universe, &[thing, one, two]);

        let property = &universe.get(thing).properties[0];
        assert_eq!(
            classify_property(&universe, &batch, property),
            Classification::Nested {
                candidates: vec![
                    NestedCandidate {
                        target: one,
                        exact: false
                    },
                    NestedCandidate {
                        target: two,
                        exact: false
                    },
                ]
            }
        );
    }

    #[test]
    fn test_declared_target_and_subtype_both_serve() {
        let mut universe = TypeUniverse::new();
        let thing = universe.interface("Lib", "IThing");
        let base = universe.interface("Lib", "IBase");
        let derived = universe.interface("Lib", "IDerived");
        universe.add_base(derived, base);
        universe.add_property(thing, "Other", base);
        let batch = batch_of(&universe, &[thing, base, derived]);

        let property = &universe.get(thing).properties[0];
        let Classification::Nested { candidates } = classify_property(&universe, &batch, property)
        else {
            panic!("expected nested classification");
        };
        assert_eq!(
            candidates,
            vec![
                NestedCandidate {
                    target: base,
                    exact: true
                },
                NestedCandidate {
                    target: derived,
                    exact: false
                },
            ]
        );
    }

    #[test]
    fn test_sequence_property_resolves_element_builders() {
        let mut universe = TypeUniverse::new();
        let thing = universe.interface("Lib", "IThing");
        let other = universe.interface("Lib", "IOther");
        let seq = universe.sequence(SequenceKind::Enumerable, other);
        universe.add_property(thing, "Others", seq);
        let batch = batch_of(&universe, &[thing, other]);

        let property = &universe.get(thing).properties[0];
        assert_eq!(
            classify_property(&universe, &batch, property),
            Classification::Sequence {
                element: other,
                builders: vec![other]
            }
        );
    }

    #[test]
    fn test_sequence_of_plain_element_has_no_builders() {
        let mut universe = TypeUniverse::new();
        let string = universe.primitive("System", "String", "string");
        let thing = universe.interface("Lib", "IThing");
        let seq = universe.sequence(SequenceKind::ReadOnlyList, string);
        universe.add_property(thing, "Names", seq);
        let batch = batch_of(&universe, &[thing]);

        let property = &universe.get(thing).properties[0];
        assert_eq!(
            classify_property(&universe, &batch, property),
            Classification::Sequence {
                element: string,
                builders: Vec::new()
            }
        );
    }

    #[test]
    fn test_buffer_property_and_char_detection() {
        let mut universe = TypeUniverse::new();
        let ch = universe.primitive("System", "Char", "char");
        let int = universe.primitive("System", "Int32", "int");
        let thing = universe.interface("Lib", "IThing");
        let chars = universe.read_only_span(ch);
        let ints = universe.span(int);
        universe.add_property(thing, "Name", chars);
        universe.add_property(thing, "Data", ints);
        let batch = batch_of(&universe, &[thing]);

        let name = &universe.get(thing).properties[0];
        assert_eq!(
            classify_property(&universe, &batch, name),
            Classification::Buffer {
                element: ch,
                char_element: true
            }
        );
        let data = &universe.get(thing).properties[1];
        assert_eq!(
            classify_property(&universe, &batch, data),
            Classification::Buffer {
                element: int,
                char_element: false
            }
        );
    }

    #[test]
    fn test_method_with_buffer_param_is_skipped() {
        let mut universe = TypeUniverse::new();
        let int = universe.primitive("System", "Int32", "int");
        let void = universe.primitive("System", "Void", "void");
        let span = universe.span(int);

        let plain = mocksmith_ir::Method::new("Compute", int)
            .with_param(Param::new("seed", int).with_mode(PassingMode::Ref));
        let buffered = mocksmith_ir::Method::new("Fill", void).with_param(Param::new("data", span));

        assert_eq!(classify_method(&universe, &plain), MethodPlan::Behavioral);
        assert_eq!(classify_method(&universe, &buffered), MethodPlan::Skip);
    }
}
