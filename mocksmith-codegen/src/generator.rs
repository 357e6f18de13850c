//! The generation entry point.

use std::path::Path;

use eyre::Result;
use mocksmith_ir::{GenerationBatch, TypeUniverse};

use crate::{
    BuilderRegistry, GeneratorOptions,
    classify::{Classification, classify_property},
    files::{BuilderContract, ListBuilders, MockHelper, MockSettings, SubstituteContract},
    naming::support_namespace,
    target::TargetEmitter,
};

/// One named source blob, suitable for the host to register as additional
/// compiled source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Blob name: a support definition name, or the target's fully qualified
    /// name for per-target blobs.
    pub name: String,
    pub text: String,
}

impl SourceUnit {
    fn new(name: impl Into<String>, text: String) -> Self {
        Self {
            name: name.into(),
            text,
        }
    }
}

/// The complete output of one generation pass, in emission order: shared
/// support definitions first, then one unit per target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSet {
    units: Vec<SourceUnit>,
}

impl SourceSet {
    pub fn units(&self) -> &[SourceUnit] {
        &self.units
    }

    /// Look up a unit by blob name.
    pub fn get(&self, name: &str) -> Option<&SourceUnit> {
        self.units.iter().find(|unit| unit.name == name)
    }

    /// Write every unit as `{name}.cs` into `dir`, creating it if needed.
    /// A convenience for hosts and tests; pipeline registration is the
    /// host's concern.
    pub fn write_to(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;
        for unit in &self.units {
            std::fs::write(dir.join(format!("{}.cs", unit.name)), &unit.text)?;
        }
        Ok(())
    }
}

/// Builder-synthesis engine over one generation pass.
///
/// The whole batch stays visible to every classification and synthesis call,
/// so nested-target and polymorphic resolution work regardless of generation
/// order, including mutually recursive targets.
pub struct Generator<'a> {
    universe: &'a TypeUniverse,
    batch: &'a GenerationBatch,
    options: GeneratorOptions,
}

impl<'a> Generator<'a> {
    pub fn new(
        universe: &'a TypeUniverse,
        batch: &'a GenerationBatch,
        options: GeneratorOptions,
    ) -> Self {
        Self {
            universe,
            batch,
            options,
        }
    }

    /// Run the pass. Deterministic and idempotent: the same inputs produce
    /// byte-identical output.
    pub fn generate(&self) -> SourceSet {
        let support_ns = support_namespace(self.options.namespace_prefix.as_deref());
        let mut registry = BuilderRegistry::new();
        let mut units = Vec::new();

        units.push(SourceUnit::new(
            "IBuilder",
            BuilderContract::new(&support_ns).render(),
        ));
        units.push(SourceUnit::new(
            "ListBuilder",
            ListBuilders::new(&support_ns).render(),
        ));
        units.push(SourceUnit::new(
            "MockSettings",
            MockSettings::new(&support_ns, self.options.default_behavior).render(),
        ));
        if self.batch_has_buffers() {
            units.push(SourceUnit::new(
                "ISubstitute",
                SubstituteContract::new(&support_ns).render(),
            ));
            units.push(SourceUnit::new(
                "MockHelper",
                MockHelper::new(&support_ns).render(),
            ));
        }

        let mut emitter =
            TargetEmitter::new(self.universe, self.batch, &support_ns, &mut registry);
        for target in self.batch.targets() {
            units.push(SourceUnit::new(
                self.universe.display_name(target.type_id),
                emitter.render(target),
            ));
        }

        SourceSet { units }
    }

    /// Does any target in the batch declare a buffer-valued property?
    fn batch_has_buffers(&self) -> bool {
        self.batch.targets().iter().any(|target| {
            self.universe
                .all_properties(target.type_id, &target.ignore)
                .into_iter()
                .any(|property| {
                    matches!(
                        classify_property(self.universe, self.batch, property),
                        Classification::Buffer { .. }
                    )
                })
        })
    }
}
