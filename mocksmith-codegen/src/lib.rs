//! Fluent mock-builder source generator.
//!
//! Given a [`mocksmith_ir::GenerationBatch`] of interface descriptors, the
//! [`Generator`] emits C# source text: fluent builder types that configure
//! Moq-backed mock objects, shared support definitions, and — for targets
//! with stack-only buffer properties — a substitute facade reconciling two
//! backing mocks.
//!
//! # Module Organization
//!
//! - [`classify`] - Member classification into a closed shape enum
//! - [`files`] - Shared support-definition emitters
//! - [`CodeBuilder`] / [`Indent`] - Indentation-aware text assembly
//! - [`BuilderRegistry`] - Identity-keyed builder naming cache
//! - [`Generator`] - The per-pass entry point

pub mod classify;
pub mod files;

mod code_builder;
mod generator;
mod indent;
mod naming;
mod options;
mod registry;
mod substitute;
mod target;

pub use code_builder::CodeBuilder;
pub use generator::{Generator, SourceSet, SourceUnit};
pub use indent::Indent;
pub use naming::{BuilderInfo, MOCKS_SEGMENT, support_namespace};
pub use options::{GeneratorOptions, MockBehavior};
pub use registry::BuilderRegistry;
