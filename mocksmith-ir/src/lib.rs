//! Type descriptor model for the mocksmith builder generator.
//!
//! This crate holds the resolved, immutable inputs of one generation pass:
//! the [`TypeUniverse`] arena of type descriptors, the member shapes declared
//! on them, and the [`GenerationBatch`] of targets marked for generation.
//!
//! # Architecture
//!
//! ```text
//! host discovery pass → DescriptorSet (JSON) → mocksmith-ir → mocksmith-codegen
//! ```
//!
//! The descriptors are designed to be:
//! - Identity-based (types reference each other through [`TypeId`], so
//!   self- and mutually-referencing interfaces work without lazy resolution)
//! - Immutable once a pass starts (the engine only reads)
//! - Host-neutral at the boundary (plain serde data, no compiler handles)

mod batch;
mod error;
mod input;
mod types;
mod universe;

pub use batch::{GenerationBatch, TargetDescriptor};
pub use error::{Error, Result};
pub use input::DescriptorSet;
pub use types::{PassingMode, SequenceKind, TypeId, TypeKind};
pub use universe::{Method, Param, Property, TypeData, TypeUniverse};
