//! Boundary validation errors.
//!
//! The synthesis core is total; every failure mode lives here, at the point
//! where a descriptor document crosses from the discovery front end into the
//! engine.

use thiserror::Error;

/// Result type for descriptor-boundary operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The interchange document is not valid JSON for the descriptor schema.
    #[error("failed to parse descriptor document")]
    Parse(#[from] serde_json::Error),

    /// A descriptor refers to a type id the universe does not contain.
    #[error("type id {id} is out of range (universe holds {len} types)")]
    DanglingTypeId { id: u32, len: usize },

    /// The same type appears twice in the generation batch.
    #[error("target `{name}` is listed more than once in the batch")]
    DuplicateTarget { name: String },

    /// A generation target must be an interface shape.
    #[error("target `{name}` is not an interface")]
    NotAnInterface { name: String },
}
