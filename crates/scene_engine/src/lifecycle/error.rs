//! Lifecycle error taxonomy
//!
//! Per-entity failures are isolated and never abort a scene load; per-scene
//! failures abort only that load attempt. Nothing here is process-fatal.
//! Query misses are `Option`s, not errors, and a missing long-lived
//! collaborator is a logged no-op rather than an error value.

use crate::physics::PhysicsError;
use thiserror::Error;

/// Errors that abort a scene load attempt
#[derive(Debug, Error)]
pub enum LoadError {
    /// The requested scene index does not exist; current state is untouched
    #[error("scene index {index} out of range ({count} scenes)")]
    OutOfRange {
        /// Requested index
        index: usize,
        /// Number of scenes in the manifest list
        count: usize,
    },

    /// Scene or physics-world allocation failed; the controller stays
    /// unloaded (the previous scene was already torn down)
    #[error("failed to allocate physics world: {0}")]
    Allocation(#[from] PhysicsError),
}

/// Failure of a single entity blueprint during scene construction
///
/// The entity is skipped with a diagnostic and the load continues.
#[derive(Debug, Error)]
pub enum ConstructionError {
    /// A named asset was not present in the catalog
    #[error("missing asset: {0}")]
    MissingAsset(String),

    /// The blueprint's own data was unusable
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),
}
