//! Entity-Component store and query engine
//!
//! Entities are opaque identities; components are typed values stored per
//! kind in densely packed columns. The [`Scene`] facade composes identity
//! allocation, storage, and the typed query surface consumed by every
//! per-frame subsystem.

pub mod component;
pub mod components;
pub mod entity;
pub mod query;
pub mod registry;
pub mod scene;
pub mod storage;

pub use component::Component;
pub use entity::{Entity, EntityId};
pub use registry::EntityRegistry;
pub use scene::Scene;
pub use storage::ComponentStore;

#[cfg(test)]
mod tests;
