//! Entity identity

/// Opaque entity identifier
///
/// Unique within one [`Scene`](crate::ecs::Scene)'s lifetime; identifiers are
/// never reused until the scene is torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    /// Create a new entity identifier with the given raw value
    pub(crate) fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw identifier value
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// An entity as seen by full-scene enumeration
///
/// Carries the identity plus the activation flag; inactive entities are
/// excluded from "active" queries but remain present for direct lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entity {
    /// Entity identifier
    pub id: EntityId,
    /// Whether the entity participates in "active" queries
    pub is_active: bool,
}
