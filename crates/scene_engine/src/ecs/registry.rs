//! Entity identity allocation and active-flag bookkeeping

use super::entity::{Entity, EntityId};
use std::any::TypeId;
use std::collections::HashSet;

/// Per-entity bookkeeping record
#[derive(Debug, Default)]
struct Slot {
    alive: bool,
    active: bool,
    /// Component kinds currently attached, maintained by the scene facade
    kinds: HashSet<TypeId>,
}

/// Allocates entity identities and tracks their active flags
///
/// Identifiers are a monotonic counter, so an id is never handed out twice
/// within the registry's lifetime. `is_active` on a destroyed or unknown id
/// is `false`, never an error, which keeps the query engine branch-free.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    slots: Vec<Slot>,
}

impl EntityRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh identity, marked active
    pub fn create(&mut self) -> EntityId {
        let id = EntityId::new(self.slots.len() as u32);
        self.slots.push(Slot {
            alive: true,
            active: true,
            kinds: HashSet::new(),
        });
        id
    }

    /// Destroy an identity, returning the component kinds it held
    ///
    /// Idempotent: destroying an already-dead or unknown id returns an empty
    /// set and changes nothing.
    pub fn destroy(&mut self, id: EntityId) -> HashSet<TypeId> {
        match self.slots.get_mut(id.raw() as usize) {
            Some(slot) if slot.alive => {
                slot.alive = false;
                slot.active = false;
                std::mem::take(&mut slot.kinds)
            }
            _ => HashSet::new(),
        }
    }

    /// Whether the identity is currently allocated and not destroyed
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.slots
            .get(id.raw() as usize)
            .map_or(false, |slot| slot.alive)
    }

    /// Set the active flag; ignored for dead or unknown identities
    pub fn set_active(&mut self, id: EntityId, active: bool) {
        if let Some(slot) = self.slots.get_mut(id.raw() as usize) {
            if slot.alive {
                slot.active = active;
            }
        }
    }

    /// Active flag of the identity; `false` for destroyed or unknown ids
    pub fn is_active(&self, id: EntityId) -> bool {
        self.slots
            .get(id.raw() as usize)
            .map_or(false, |slot| slot.alive && slot.active)
    }

    /// Record that a component of the given kind was attached
    pub fn note_attached(&mut self, id: EntityId, kind: TypeId) {
        if let Some(slot) = self.slots.get_mut(id.raw() as usize) {
            if slot.alive {
                slot.kinds.insert(kind);
            }
        }
    }

    /// Record that a component of the given kind was detached
    pub fn note_detached(&mut self, id: EntityId, kind: TypeId) {
        if let Some(slot) = self.slots.get_mut(id.raw() as usize) {
            slot.kinds.remove(&kind);
        }
    }

    /// Number of live entities
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.alive).count()
    }

    /// Iterate over all live entities in allocation order
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.alive)
            .map(|(raw, slot)| Entity {
                id: EntityId::new(raw as u32),
                is_active: slot.active,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_entities_are_active_and_unique() {
        let mut registry = EntityRegistry::new();
        let a = registry.create();
        let b = registry.create();

        assert_ne!(a, b);
        assert!(registry.is_active(a));
        assert!(registry.is_active(b));
        assert_eq!(registry.live_count(), 2);
    }

    #[test]
    fn test_destroy_is_idempotent_and_deactivates() {
        let mut registry = EntityRegistry::new();
        let id = registry.create();
        registry.note_attached(id, TypeId::of::<u32>());

        let kinds = registry.destroy(id);
        assert_eq!(kinds.len(), 1);
        assert!(!registry.is_active(id));
        assert!(!registry.is_alive(id));

        // Second destroy reports nothing left to clear.
        assert!(registry.destroy(id).is_empty());
    }

    #[test]
    fn test_unknown_id_is_inactive_not_an_error() {
        let registry = EntityRegistry::new();
        assert!(!registry.is_active(EntityId::new(7)));
    }

    #[test]
    fn test_ids_are_not_reused_after_destroy() {
        let mut registry = EntityRegistry::new();
        let a = registry.create();
        registry.destroy(a);
        let b = registry.create();
        assert_ne!(a, b);
    }

    #[test]
    fn test_set_active_on_dead_entity_is_a_no_op() {
        let mut registry = EntityRegistry::new();
        let id = registry.create();
        registry.destroy(id);
        registry.set_active(id, true);
        assert!(!registry.is_active(id));
    }
}
