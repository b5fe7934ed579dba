//! Scene facade over the entity registry and per-kind component storage
//!
//! The scene owns all components; entities are opaque identities that merely
//! group them. Every subsystem consumes this facade, either through the
//! structural API here or through the typed query surface in
//! [`query`](super::query).

use super::component::Component;
use super::entity::{Entity, EntityId};
use super::registry::EntityRegistry;
use super::storage::{ComponentColumn, ComponentStore};
use std::any::TypeId;
use std::collections::HashMap;

/// The live set of entities and components for one loaded level
#[derive(Default)]
pub struct Scene {
    registry: EntityRegistry,
    columns: HashMap<TypeId, Box<dyn ComponentColumn>>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self {
            registry: EntityRegistry::new(),
            columns: HashMap::new(),
        }
    }

    /// Allocate a fresh entity, marked active
    pub fn generate_entity(&mut self) -> EntityId {
        self.registry.create()
    }

    /// Attach a component to an entity
    ///
    /// The kind is resolved statically from the value's type. At most one
    /// instance of a kind per entity: attaching a kind the entity already
    /// holds overwrites the previous value (last write wins). Attaching to a
    /// destroyed or unknown entity is ignored with a diagnostic.
    pub fn add_component<T: Component>(&mut self, id: EntityId, value: T) {
        if !self.registry.is_alive(id) {
            log::warn!(
                "ignoring component {} for dead entity {}",
                std::any::type_name::<T>(),
                id.raw()
            );
            return;
        }

        let column = self
            .columns
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(ComponentStore::<T>::new()) as Box<dyn ComponentColumn>);
        if let Some(store) = column.as_any_mut().downcast_mut::<ComponentStore<T>>() {
            store.insert(id, value);
            self.registry.note_attached(id, TypeId::of::<T>());
        }
    }

    /// Detach and return the component of the given kind, if present
    pub fn remove_component<T: Component>(&mut self, id: EntityId) -> Option<T> {
        let removed = self.column_mut::<T>()?.remove(id);
        if removed.is_some() {
            self.registry.note_detached(id, TypeId::of::<T>());
        }
        removed
    }

    /// Destroy an entity and every component attached to it
    ///
    /// All kinds are cleared before the call returns, so no query can
    /// observe a partial removal. Idempotent.
    pub fn destroy_entity(&mut self, id: EntityId) {
        for kind in self.registry.destroy(id) {
            if let Some(column) = self.columns.get_mut(&kind) {
                column.remove_entity(id);
            }
        }
    }

    /// Set the entity's active flag (soft-disable, not deletion)
    pub fn set_entity_active(&mut self, id: EntityId, active: bool) {
        self.registry.set_active(id, active);
    }

    /// Whether the entity is live and active; `false` for unknown ids
    pub fn is_entity_active(&self, id: EntityId) -> bool {
        self.registry.is_active(id)
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.registry.live_count()
    }

    /// Number of stored components of the given kind
    pub fn component_count<T: Component>(&self) -> usize {
        self.column::<T>().map_or(0, ComponentStore::len)
    }

    /// Iterate over all live entities in allocation order
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.registry.iter()
    }

    /// Snapshot of all live entities, for passes that mutate while walking
    pub fn entity_snapshot(&self) -> Vec<Entity> {
        self.registry.iter().collect()
    }

    pub(super) fn column<T: Component>(&self) -> Option<&ComponentStore<T>> {
        self.columns
            .get(&TypeId::of::<T>())
            .and_then(|column| column.as_any().downcast_ref::<ComponentStore<T>>())
    }

    pub(super) fn column_mut<T: Component>(&mut self) -> Option<&mut ComponentStore<T>> {
        self.columns
            .get_mut(&TypeId::of::<T>())
            .and_then(|column| column.as_any_mut().downcast_mut::<ComponentStore<T>>())
    }
}
