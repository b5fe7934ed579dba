//! Typed query surface over the scene
//!
//! The read/query API every subsystem uses. Kind dispatch is static: the
//! component type parameter selects the storage column, so no common base
//! type and no runtime inspection of stored values is needed.
//!
//! Returned references borrow the scene; they cannot outlive it, and the
//! borrow checker rejects structural mutation of a kind while that kind is
//! being iterated. Passes that must mutate while enumerating snapshot the
//! entity list first ([`Scene::entity_snapshot`]).

use super::component::Component;
use super::entity::Entity;
use super::scene::Scene;
use crate::ecs::EntityId;

impl Scene {
    /// Direct component lookup, O(1) expected
    ///
    /// `None` is a lookup miss, not an error.
    pub fn get_component<T: Component>(&self, id: EntityId) -> Option<&T> {
        self.column::<T>()?.get(id)
    }

    /// Direct mutable component lookup, O(1) expected
    pub fn get_component_mut<T: Component>(&mut self, id: EntityId) -> Option<&mut T> {
        self.column_mut::<T>()?.get_mut(id)
    }

    /// Snapshot view of every stored component of one kind, in storage order
    pub fn all_components_of_type<T: Component>(&self) -> Vec<&T> {
        self.column::<T>()
            .map(|store| store.iter().map(|(_, value)| value).collect())
            .unwrap_or_default()
    }

    /// First component of the kind whose owning entity is active
    ///
    /// Storage-order scan; ties are broken by insertion order, not by any
    /// spatial or priority rule. Used for "the" camera or "the" directional
    /// light, where callers assume at most one is meaningful.
    pub fn first_active_component_of_type<T: Component>(&self) -> Option<&T> {
        let store = self.column::<T>()?;
        store
            .iter()
            .find(|(owner, _)| self.is_entity_active(*owner))
            .map(|(_, value)| value)
    }

    /// Visit every component of one kind, stopping when the visitor
    /// returns `true`
    pub fn for_each_of_type<T: Component>(&self, mut visitor: impl FnMut(&T) -> bool) {
        if let Some(store) = self.column::<T>() {
            store.for_each(|_, value| visitor(value));
        }
    }

    /// Visit every component of one kind mutably, stopping when the visitor
    /// returns `true`
    pub fn for_each_of_type_mut<T: Component>(&mut self, mut visitor: impl FnMut(&mut T) -> bool) {
        if let Some(store) = self.column_mut::<T>() {
            store.for_each_mut(|_, value| visitor(value));
        }
    }

    /// Visit every component of one kind together with its owning entity,
    /// stopping when the visitor returns `true`
    pub fn for_each_of_type_with_owner<T: Component>(
        &self,
        mut visitor: impl FnMut(EntityId, &T) -> bool,
    ) {
        if let Some(store) = self.column::<T>() {
            store.for_each(|owner, value| visitor(owner, value));
        }
    }

    /// Full-scene enumeration with early exit
    ///
    /// Exposes identity and active flag; composition filters ("has A and B")
    /// are expressed at the call site with nested [`Scene::get_component`]
    /// calls, trading per-frame lookup cost for zero bookkeeping when
    /// component combinations change every scene.
    pub fn for_each_entity(&self, mut visitor: impl FnMut(&Entity) -> bool) {
        for entity in self.entities() {
            if visitor(&entity) {
                break;
            }
        }
    }
}
