//! Per-kind component storage
//!
//! Each component kind gets one densely packed collection of values plus a
//! mapping from entity identity to the value's location, so lookup,
//! insertion, and kind-wide iteration are all fast, and a kind absent from
//! the scene costs nothing.

use super::component::Component;
use super::entity::EntityId;
use std::any::Any;
use std::collections::HashMap;

/// Densely packed storage for one component kind
///
/// Values live in a contiguous vector with a parallel owner list; an index
/// map gives O(1) expected lookup by entity. Removal swap-removes, so
/// storage order is insertion order until the first removal.
pub struct ComponentStore<T: Component> {
    values: Vec<T>,
    owners: Vec<EntityId>,
    index: HashMap<EntityId, usize>,
}

impl<T: Component> Default for ComponentStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Component> ComponentStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            owners: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert or overwrite the value for the given entity (last write wins)
    pub fn insert(&mut self, id: EntityId, value: T) {
        if let Some(&slot) = self.index.get(&id) {
            self.values[slot] = value;
        } else {
            self.index.insert(id, self.values.len());
            self.owners.push(id);
            self.values.push(value);
        }
    }

    /// Look up the value for the given entity
    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.index.get(&id).map(|&slot| &self.values[slot])
    }

    /// Look up the value for the given entity, mutably
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        match self.index.get(&id) {
            Some(&slot) => self.values.get_mut(slot),
            None => None,
        }
    }

    /// Remove and return the value for the given entity, if present
    pub fn remove(&mut self, id: EntityId) -> Option<T> {
        let slot = self.index.remove(&id)?;
        let value = self.values.swap_remove(slot);
        self.owners.swap_remove(slot);
        // The swap moved the former tail into `slot`; repoint its index.
        if let Some(&moved) = self.owners.get(slot) {
            self.index.insert(moved, slot);
        }
        Some(value)
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(owner, value)` pairs in storage order
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.owners.iter().copied().zip(self.values.iter())
    }

    /// Visit every value in storage order, stopping when the visitor
    /// returns `true`
    pub fn for_each(&self, mut visitor: impl FnMut(EntityId, &T) -> bool) {
        for (owner, value) in self.iter() {
            if visitor(owner, value) {
                break;
            }
        }
    }

    /// Visit every value mutably in storage order, stopping when the
    /// visitor returns `true`
    pub fn for_each_mut(&mut self, mut visitor: impl FnMut(EntityId, &mut T) -> bool) {
        for (owner, value) in self.owners.iter().copied().zip(self.values.iter_mut()) {
            if visitor(owner, value) {
                break;
            }
        }
    }
}

/// Type-erased view of a [`ComponentStore`]
///
/// Lets the scene fan entity destruction out to every kind without knowing
/// the kinds statically.
pub(crate) trait ComponentColumn {
    /// Remove the value owned by the given entity; `true` if one existed
    fn remove_entity(&mut self, id: EntityId) -> bool;

    /// Number of stored values
    fn len(&self) -> usize;

    /// Downcast support
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcast support
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> ComponentColumn for ComponentStore<T> {
    fn remove_entity(&mut self, id: EntityId) -> bool {
        self.remove(id).is_some()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Health(u32);
    impl Component for Health {}

    fn id(raw: u32) -> EntityId {
        EntityId::new(raw)
    }

    #[test]
    fn test_insert_then_get() {
        let mut store = ComponentStore::new();
        store.insert(id(0), Health(10));
        store.insert(id(1), Health(20));

        assert_eq!(store.get(id(0)), Some(&Health(10)));
        assert_eq!(store.get(id(1)), Some(&Health(20)));
        assert_eq!(store.get(id(2)), None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_insert_overwrites_last_write_wins() {
        let mut store = ComponentStore::new();
        store.insert(id(0), Health(10));
        store.insert(id(0), Health(99));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id(0)), Some(&Health(99)));
    }

    #[test]
    fn test_remove_patches_swapped_index() {
        let mut store = ComponentStore::new();
        store.insert(id(0), Health(10));
        store.insert(id(1), Health(20));
        store.insert(id(2), Health(30));

        assert_eq!(store.remove(id(0)), Some(Health(10)));
        // The last value was swapped into slot 0; lookups must still hold.
        assert_eq!(store.get(id(2)), Some(&Health(30)));
        assert_eq!(store.get(id(1)), Some(&Health(20)));
        assert_eq!(store.get(id(0)), None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut store: ComponentStore<Health> = ComponentStore::new();
        assert_eq!(store.remove(id(5)), None);
    }

    #[test]
    fn test_for_each_early_exit() {
        let mut store = ComponentStore::new();
        for raw in 0..5 {
            store.insert(id(raw), Health(raw));
        }

        let mut visited = 0;
        store.for_each(|_, value| {
            visited += 1;
            value.0 == 2
        });
        assert_eq!(visited, 3);
    }

    #[test]
    fn test_for_each_mut_mutates_values() {
        let mut store = ComponentStore::new();
        store.insert(id(0), Health(1));
        store.insert(id(1), Health(2));

        store.for_each_mut(|_, value| {
            value.0 *= 10;
            false
        });

        assert_eq!(store.get(id(0)), Some(&Health(10)));
        assert_eq!(store.get(id(1)), Some(&Health(20)));
    }
}
