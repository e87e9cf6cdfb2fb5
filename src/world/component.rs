//! Sparse component storage
//!
//! Each gameplay concern (tag set, tracked variable, mover) lives in its own
//! `ComponentStorage<T>`, a sparse array keyed by entity index. Despawning an
//! entity clears its slot in every storage, so a populated slot always belongs
//! to a live entity. Queries lean on that: they scan a storage and rebuild
//! handles from slot indices without a liveness check per hit.

use super::entity::Entity;

/// Sparse storage for one component type.
///
/// `Option<T>` per slot so entities without the component leave holes.
/// Slots are addressed by entity index, never by generation.
pub struct ComponentStorage<T> {
    data: Vec<Option<T>>,
}

impl<T> ComponentStorage<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn ensure_capacity(&mut self, index: usize) {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
    }

    /// Attach a component to an entity, replacing any existing one.
    pub fn insert(&mut self, entity: Entity, component: T) {
        let idx = entity.index() as usize;
        self.ensure_capacity(idx);
        self.data[idx] = Some(component);
    }

    /// Detach and return an entity's component, if present.
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let idx = entity.index() as usize;
        if idx < self.data.len() {
            self.data[idx].take()
        } else {
            None
        }
    }

    pub fn get(&self, entity: Entity) -> Option<&T> {
        let idx = entity.index() as usize;
        self.data.get(idx).and_then(|opt| opt.as_ref())
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        let idx = entity.index() as usize;
        self.data.get_mut(idx).and_then(|opt| opt.as_mut())
    }

    /// Access by raw slot index. Used when walking one storage while
    /// holding references into another.
    pub fn get_at(&self, index: u32) -> Option<&T> {
        self.data.get(index as usize).and_then(|opt| opt.as_ref())
    }

    pub fn get_at_mut(&mut self, index: u32) -> Option<&mut T> {
        self.data.get_mut(index as usize).and_then(|opt| opt.as_mut())
    }

    pub fn contains(&self, entity: Entity) -> bool {
        let idx = entity.index() as usize;
        idx < self.data.len() && self.data[idx].is_some()
    }

    /// Iterate populated slots as (index, component) pairs, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.data
            .iter()
            .enumerate()
            .filter_map(|(idx, opt)| opt.as_ref().map(|c| (idx as u32, c)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (u32, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .filter_map(|(idx, opt)| opt.as_mut().map(|c| (idx as u32, c)))
    }

    /// Drop the component at a slot. Called on despawn so storages never
    /// carry data for dead entities.
    pub fn clear_slot(&mut self, index: u32) {
        let idx = index as usize;
        if idx < self.data.len() {
            self.data[idx] = None;
        }
    }

    /// Drop every component.
    pub fn clear(&mut self) {
        for slot in &mut self.data {
            *slot = None;
        }
    }

    /// Number of entities carrying this component.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|opt| opt.is_some()).count()
    }
}

impl<T> Default for ComponentStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}
