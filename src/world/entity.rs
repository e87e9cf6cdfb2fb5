//! Entity identifiers with generational indices
//!
//! Entities are lightweight handles into the world's component storages.
//! Each slot carries a generation counter: despawning an entity bumps the
//! generation, so stale handles held by gameplay code (a follow target, a
//! variable watcher) stop matching instead of silently pointing at whatever
//! entity reused the slot.

use serde::{Serialize, Deserialize};

/// A unique handle for a live entity.
///
/// Combines a slot index with the generation of that slot. Handles with the
/// same index but different generations refer to different entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    index: u32,
    generation: u32,
}

impl Entity {
    /// Only the allocator mints handles.
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index, used to address component storages.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// A null handle for "no entity" fields.
    pub const NULL: Entity = Entity { index: u32::MAX, generation: 0 };

    pub fn is_null(&self) -> bool {
        self.index == u32::MAX
    }
}

impl Default for Entity {
    fn default() -> Self {
        Entity::NULL
    }
}

/// Allocates entity slots and tracks their lifetimes.
///
/// Freed slots go on a LIFO free list and are reused with a bumped
/// generation, invalidating any handles minted for the previous occupant.
pub struct EntityAllocator {
    /// Current generation per slot
    generations: Vec<u32>,
    /// Slots available for reuse
    free_indices: Vec<u32>,
    /// Next never-used index
    next_fresh: u32,
    alive_count: u32,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self {
            generations: Vec::new(),
            free_indices: Vec::new(),
            next_fresh: 0,
            alive_count: 0,
        }
    }

    /// Allocate a fresh entity handle.
    pub fn allocate(&mut self) -> Entity {
        self.alive_count += 1;

        if let Some(index) = self.free_indices.pop() {
            // Generation was already bumped when the slot was freed
            Entity::new(index, self.generations[index as usize])
        } else {
            let index = self.next_fresh;
            self.next_fresh += 1;
            self.generations.push(0);
            Entity::new(index, 0)
        }
    }

    /// Free an entity, making its slot reusable.
    /// Returns false if the handle was already stale.
    pub fn free(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }

        self.generations[entity.index as usize] += 1;
        self.free_indices.push(entity.index);
        self.alive_count -= 1;
        true
    }

    /// Check whether a handle still refers to a live entity.
    pub fn is_alive(&self, entity: Entity) -> bool {
        if entity.is_null() {
            return false;
        }
        let idx = entity.index as usize;
        idx < self.generations.len() && self.generations[idx] == entity.generation
    }

    /// Current generation of a slot. Valid for any slot ever allocated.
    ///
    /// Used to rebuild handles while scanning component storages; storages
    /// only hold data for live entities, so the rebuilt handle is current.
    pub(crate) fn generation_at(&self, index: u32) -> u32 {
        self.generations[index as usize]
    }

    pub fn alive_count(&self) -> u32 {
        self.alive_count
    }

    /// Highest index ever allocated + 1.
    pub fn capacity(&self) -> u32 {
        self.next_fresh
    }

    /// Invalidate every handle and recycle all slots.
    pub fn clear(&mut self) {
        for gen in &mut self.generations {
            *gen += 1;
        }
        self.free_indices.clear();
        for i in 0..self.next_fresh {
            self.free_indices.push(i);
        }
        self.alive_count = 0;
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_and_free() {
        let mut alloc = EntityAllocator::new();

        let e1 = alloc.allocate();
        let e2 = alloc.allocate();
        assert_eq!(alloc.alive_count(), 2);
        assert!(alloc.is_alive(e1));
        assert!(alloc.is_alive(e2));

        alloc.free(e1);
        assert_eq!(alloc.alive_count(), 1);
        assert!(!alloc.is_alive(e1));
        assert!(alloc.is_alive(e2));
    }

    #[test]
    fn test_stale_handle_after_reuse() {
        let mut alloc = EntityAllocator::new();

        let e1 = alloc.allocate();
        let old_gen = e1.generation();
        alloc.free(e1);

        let e2 = alloc.allocate();
        assert_eq!(e2.index(), e1.index()); // Same slot
        assert_ne!(e2.generation(), old_gen); // New occupant

        assert!(!alloc.is_alive(e1));
        assert!(alloc.is_alive(e2));
    }

    #[test]
    fn test_double_free_is_rejected() {
        let mut alloc = EntityAllocator::new();
        let e = alloc.allocate();
        assert!(alloc.free(e));
        assert!(!alloc.free(e));
        assert_eq!(alloc.alive_count(), 0);
    }

    #[test]
    fn test_null_entity() {
        let alloc = EntityAllocator::new();
        assert!(!alloc.is_alive(Entity::NULL));
        assert!(Entity::NULL.is_null());
    }

    #[test]
    fn test_clear_invalidates_everything() {
        let mut alloc = EntityAllocator::new();
        let e1 = alloc.allocate();
        let e2 = alloc.allocate();
        alloc.clear();
        assert!(!alloc.is_alive(e1));
        assert!(!alloc.is_alive(e2));
        assert_eq!(alloc.alive_count(), 0);
    }
}
