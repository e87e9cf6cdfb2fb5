//! World registry
//!
//! The World owns every entity and all component storages. It is the
//! application-owned registry tag queries scan: no reflection, no global
//! discovery, just the storages it holds. Component types are fixed at
//! compile time in typed fields.

use crate::hypertag::{Hypertag, TagSet};
use crate::input::InputReader;
use crate::math::Vec2;
use crate::movement::MovementXY;
use crate::variable::VariableInstance;

use super::component::ComponentStorage;
use super::entity::{Entity, EntityAllocator};
use super::transform::Transform2D;

/// Container for all entities and their components.
pub struct World {
    entities: EntityAllocator,

    /// Entities queued for despawn at end of frame
    despawn_queue: Vec<Entity>,

    /// World placement, every entity gets one at spawn
    pub transforms: ComponentStorage<Transform2D>,

    /// Tag membership, presence makes an entity visible to tag queries
    pub tag_sets: ComponentStorage<TagSet>,

    /// Tracked numeric state
    pub variables: ComponentStorage<VariableInstance>,

    /// Input-driven movement
    pub movers: ComponentStorage<MovementXY>,
}

impl World {
    pub fn new() -> Self {
        Self {
            entities: EntityAllocator::new(),
            despawn_queue: Vec::new(),
            transforms: ComponentStorage::new(),
            tag_sets: ComponentStorage::new(),
            variables: ComponentStorage::new(),
            movers: ComponentStorage::new(),
        }
    }

    /// Spawn an entity at the origin.
    pub fn spawn(&mut self) -> Entity {
        let entity = self.entities.allocate();
        self.transforms.insert(entity, Transform2D::default());
        entity
    }

    /// Spawn an entity at a position.
    pub fn spawn_at(&mut self, position: Vec2) -> Entity {
        let entity = self.entities.allocate();
        self.transforms
            .insert(entity, Transform2D::from_position(position));
        entity
    }

    /// Spawn a tagged entity. An empty tag list still gets a `TagSet`,
    /// making the entity visible to (and rejected by) tag queries.
    pub fn spawn_tagged(&mut self, position: Vec2, tags: Vec<Hypertag>) -> Entity {
        let entity = self.spawn_at(position);
        self.tag_sets.insert(entity, TagSet::from_tags(tags));
        entity
    }

    /// Queue an entity for despawn at the next flush.
    /// Safe to call while scanning storages.
    pub fn despawn(&mut self, entity: Entity) {
        if self.is_alive(entity) {
            self.despawn_queue.push(entity);
        }
    }

    /// Despawn now and clear every component slot. Slot hygiene is what
    /// lets queries rebuild handles from storage indices without a
    /// liveness check, so every storage must be cleared here.
    pub fn despawn_immediate(&mut self, entity: Entity) {
        if !self.entities.free(entity) {
            return; // Already dead
        }

        let idx = entity.index();
        self.transforms.clear_slot(idx);
        self.tag_sets.clear_slot(idx);
        self.variables.clear_slot(idx);
        self.movers.clear_slot(idx);
    }

    /// Process queued despawns. Call at end of frame.
    pub fn flush_despawns(&mut self) {
        let queue = std::mem::take(&mut self.despawn_queue);
        for entity in queue {
            self.despawn_immediate(entity);
        }
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    pub fn entity_count(&self) -> u32 {
        self.entities.alive_count()
    }

    /// Rebuild a live handle from a storage slot index. Storages only
    /// hold data for live entities, so the current generation is the
    /// right one.
    fn entity_at(&self, index: u32) -> Entity {
        Entity::new(index, self.entities.generation_at(index))
    }

    // =========================================================================
    // Lifecycle ticks
    // =========================================================================

    /// Activation pass: build runtime state from authored configuration.
    /// Runs once when the world starts.
    pub fn start(&mut self) {
        for (_, variable) in self.variables.iter_mut() {
            variable.activate();
        }
    }

    /// The variable-rate tick: sample input into every mover.
    pub fn update(&mut self, input: &impl InputReader) {
        for (_, mover) in self.movers.iter_mut() {
            mover.sample(input);
        }
    }

    /// The fixed-rate tick: integrate sampled velocities into transforms.
    pub fn fixed_update(&mut self, dt: f32) {
        for (idx, mover) in self.movers.iter() {
            if let Some(transform) = self.transforms.get_at_mut(idx) {
                mover.integrate(transform, dt);
            }
        }
    }

    // =========================================================================
    // Tag queries
    // =========================================================================

    /// Whether an entity's tag set contains this tag. Untagged entities
    /// never match.
    pub fn has_tag(&self, entity: Entity, tag: Hypertag) -> bool {
        match self.tag_sets.get(entity) {
            Some(set) => set.has(tag),
            None => false,
        }
    }

    /// Every tagged entity carrying at least one of the given tags, in
    /// registry order, each exactly once. A full linear scan per call.
    pub fn find_with_any_tag(&self, tags: &[Hypertag]) -> Vec<Entity> {
        let mut found = Vec::new();
        for (idx, set) in self.tag_sets.iter() {
            if set.has_any(tags) {
                found.push(self.entity_at(idx));
            }
        }
        found
    }

    /// The first tagged entity carrying this tag, in registry order.
    pub fn find_first_with_tag(&self, tag: Hypertag) -> Option<Entity> {
        self.tag_sets
            .iter()
            .find(|(_, set)| set.has(tag))
            .map(|(idx, _)| self.entity_at(idx))
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
