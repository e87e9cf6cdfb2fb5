//! Entity registry
//!
//! A small fixed-component world: generational entity handles, sparse
//! per-component storages, and the `World` container that ties them to
//! the frame loop and the tag query surface.
//!
//! Key concepts:
//! - `Entity`: generational index, stale after despawn
//! - `ComponentStorage<T>`: sparse array keyed by entity index
//! - `Transform2D`: world placement on the XY plane
//! - `World`: owns everything, runs the update and fixed-update ticks

mod entity;
mod component;
mod transform;
mod world;

pub use entity::{Entity, EntityAllocator};
pub use component::ComponentStorage;
pub use transform::Transform2D;
pub use world::World;
