//! PLAYKIT: Data-driven gameplay components for 2D games
//!
//! A tag-and-query entity world with authored behaviors:
//! - Hypertags: identity-based labels for finding entities at runtime
//! - Bounded variables with clamping, truncation, and reset
//! - Axis/button/key driven XY movement on a fixed physics step
//! - RON scene files, brotli-compressed on disk

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod math;
pub mod world;
pub mod hypertag;
pub mod variable;
pub mod movement;
pub mod input;
pub mod time;
pub mod runtime;
pub mod scene;
pub mod inspector;

pub use hypertag::{Hypertag, TagLibrary, TagSet};
pub use input::{InputReader, Key, KeyboardInput, ScriptedInput};
pub use inspector::{explanation, visible_fields, FieldSpec, Inspect, ShowWhen};
pub use math::Vec2;
pub use movement::{InputSource, MovementXY};
pub use runtime::Runtime;
pub use scene::{
    load_scene, load_scene_from_str, save_scene, validate_scene, EntityDef, SceneDef, SceneError,
};
pub use time::FixedTimestep;
pub use variable::{Variable, VariableInstance, VariableKind};
pub use world::{ComponentStorage, Entity, Transform2D, World};
