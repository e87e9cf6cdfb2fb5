//! Movement components
//!
//! Velocity comes from one statically selected input source per mover,
//! displacement lands on the transform during fixed steps. The split
//! matches the frame/physics tick split: sample once per frame,
//! integrate once per fixed step.

mod xy;

pub use xy::{InputSource, MovementXY};
