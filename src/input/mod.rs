//! Input abstraction
//!
//! Components poll input through the `InputReader` trait: named analog
//! axes, named virtual buttons, and raw keys. The crate ships two
//! implementations, a macroquad keyboard backend for games and a scripted
//! one for tests.
//!
//! Key identity is the crate's own `Key` enum so serialized bindings stay
//! backend-neutral.

mod keys;
mod reader;
mod keyboard;

pub use keys::Key;
pub use reader::{InputReader, ScriptedInput};
pub use keyboard::KeyboardInput;
