//! Bounded variables - numeric state cells with clamping and reset
//!
//! A variable holds one float, optionally truncated to integral values and
//! optionally clamped to `[min, max]` after every mutation. The serialized
//! `VariableInstance` component keeps the authored configuration separate
//! from the live `Variable` cell it builds at activation, so resetting a
//! scene never loses the authored values.

mod value;
mod instance;

pub use value::{Variable, VariableKind};
pub use instance::VariableInstance;
