//! Key identifiers
//!
//! Crate-owned key enum so components and scene files never depend on a
//! backend's key type. The macroquad adapter translates these at the poll
//! boundary.

use serde::{Serialize, Deserialize};

/// A physical key a binding can reference.
///
/// Variant names follow the common keyboard layout and double as the
/// display names in component descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Key0, Key1, Key2, Key3, Key4, Key5, Key6, Key7, Key8, Key9,
    Up, Down, Left, Right,
    Space, Enter, Escape, Tab,
    LeftShift, RightShift, LeftControl, RightControl,
}

impl Key {
    /// Display name used in binding descriptions.
    pub fn name(&self) -> String {
        format!("{:?}", self)
    }
}
