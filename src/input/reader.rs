//! Input polling surface
//!
//! Components read input through `InputReader` and never poll a device
//! directly. The trait mirrors the classic virtual-input split: named
//! analog axes, named digital buttons, and raw keys.

use std::collections::{HashMap, HashSet};

use super::keys::Key;

/// Host input poll surface.
///
/// Degenerate reads fall back silently: an unknown axis reads 0, an
/// unknown button reads released.
pub trait InputReader {
    /// Current value of a named analog axis, in `[-1, 1]`.
    fn axis(&self, name: &str) -> f32;

    /// Whether a named virtual button is currently held.
    fn button_down(&self, name: &str) -> bool;

    /// Whether a key is currently held.
    fn key_down(&self, key: Key) -> bool;
}

/// Deterministic in-memory input for tests and replays.
///
/// State is whatever the script last set, nothing decays between reads.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    axes: HashMap<String, f32>,
    buttons: HashSet<String>,
    keys: HashSet<Key>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_axis(&mut self, name: &str, value: f32) {
        self.axes.insert(name.to_string(), value);
    }

    pub fn press_button(&mut self, name: &str) {
        self.buttons.insert(name.to_string());
    }

    pub fn release_button(&mut self, name: &str) {
        self.buttons.remove(name);
    }

    pub fn press_key(&mut self, key: Key) {
        self.keys.insert(key);
    }

    pub fn release_key(&mut self, key: Key) {
        self.keys.remove(&key);
    }

    /// Release everything and zero every axis.
    pub fn clear(&mut self) {
        self.axes.clear();
        self.buttons.clear();
        self.keys.clear();
    }
}

impl InputReader for ScriptedInput {
    fn axis(&self, name: &str) -> f32 {
        self.axes.get(name).copied().unwrap_or(0.0)
    }

    fn button_down(&self, name: &str) -> bool {
        self.buttons.contains(name)
    }

    fn key_down(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_reads_fall_back() {
        let input = ScriptedInput::new();
        assert_eq!(input.axis("Horizontal"), 0.0);
        assert!(!input.button_down("Jump"));
        assert!(!input.key_down(Key::Space));
    }

    #[test]
    fn test_scripted_state_persists() {
        let mut input = ScriptedInput::new();
        input.set_axis("Horizontal", -0.75);
        input.press_button("Fire");
        input.press_key(Key::W);

        assert_eq!(input.axis("Horizontal"), -0.75);
        assert!(input.button_down("Fire"));
        assert!(input.key_down(Key::W));

        // Reads do not consume state
        assert_eq!(input.axis("Horizontal"), -0.75);

        input.release_button("Fire");
        input.release_key(Key::W);
        assert!(!input.button_down("Fire"));
        assert!(!input.key_down(Key::W));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut input = ScriptedInput::new();
        input.set_axis("Vertical", 1.0);
        input.press_key(Key::Up);
        input.clear();

        assert_eq!(input.axis("Vertical"), 0.0);
        assert!(!input.key_down(Key::Up));
    }
}
