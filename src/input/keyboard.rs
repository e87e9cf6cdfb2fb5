//! Keyboard input backend
//!
//! Polls macroquad's keyboard and synthesizes the named virtual axes and
//! buttons that movement bindings reference. Axes are digital synthesis:
//! each bound (negative, positive) key pair contributes -1/0/+1 and the
//! sum is clamped to the analog range.

use std::collections::HashMap;

use macroquad::prelude::*;

use super::keys::Key;
use super::reader::InputReader;

fn to_keycode(key: Key) -> KeyCode {
    match key {
        Key::A => KeyCode::A,
        Key::B => KeyCode::B,
        Key::C => KeyCode::C,
        Key::D => KeyCode::D,
        Key::E => KeyCode::E,
        Key::F => KeyCode::F,
        Key::G => KeyCode::G,
        Key::H => KeyCode::H,
        Key::I => KeyCode::I,
        Key::J => KeyCode::J,
        Key::K => KeyCode::K,
        Key::L => KeyCode::L,
        Key::M => KeyCode::M,
        Key::N => KeyCode::N,
        Key::O => KeyCode::O,
        Key::P => KeyCode::P,
        Key::Q => KeyCode::Q,
        Key::R => KeyCode::R,
        Key::S => KeyCode::S,
        Key::T => KeyCode::T,
        Key::U => KeyCode::U,
        Key::V => KeyCode::V,
        Key::W => KeyCode::W,
        Key::X => KeyCode::X,
        Key::Y => KeyCode::Y,
        Key::Z => KeyCode::Z,
        Key::Key0 => KeyCode::Key0,
        Key::Key1 => KeyCode::Key1,
        Key::Key2 => KeyCode::Key2,
        Key::Key3 => KeyCode::Key3,
        Key::Key4 => KeyCode::Key4,
        Key::Key5 => KeyCode::Key5,
        Key::Key6 => KeyCode::Key6,
        Key::Key7 => KeyCode::Key7,
        Key::Key8 => KeyCode::Key8,
        Key::Key9 => KeyCode::Key9,
        Key::Up => KeyCode::Up,
        Key::Down => KeyCode::Down,
        Key::Left => KeyCode::Left,
        Key::Right => KeyCode::Right,
        Key::Space => KeyCode::Space,
        Key::Enter => KeyCode::Enter,
        Key::Escape => KeyCode::Escape,
        Key::Tab => KeyCode::Tab,
        Key::LeftShift => KeyCode::LeftShift,
        Key::RightShift => KeyCode::RightShift,
        Key::LeftControl => KeyCode::LeftControl,
        Key::RightControl => KeyCode::RightControl,
    }
}

/// Keyboard-backed `InputReader` with named binding tables.
#[derive(Debug, Default)]
pub struct KeyboardInput {
    /// Axis name -> (negative, positive) key pairs
    axes: HashMap<String, Vec<(Key, Key)>>,
    /// Button name -> keys, any one held counts
    buttons: HashMap<String, Vec<Key>>,
}

impl KeyboardInput {
    /// Empty tables. Every read falls back to 0 / released until
    /// bindings are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock layout: "Horizontal" / "Vertical" axes on arrows plus
    /// WASD, and "Left" / "Right" / "Up" / "Down" buttons to match.
    pub fn with_defaults() -> Self {
        let mut input = Self::new();

        input.bind_axis("Horizontal", Key::Left, Key::Right);
        input.bind_axis("Horizontal", Key::A, Key::D);
        input.bind_axis("Vertical", Key::Down, Key::Up);
        input.bind_axis("Vertical", Key::S, Key::W);

        input.bind_button("Right", Key::Right);
        input.bind_button("Right", Key::D);
        input.bind_button("Left", Key::Left);
        input.bind_button("Left", Key::A);
        input.bind_button("Up", Key::Up);
        input.bind_button("Up", Key::W);
        input.bind_button("Down", Key::Down);
        input.bind_button("Down", Key::S);

        input
    }

    /// Add a (negative, positive) key pair to a named axis.
    pub fn bind_axis(&mut self, name: &str, negative: Key, positive: Key) {
        self.axes
            .entry(name.to_string())
            .or_default()
            .push((negative, positive));
    }

    /// Add a key to a named button.
    pub fn bind_button(&mut self, name: &str, key: Key) {
        self.buttons.entry(name.to_string()).or_default().push(key);
    }

    pub fn has_axis(&self, name: &str) -> bool {
        self.axes.contains_key(name)
    }

    pub fn has_button(&self, name: &str) -> bool {
        self.buttons.contains_key(name)
    }
}

impl InputReader for KeyboardInput {
    fn axis(&self, name: &str) -> f32 {
        let Some(pairs) = self.axes.get(name) else {
            return 0.0;
        };

        let mut value: f32 = 0.0;
        for (negative, positive) in pairs {
            if is_key_down(to_keycode(*negative)) {
                value -= 1.0;
            }
            if is_key_down(to_keycode(*positive)) {
                value += 1.0;
            }
        }
        value.max(-1.0).min(1.0)
    }

    fn button_down(&self, name: &str) -> bool {
        let Some(keys) = self.buttons.get(name) else {
            return false;
        };
        keys.iter().any(|key| is_key_down(to_keycode(*key)))
    }

    fn key_down(&self, key: Key) -> bool {
        is_key_down(to_keycode(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Polling needs a live window, so tests stick to the tables.

    #[test]
    fn test_default_layout_names() {
        let input = KeyboardInput::with_defaults();
        assert!(input.has_axis("Horizontal"));
        assert!(input.has_axis("Vertical"));
        for button in ["Left", "Right", "Up", "Down"] {
            assert!(input.has_button(button));
        }
        assert!(!input.has_axis("Fire"));
    }

    #[test]
    fn test_keycode_translation() {
        assert!(matches!(to_keycode(Key::Left), KeyCode::Left));
        assert!(matches!(to_keycode(Key::W), KeyCode::W));
        assert!(matches!(to_keycode(Key::Key3), KeyCode::Key3));
        assert!(matches!(to_keycode(Key::Space), KeyCode::Space));
    }
}
