//! Input-driven XY movement

use serde::{Serialize, Deserialize};

use crate::input::{InputReader, Key};
use crate::inspector::{FieldSpec, Inspect, ShowWhen};
use crate::math::Vec2;
use crate::world::Transform2D;

fn default_speed() -> Vec2 {
    Vec2::new(100.0, 100.0)
}

fn default_horizontal_axis() -> String {
    "Horizontal".to_string()
}

fn default_vertical_axis() -> String {
    "Vertical".to_string()
}

fn default_button_right() -> String {
    "Right".to_string()
}

fn default_button_left() -> String {
    "Left".to_string()
}

fn default_button_up() -> String {
    "Up".to_string()
}

fn default_button_down() -> String {
    "Down".to_string()
}

fn default_key_right() -> Option<Key> {
    Some(Key::Right)
}

fn default_key_left() -> Option<Key> {
    Some(Key::Left)
}

fn default_key_up() -> Option<Key> {
    Some(Key::Up)
}

fn default_key_down() -> Option<Key> {
    Some(Key::Down)
}

/// Where a mover reads its per-frame input from. Picked when the
/// component is authored, never switched at runtime.
///
/// Empty names and `None` keys are unbound: that direction contributes
/// nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InputSource {
    /// Analog axes in `[-1, 1]`, scaled by speed
    Axis {
        #[serde(default = "default_horizontal_axis")]
        horizontal: String,
        #[serde(default = "default_vertical_axis")]
        vertical: String,
    },
    /// Named button pairs, full speed while held
    Buttons {
        #[serde(default = "default_button_right")]
        horizontal_positive: String,
        #[serde(default = "default_button_left")]
        horizontal_negative: String,
        #[serde(default = "default_button_up")]
        vertical_positive: String,
        #[serde(default = "default_button_down")]
        vertical_negative: String,
    },
    /// Raw key pairs, full speed while held
    Keys {
        #[serde(default = "default_key_right")]
        horizontal_positive: Option<Key>,
        #[serde(default = "default_key_left")]
        horizontal_negative: Option<Key>,
        #[serde(default = "default_key_up")]
        vertical_positive: Option<Key>,
        #[serde(default = "default_key_down")]
        vertical_negative: Option<Key>,
    },
}

impl InputSource {
    /// The stock "Horizontal" / "Vertical" axis pair.
    pub fn axis() -> Self {
        Self::Axis {
            horizontal: default_horizontal_axis(),
            vertical: default_vertical_axis(),
        }
    }

    /// The stock "Right" / "Left" / "Up" / "Down" buttons.
    pub fn buttons() -> Self {
        Self::Buttons {
            horizontal_positive: default_button_right(),
            horizontal_negative: default_button_left(),
            vertical_positive: default_button_up(),
            vertical_negative: default_button_down(),
        }
    }

    /// The arrow keys.
    pub fn keys() -> Self {
        Self::Keys {
            horizontal_positive: default_key_right(),
            horizontal_negative: default_key_left(),
            vertical_positive: default_key_up(),
            vertical_negative: default_key_down(),
        }
    }
}

impl Default for InputSource {
    fn default() -> Self {
        Self::axis()
    }
}

fn key_name(key: Option<Key>) -> String {
    match key {
        Some(k) => k.name(),
        None => "None".to_string(),
    }
}

/// Moves an entity on the XY plane from polled input.
///
/// Works in two ticks with different periods. `sample` runs once per
/// frame and turns device state into a velocity, `integrate` runs once
/// per fixed step and applies the last sampled velocity to a transform.
/// When several fixed steps land between samples they all reuse the
/// stale velocity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementXY {
    /// Units per second along each axis
    #[serde(default = "default_speed")]
    speed: Vec2,
    /// Interpret the velocity in the entity's local basis
    #[serde(default)]
    pub use_rotation: bool,
    /// When false the mover drifts at full speed, ignoring input
    #[serde(default)]
    pub input_enabled: bool,
    #[serde(default)]
    pub input: InputSource,
    #[serde(skip)]
    move_vector: Vec2,
}

impl Default for MovementXY {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            use_rotation: false,
            input_enabled: false,
            input: InputSource::default(),
            move_vector: Vec2::ZERO,
        }
    }
}

impl MovementXY {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speed(&self) -> Vec2 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: Vec2) {
        self.speed = speed;
    }

    /// Velocity computed by the last `sample` call.
    pub fn move_vector(&self) -> Vec2 {
        self.move_vector
    }

    /// The variable-rate tick: recompute the velocity from device state.
    ///
    /// With input disabled the velocity is the configured speed itself,
    /// a constant drift. Button and key pairs check positive before
    /// negative with plain ifs, so holding both sides of a pair leaves
    /// the negative value in place.
    pub fn sample(&mut self, input: &impl InputReader) {
        if !self.input_enabled {
            self.move_vector = self.speed;
            return;
        }

        let mut mv = Vec2::ZERO;
        match &self.input {
            InputSource::Axis {
                horizontal,
                vertical,
            } => {
                if !horizontal.is_empty() {
                    mv.x = input.axis(horizontal) * self.speed.x;
                }
                if !vertical.is_empty() {
                    mv.y = input.axis(vertical) * self.speed.y;
                }
            }
            InputSource::Buttons {
                horizontal_positive,
                horizontal_negative,
                vertical_positive,
                vertical_negative,
            } => {
                if !horizontal_positive.is_empty() && input.button_down(horizontal_positive) {
                    mv.x = self.speed.x;
                }
                if !horizontal_negative.is_empty() && input.button_down(horizontal_negative) {
                    mv.x = -self.speed.x;
                }
                if !vertical_positive.is_empty() && input.button_down(vertical_positive) {
                    mv.y = self.speed.y;
                }
                if !vertical_negative.is_empty() && input.button_down(vertical_negative) {
                    mv.y = -self.speed.y;
                }
            }
            InputSource::Keys {
                horizontal_positive,
                horizontal_negative,
                vertical_positive,
                vertical_negative,
            } => {
                if let Some(key) = horizontal_positive {
                    if input.key_down(*key) {
                        mv.x = self.speed.x;
                    }
                }
                if let Some(key) = horizontal_negative {
                    if input.key_down(*key) {
                        mv.x = -self.speed.x;
                    }
                }
                if let Some(key) = vertical_positive {
                    if input.key_down(*key) {
                        mv.y = self.speed.y;
                    }
                }
                if let Some(key) = vertical_negative {
                    if input.key_down(*key) {
                        mv.y = -self.speed.y;
                    }
                }
            }
        }

        self.move_vector = mv;
    }

    /// The fixed-rate tick: apply the sampled velocity over `dt` seconds.
    pub fn integrate(&self, transform: &mut Transform2D, dt: f32) {
        let delta = if self.use_rotation {
            transform.right() * self.move_vector.x + transform.up() * self.move_vector.y
        } else {
            self.move_vector
        };
        transform.translate(delta * dt);
    }

    pub fn title(&self) -> &'static str {
        "XY Movement"
    }

    /// Human-readable summary of the configuration, for editor panes.
    pub fn describe(&self) -> String {
        let mut desc = String::new();

        if self.speed.x != 0.0 {
            if self.speed.y != 0.0 {
                desc.push_str(&format!(
                    "Dual axis movement, at {} units per second.\n",
                    self.speed
                ));
            } else {
                desc.push_str(&format!(
                    "Horizontal movement, at {} units per second.\n",
                    self.speed.x
                ));
            }
        } else if self.speed.y != 0.0 {
            desc.push_str(&format!(
                "Vertical movement, at {} units per second.\n",
                self.speed.y
            ));
        } else {
            desc.push_str("No movement!\n");
        }

        if self.use_rotation {
            desc.push_str("These directions will be relative to the current object orientation.\n");
        }

        if self.input_enabled {
            match &self.input {
                InputSource::Axis {
                    horizontal,
                    vertical,
                } => {
                    if !horizontal.is_empty() && horizontal != "None" {
                        desc.push_str(&format!(
                            "Horizontal movement will be controlled by the [{}] axis.\n",
                            horizontal
                        ));
                    }
                    if !vertical.is_empty() && vertical != "None" {
                        desc.push_str(&format!(
                            "Vertical movement will be controlled by the [{}] axis.\n",
                            vertical
                        ));
                    }
                }
                InputSource::Buttons {
                    horizontal_positive,
                    horizontal_negative,
                    vertical_positive,
                    vertical_negative,
                } => {
                    if !horizontal_positive.is_empty() || !horizontal_negative.is_empty() {
                        desc.push_str(&format!(
                            "Horizontal movement will be controlled by the [{}] and [{}] buttons.\n",
                            horizontal_negative, horizontal_positive
                        ));
                    }
                    if !vertical_positive.is_empty() || !vertical_negative.is_empty() {
                        desc.push_str(&format!(
                            "Vertical movement will be controlled by the [{}] and [{}] buttons.\n",
                            vertical_negative, vertical_positive
                        ));
                    }
                }
                InputSource::Keys {
                    horizontal_positive,
                    horizontal_negative,
                    vertical_positive,
                    vertical_negative,
                } => {
                    if horizontal_positive.is_some() || horizontal_negative.is_some() {
                        desc.push_str(&format!(
                            "Horizontal movement will be controlled by the [{}] and [{}] keys.\n",
                            key_name(*horizontal_negative),
                            key_name(*horizontal_positive)
                        ));
                    }
                    if vertical_positive.is_some() || vertical_negative.is_some() {
                        desc.push_str(&format!(
                            "Vertical movement will be controlled by the [{}] and [{}] keys.\n",
                            key_name(*vertical_negative),
                            key_name(*vertical_positive)
                        ));
                    }
                }
            }
        }

        desc
    }
}

impl Inspect for MovementXY {
    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::always("speed"),
            FieldSpec::always("use_rotation"),
            FieldSpec::always("input_enabled"),
            FieldSpec::new("input", ShowWhen::Flag("input_enabled")),
        ];
        FIELDS
    }

    fn flag(&self, name: &str) -> bool {
        match name {
            "input_enabled" => self.input_enabled,
            "use_rotation" => self.use_rotation,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;

    #[test]
    fn test_disabled_drifts_at_speed() {
        let mut mover = MovementXY::new();
        mover.set_speed(Vec2::new(30.0, -10.0));
        mover.input_enabled = false;

        let mut input = ScriptedInput::new();
        input.set_axis("Horizontal", 1.0);
        input.press_key(Key::Left);

        mover.sample(&input);
        assert_eq!(mover.move_vector().x, 30.0);
        assert_eq!(mover.move_vector().y, -10.0);
    }

    #[test]
    fn test_axis_scales_speed() {
        let mut mover = MovementXY::new();
        mover.input_enabled = true;
        mover.input = InputSource::axis();

        let mut input = ScriptedInput::new();
        input.set_axis("Horizontal", 0.5);

        mover.sample(&input);
        assert_eq!(mover.move_vector().x, 50.0);
        assert_eq!(mover.move_vector().y, 0.0);
    }

    #[test]
    fn test_worked_example_fixed_step_delta() {
        // speed (100, 100), horizontal axis at 0.5, fixed step 0.02s:
        // one step moves the entity exactly 1 unit along x
        let mut mover = MovementXY::new();
        mover.input_enabled = true;

        let mut input = ScriptedInput::new();
        input.set_axis("Horizontal", 0.5);
        mover.sample(&input);

        let mut transform = Transform2D::IDENTITY;
        mover.integrate(&mut transform, 0.02);

        assert!((transform.position.x - 1.0).abs() < 1.0e-6);
        assert!((transform.position.y - mover.move_vector().y * 0.02).abs() < 1.0e-6);
    }

    #[test]
    fn test_empty_axis_binding_reads_nothing() {
        let mut mover = MovementXY::new();
        mover.input_enabled = true;
        mover.input = InputSource::Axis {
            horizontal: String::new(),
            vertical: "Vertical".to_string(),
        };

        let mut input = ScriptedInput::new();
        input.set_axis("Horizontal", 1.0);
        input.set_axis("Vertical", -1.0);

        mover.sample(&input);
        assert_eq!(mover.move_vector().x, 0.0);
        assert_eq!(mover.move_vector().y, -100.0);
    }

    #[test]
    fn test_buttons_negative_wins_when_both_held() {
        let mut mover = MovementXY::new();
        mover.input_enabled = true;
        mover.input = InputSource::buttons();

        let mut input = ScriptedInput::new();
        input.press_button("Right");
        input.press_button("Left");

        mover.sample(&input);
        assert_eq!(mover.move_vector().x, -100.0);
    }

    #[test]
    fn test_buttons_positive_alone() {
        let mut mover = MovementXY::new();
        mover.input_enabled = true;
        mover.input = InputSource::buttons();

        let mut input = ScriptedInput::new();
        input.press_button("Up");

        mover.sample(&input);
        assert_eq!(mover.move_vector().x, 0.0);
        assert_eq!(mover.move_vector().y, 100.0);
    }

    #[test]
    fn test_keys_negative_wins_when_both_held() {
        let mut mover = MovementXY::new();
        mover.input_enabled = true;
        mover.input = InputSource::keys();

        let mut input = ScriptedInput::new();
        input.press_key(Key::Up);
        input.press_key(Key::Down);

        mover.sample(&input);
        assert_eq!(mover.move_vector().y, -100.0);
    }

    #[test]
    fn test_unbound_keys_are_skipped() {
        let mut mover = MovementXY::new();
        mover.input_enabled = true;
        mover.input = InputSource::Keys {
            horizontal_positive: None,
            horizontal_negative: None,
            vertical_positive: None,
            vertical_negative: None,
        };

        let mut input = ScriptedInput::new();
        input.press_key(Key::Right);
        input.press_key(Key::Up);

        mover.sample(&input);
        assert_eq!(mover.move_vector().x, 0.0);
        assert_eq!(mover.move_vector().y, 0.0);
    }

    #[test]
    fn test_stale_velocity_reused_across_steps() {
        let mut mover = MovementXY::new();
        mover.input_enabled = true;

        let mut input = ScriptedInput::new();
        input.set_axis("Horizontal", 1.0);
        mover.sample(&input);

        let mut transform = Transform2D::IDENTITY;
        mover.integrate(&mut transform, 0.02);
        mover.integrate(&mut transform, 0.02);
        mover.integrate(&mut transform, 0.02);

        // Three fixed steps, one sample: same velocity each time
        assert!((transform.position.x - 6.0).abs() < 1.0e-5);
    }

    #[test]
    fn test_use_rotation_moves_along_local_axes() {
        let mut mover = MovementXY::new();
        mover.set_speed(Vec2::new(100.0, 0.0));
        mover.use_rotation = true;
        mover.input_enabled = false;

        let input = ScriptedInput::new();
        mover.sample(&input);

        // Facing 90 degrees: local +X is world +Y
        let mut transform = Transform2D::from_position_rotation(Vec2::ZERO, 90.0);
        mover.integrate(&mut transform, 1.0);

        assert!(transform.position.x.abs() < 1.0e-4);
        assert!((transform.position.y - 100.0).abs() < 1.0e-4);
    }

    #[test]
    fn test_title() {
        assert_eq!(MovementXY::new().title(), "XY Movement");
    }

    #[test]
    fn test_describe_dual_axis() {
        let mover = MovementXY::new();
        let desc = mover.describe();
        assert!(desc.starts_with("Dual axis movement, at (100, 100) units per second.\n"));
        // Input is disabled by default, so no binding sentences
        assert!(!desc.contains("controlled"));
    }

    #[test]
    fn test_describe_no_movement() {
        let mut mover = MovementXY::new();
        mover.set_speed(Vec2::ZERO);
        assert_eq!(mover.describe(), "No movement!\n");
    }

    #[test]
    fn test_describe_axis_bindings() {
        let mut mover = MovementXY::new();
        mover.input_enabled = true;
        let desc = mover.describe();
        assert!(desc.contains("Horizontal movement will be controlled by the [Horizontal] axis.\n"));
        assert!(desc.contains("Vertical movement will be controlled by the [Vertical] axis.\n"));
    }

    #[test]
    fn test_describe_key_bindings_show_none() {
        let mut mover = MovementXY::new();
        mover.input_enabled = true;
        mover.input = InputSource::Keys {
            horizontal_positive: Some(Key::Right),
            horizontal_negative: None,
            vertical_positive: None,
            vertical_negative: None,
        };
        let desc = mover.describe();
        assert!(desc.contains(
            "Horizontal movement will be controlled by the [None] and [Right] keys.\n"
        ));
        assert!(!desc.contains("Vertical movement will be controlled"));
    }

    #[test]
    fn test_describe_rotation_note() {
        let mut mover = MovementXY::new();
        mover.use_rotation = true;
        assert!(mover
            .describe()
            .contains("relative to the current object orientation"));
    }

    #[test]
    fn test_input_field_hidden_when_disabled() {
        let mover = MovementXY::new();
        let visible = crate::inspector::visible_fields(&mover);
        assert!(!visible.contains(&"input"));

        let mut enabled = MovementXY::new();
        enabled.input_enabled = true;
        let visible = crate::inspector::visible_fields(&enabled);
        assert!(visible.contains(&"input"));
    }
}
