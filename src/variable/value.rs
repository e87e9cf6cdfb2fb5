//! Runtime variable cell

use serde::{Serialize, Deserialize};

/// How a variable's value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VariableKind {
    #[default]
    Float,
    Integer,
}

/// A numeric state cell with optional clamping and reset-to-default.
///
/// When `is_integer` is set every mutation lands on an integral value,
/// truncated toward zero after clamping. When `has_limits` is set the
/// value stays inside `[min, max]` after every mutation. Configuration
/// with `min > max` or fractional limits on an integer variable is the
/// configuration layer's problem, not detected here.
#[derive(Debug, Clone, Copy)]
pub struct Variable {
    kind: VariableKind,
    current: f32,
    default: f32,
    is_integer: bool,
    has_limits: bool,
    min: f32,
    max: f32,
}

impl Variable {
    pub fn new(
        kind: VariableKind,
        current: f32,
        default: f32,
        is_integer: bool,
        has_limits: bool,
        min: f32,
        max: f32,
    ) -> Self {
        let mut var = Self {
            kind,
            current,
            default,
            is_integer,
            has_limits,
            min,
            max,
        };
        if var.is_integer {
            var.default = var.default.trunc();
        }
        var.current = var.constrain(var.current);
        var
    }

    fn constrain(&self, value: f32) -> f32 {
        let mut v = value;
        if self.has_limits {
            v = v.max(self.min).min(self.max);
        }
        if self.is_integer {
            v = v.trunc();
        }
        v
    }

    /// Add a delta to the current value, then clamp and truncate.
    pub fn change_value(&mut self, delta: f32) {
        self.current = self.constrain(self.current + delta);
        log::trace!("variable changed by {} to {}", delta, self.current);
    }

    /// Set an absolute value. Expressed as a delta from the current value
    /// so both mutation paths share the same constraint handling.
    pub fn set_value(&mut self, value: f32) {
        self.change_value(value - self.current);
    }

    /// Restore the default value, subject to the same constraints.
    pub fn reset(&mut self) {
        self.current = self.constrain(self.default);
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn default_value(&self) -> f32 {
        self.default
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    /// Render the current value: integer kind as whole-number text,
    /// float kind with the shortest float form.
    pub fn value_string(&self) -> String {
        match self.kind {
            VariableKind::Integer => format!("{}", self.current as i64),
            VariableKind::Float => format!("{}", self.current),
        }
    }
}
