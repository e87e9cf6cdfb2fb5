//! Serialized variable component

use serde::{Serialize, Deserialize};
use super::value::{Variable, VariableKind};
use crate::inspector::{FieldSpec, Inspect, ShowWhen};

fn default_true() -> bool {
    true
}

fn default_min_value() -> f32 {
    -f32::MAX
}

fn default_max_value() -> f32 {
    f32::MAX
}

/// Serialized variable component. Carries the authored configuration and,
/// once activated, the live runtime cell.
///
/// The configuration stays untouched at runtime so a scene can be
/// re-instantiated from the same definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableInstance {
    #[serde(default)]
    pub kind: VariableKind,
    #[serde(default)]
    pub current_value: f32,
    #[serde(default)]
    pub default_value: f32,
    #[serde(default)]
    pub is_integer: bool,
    /// Limits default to on with inert bounds. Set to false to truly
    /// disable clamping instead of widening the bounds.
    #[serde(default = "default_true")]
    pub has_limits: bool,
    #[serde(default = "default_min_value")]
    pub min_value: f32,
    #[serde(default = "default_max_value")]
    pub max_value: f32,
    #[serde(skip)]
    runtime: Option<Variable>,
}

impl Default for VariableInstance {
    fn default() -> Self {
        Self {
            kind: VariableKind::Float,
            current_value: 0.0,
            default_value: 0.0,
            is_integer: false,
            has_limits: true,
            min_value: -f32::MAX,
            max_value: f32::MAX,
            runtime: None,
        }
    }
}

impl VariableInstance {
    /// Build the runtime cell from the authored configuration.
    /// Idempotent, a second activation keeps the live cell.
    pub fn activate(&mut self) {
        self.runtime_mut();
    }

    pub fn is_active(&self) -> bool {
        self.runtime.is_some()
    }

    fn runtime_mut(&mut self) -> &mut Variable {
        let authored = Variable::new(
            self.kind,
            self.current_value,
            self.default_value,
            self.is_integer,
            self.has_limits,
            self.min_value,
            self.max_value,
        );
        self.runtime.get_or_insert(authored)
    }

    pub fn change_value(&mut self, delta: f32) {
        self.runtime_mut().change_value(delta);
    }

    pub fn set_value(&mut self, value: f32) {
        self.runtime_mut().set_value(value);
    }

    pub fn reset(&mut self) {
        self.runtime_mut().reset();
    }

    /// Current value, or the authored current value before activation.
    pub fn value(&self) -> f32 {
        match &self.runtime {
            Some(var) => var.value(),
            None => self.current_value,
        }
    }

    /// Render the value without activating. Before activation the authored
    /// default is shown, whole-number text when the kind is `Integer`.
    pub fn value_string(&self) -> String {
        match &self.runtime {
            Some(var) => var.value_string(),
            None => match self.kind {
                VariableKind::Integer => format!("{}", self.default_value as i64),
                VariableKind::Float => format!("{}", self.default_value),
            },
        }
    }
}

impl Inspect for VariableInstance {
    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::always("kind"),
            FieldSpec::always("current_value"),
            FieldSpec::always("default_value"),
            FieldSpec::always("is_integer"),
            FieldSpec::always("has_limits"),
            FieldSpec::new("min_value", ShowWhen::Flag("has_limits")),
            FieldSpec::new("max_value", ShowWhen::Flag("has_limits")),
        ];
        FIELDS
    }

    fn flag(&self, name: &str) -> bool {
        match name {
            "has_limits" => self.has_limits,
            _ => false,
        }
    }
}
