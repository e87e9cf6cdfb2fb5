//! Presentation metadata for editor and debug UIs
//!
//! Components describe themselves to UI layers through two channels: a
//! plain-text explanation derived from `describe()` strings, and a
//! declarative field-visibility schema. Domain logic never consults any
//! of this; it exists so a UI can hide irrelevant fields without
//! hard-coding per-component rules.

/// Capitalize the first character of a raw description.
pub fn explanation(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Visibility predicate for one serialized field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowWhen {
    Always,
    /// Visible while the named boolean flag on the component reads true
    Flag(&'static str),
}

/// One serialized field and when a UI should show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub show_when: ShowWhen,
}

impl FieldSpec {
    pub const fn always(name: &'static str) -> Self {
        Self {
            name,
            show_when: ShowWhen::Always,
        }
    }

    pub const fn new(name: &'static str, show_when: ShowWhen) -> Self {
        Self { name, show_when }
    }
}

/// Implemented by components that expose a field schema to UIs.
pub trait Inspect {
    /// The component's serialized fields, in display order.
    fn fields() -> &'static [FieldSpec];

    /// Read a boolean flag by field name. Unknown names read false,
    /// which hides any field gated on them.
    fn flag(&self, _name: &str) -> bool {
        false
    }
}

/// Names of the fields a UI should show for this component value.
pub fn visible_fields<T: Inspect>(value: &T) -> Vec<&'static str> {
    T::fields()
        .iter()
        .filter(|spec| match spec.show_when {
            ShowWhen::Always => true,
            ShowWhen::Flag(flag) => value.flag(flag),
        })
        .map(|spec| spec.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explanation_capitalizes_first_char() {
        assert_eq!(explanation("moves left or right"), "Moves left or right");
        assert_eq!(explanation("Tagged with Enemy"), "Tagged with Enemy");
    }

    #[test]
    fn test_explanation_empty_input() {
        assert_eq!(explanation(""), "");
    }

    #[test]
    fn test_explanation_single_char() {
        assert_eq!(explanation("x"), "X");
    }

    struct Gated {
        open: bool,
    }

    impl Inspect for Gated {
        fn fields() -> &'static [FieldSpec] {
            const FIELDS: &[FieldSpec] = &[
                FieldSpec::always("name"),
                FieldSpec::new("secret", ShowWhen::Flag("open")),
                FieldSpec::new("broken", ShowWhen::Flag("no_such_flag")),
            ];
            FIELDS
        }

        fn flag(&self, name: &str) -> bool {
            match name {
                "open" => self.open,
                _ => false,
            }
        }
    }

    #[test]
    fn test_visible_fields_follow_flags() {
        let closed = Gated { open: false };
        assert_eq!(visible_fields(&closed), vec!["name"]);

        let open = Gated { open: true };
        assert_eq!(visible_fields(&open), vec!["name", "secret"]);
    }
}
