//! Per-entity tag membership

use super::library::{Hypertag, TagLibrary};

/// The set of tags attached to one entity.
///
/// Stored as an ordered list. Duplicates are allowed and queries treat
/// them as a single membership. Attach this as a component to make the
/// entity visible to tag queries.
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    tags: Vec<Hypertag>,
    /// Free-form author note, shown by UIs instead of the tag list
    pub description: String,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tags(tags: Vec<Hypertag>) -> Self {
        Self {
            tags,
            description: String::new(),
        }
    }

    pub fn add(&mut self, tag: Hypertag) {
        self.tags.push(tag);
    }

    /// Remove the first occurrence of a tag. Returns false if absent.
    pub fn remove(&mut self, tag: Hypertag) -> bool {
        if let Some(pos) = self.tags.iter().position(|t| *t == tag) {
            self.tags.remove(pos);
            true
        } else {
            false
        }
    }

    /// Membership by tag identity. A tag with the same display name but
    /// a different handle does not match.
    pub fn has(&self, tag: Hypertag) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }

    /// True if any of the given tags is a member.
    pub fn has_any(&self, tags: &[Hypertag]) -> bool {
        tags.iter().any(|t| self.has(*t))
    }

    pub fn tags(&self) -> &[Hypertag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Display names joined with ", ", skipping tags the library no longer
    /// resolves. An entity with zero tags renders as the literal "Hypertag".
    pub fn tag_string(&self, library: &TagLibrary) -> String {
        if self.tags.is_empty() {
            return "Hypertag".to_string();
        }

        let mut out = String::new();
        for tag in &self.tags {
            let Some(name) = library.label(*tag) else {
                continue;
            };
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(name);
        }
        out
    }

    /// The author's note, empty when none was written.
    pub fn describe(&self) -> String {
        self.description.clone()
    }
}
