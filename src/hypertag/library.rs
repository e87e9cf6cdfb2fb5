//! Tag minting and lifetime tracking

use std::fmt;

/// An identity token naming a category of entities.
///
/// Equality is handle equality: two tags created with the same display
/// name are still different tags and never match each other. The name is
/// presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hypertag {
    index: u32,
    generation: u32,
}

impl Hypertag {
    fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

/// Owns every tag in a project and resolves handles back to display names.
///
/// Follows the same generational-slot scheme as the entity allocator:
/// destroying a tag bumps its slot generation, so handles to it stop
/// resolving while remaining comparable by value.
pub struct TagLibrary {
    generations: Vec<u32>,
    /// Display name per slot, None once the tag is destroyed
    names: Vec<Option<String>>,
    free_indices: Vec<u32>,
}

impl TagLibrary {
    pub fn new() -> Self {
        Self {
            generations: Vec::new(),
            names: Vec::new(),
            free_indices: Vec::new(),
        }
    }

    /// Mint a new tag with a display name. Names are not required to be
    /// unique, the handle itself is the identity.
    pub fn create(&mut self, name: impl Into<String>) -> Hypertag {
        if let Some(index) = self.free_indices.pop() {
            let idx = index as usize;
            self.names[idx] = Some(name.into());
            Hypertag::new(index, self.generations[idx])
        } else {
            let index = self.names.len() as u32;
            self.names.push(Some(name.into()));
            self.generations.push(0);
            Hypertag::new(index, 0)
        }
    }

    /// Destroy a tag. Handles held elsewhere keep comparing equal to each
    /// other but no longer resolve to a name.
    /// Returns false if the handle was already stale.
    pub fn destroy(&mut self, tag: Hypertag) -> bool {
        if !self.is_alive(tag) {
            return false;
        }
        let idx = tag.index as usize;
        self.generations[idx] += 1;
        self.names[idx] = None;
        self.free_indices.push(tag.index);
        true
    }

    pub fn is_alive(&self, tag: Hypertag) -> bool {
        let idx = tag.index as usize;
        idx < self.generations.len() && self.generations[idx] == tag.generation
    }

    /// Display name of a live tag, None for destroyed handles.
    pub fn label(&self, tag: Hypertag) -> Option<&str> {
        if !self.is_alive(tag) {
            return None;
        }
        self.names[tag.index as usize].as_deref()
    }

    /// First live tag with this display name, in creation-slot order.
    pub fn find(&self, name: &str) -> Option<Hypertag> {
        self.names.iter().enumerate().find_map(|(idx, slot)| {
            slot.as_deref().filter(|n| *n == name).map(|_| {
                Hypertag::new(idx as u32, self.generations[idx])
            })
        })
    }

    /// Iterate live tags as (handle, name) pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Hypertag, &str)> {
        self.names.iter().enumerate().filter_map(|(idx, slot)| {
            slot.as_deref()
                .map(|name| (Hypertag::new(idx as u32, self.generations[idx]), name))
        })
    }

    /// Number of live tags.
    pub fn len(&self) -> usize {
        self.names.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TagLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TagLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagLibrary")
            .field("live", &self.len())
            .field("slots", &self.names.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_different_identity() {
        let mut lib = TagLibrary::new();
        let a = lib.create("Enemy");
        let b = lib.create("Enemy");

        assert_ne!(a, b);
        assert_eq!(lib.label(a), Some("Enemy"));
        assert_eq!(lib.label(b), Some("Enemy"));
    }

    #[test]
    fn test_destroy_stales_handle() {
        let mut lib = TagLibrary::new();
        let tag = lib.create("Pickup");
        assert!(lib.destroy(tag));

        assert!(!lib.is_alive(tag));
        assert_eq!(lib.label(tag), None);
        assert!(!lib.destroy(tag));
    }

    #[test]
    fn test_slot_reuse_gets_new_generation() {
        let mut lib = TagLibrary::new();
        let old = lib.create("Door");
        lib.destroy(old);

        let new = lib.create("Lever");
        assert_eq!(new.index(), old.index());
        assert_ne!(new, old);
        assert_eq!(lib.label(new), Some("Lever"));
        assert_eq!(lib.label(old), None);
    }

    #[test]
    fn test_find_by_name() {
        let mut lib = TagLibrary::new();
        let enemy = lib.create("Enemy");
        lib.create("Pickup");

        assert_eq!(lib.find("Enemy"), Some(enemy));
        assert_eq!(lib.find("Boss"), None);
    }

    #[test]
    fn test_iter_skips_destroyed() {
        let mut lib = TagLibrary::new();
        let a = lib.create("A");
        lib.create("B");
        lib.destroy(a);

        let names: Vec<&str> = lib.iter().map(|(_, name)| name).collect();
        assert_eq!(names, vec!["B"]);
        assert_eq!(lib.len(), 1);
    }
}
