//! Hypertags - identity-token labels for entity lookup
//!
//! A hypertag is an opaque token minted by a `TagLibrary`, attached to
//! entities through a `TagSet` component, and queried over the world with
//! linear scans. Identity is the handle, never the display name: renaming
//! a tag changes nothing about membership, and two tags that happen to
//! share a name never match each other.
//!
//! Key concepts:
//! - `TagLibrary`: mints tags, owns their names, tracks their lifetime
//! - `Hypertag`: a copyable handle, valid until the tag is destroyed
//! - `TagSet`: the list of tags on one entity

mod library;
mod set;

pub use library::{Hypertag, TagLibrary};
pub use set::TagSet;
