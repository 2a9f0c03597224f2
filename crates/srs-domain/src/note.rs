//! Source content record behind one or more cards.

use serde::{Deserialize, Serialize};

use crate::ids::NoteId;

/// A note from which cards are generated.
///
/// The scheduler only ever *adds* tags (to mark leeches); it never removes
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique id, a millisecond timestamp issued at creation.
    pub id: NoteId,
    /// Unique tags in insertion order.
    pub tags: Vec<String>,
}

impl Note {
    /// Creates a note with no tags.
    #[must_use]
    pub fn new(id: NoteId) -> Self {
        Self {
            id,
            tags: Vec::new(),
        }
    }

    /// Adds a tag, silently ignoring duplicates.
    pub fn add_tag(&mut self, tag: &str) {
        if !self.has_tag(tag) {
            self.tags.push(tag.to_owned());
        }
    }

    /// Returns `true` when the note carries the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|existing| existing == tag)
    }
}
