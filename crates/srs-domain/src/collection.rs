//! Top-level container anchoring day zero.

use serde::{Deserialize, Serialize};

use crate::clock::start_of_day;
use crate::deck::Deck;
use crate::ids::CollectionId;

/// Owns decks and carries the creation-day anchor that review due dates
/// are offsets from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Unique id of the collection.
    pub id: CollectionId,
    /// Human-readable collection name.
    pub name: String,
    /// Epoch second of the UTC midnight starting the creation day.
    pub crt: i64,
    /// Decks owned by the collection.
    pub decks: Vec<Deck>,
}

impl Collection {
    /// Creates a collection whose day zero is the UTC midnight of the day
    /// containing `created_at`.
    #[must_use]
    pub fn new(id: CollectionId, name: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            name: name.into(),
            crt: start_of_day(created_at),
            decks: Vec::new(),
        }
    }

    /// Attaches a deck, stamping this collection's day-zero anchor onto it.
    pub fn add_deck(&mut self, mut deck: Deck) -> &mut Deck {
        deck.collection_crt = Some(self.crt);
        self.decks.push(deck);
        self.decks.last_mut().expect("deck just pushed")
    }
}
