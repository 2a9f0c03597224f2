//! Decks own the notes and cards one scheduler works over.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::clock::Clock;
use crate::idgen::IdGen;
use crate::ids::{CardId, DeckId, NoteId};
use crate::note::Note;

/// A named set of notes and their cards, studied together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Unique id of the deck.
    pub id: DeckId,
    /// Human-readable deck name.
    pub name: String,
    /// Day-zero anchor copied from the owning collection when the deck is
    /// attached; `None` while the deck is detached.
    pub collection_crt: Option<i64>,
    /// Notes owned by the deck.
    pub notes: Vec<Note>,
    /// Cards owned by the deck, in creation order.
    pub cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty, detached deck.
    #[must_use]
    pub fn new(id: DeckId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            collection_crt: None,
            notes: Vec::new(),
            cards: Vec::new(),
        }
    }

    /// Adds a note and generates its card in the New stage.
    ///
    /// Returns the id of the generated card. The card's creation second is
    /// derived from its millisecond id.
    pub fn add_note<C: Clock>(&mut self, ids: &mut IdGen<C>) -> CardId {
        let note_id = NoteId::new(ids.next_id());
        let card_id = CardId::new(ids.next_id());
        let crt = (card_id.get() / 1_000) as i64;
        self.notes.push(Note::new(note_id));
        self.cards.push(Card::new(card_id, note_id, crt));
        card_id
    }

    /// Looks up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Looks up a card by id for mutation.
    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id == id)
    }

    /// Looks up a note by id.
    #[must_use]
    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Looks up a note by id for mutation.
    pub fn note_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use crate::queue::CardQueue;
    use crate::stage::CardStage;

    fn deck_with_idgen() -> (Deck, IdGen<SystemClock>) {
        (Deck::new(DeckId::new(1), "spanish"), IdGen::new(SystemClock))
    }

    #[test]
    fn new_deck_is_detached_and_empty() {
        let deck = Deck::new(DeckId::new(1), "spanish");
        assert!(deck.collection_crt.is_none());
        assert!(deck.notes.is_empty());
        assert!(deck.cards.is_empty());
    }

    #[test]
    fn add_note_creates_a_new_card_per_note() {
        let (mut deck, mut ids) = deck_with_idgen();
        let card_id = deck.add_note(&mut ids);

        assert_eq!(deck.notes.len(), 1);
        assert_eq!(deck.cards.len(), 1);
        let card = deck.card(card_id).expect("card just added");
        assert_eq!(card.stage, CardStage::New);
        assert_eq!(card.queue, CardQueue::New);
        assert_eq!(card.note_id, deck.notes[0].id);
        assert_eq!(card.due, deck.notes[0].id.get() as i64);
    }

    #[test]
    fn add_note_derives_creation_second_from_id() {
        let (mut deck, mut ids) = deck_with_idgen();
        let card_id = deck.add_note(&mut ids);
        let card = deck.card(card_id).expect("card just added");
        assert_eq!(card.crt, (card_id.get() / 1_000) as i64);
    }

    #[test]
    fn card_ids_preserve_creation_order() {
        let (mut deck, mut ids) = deck_with_idgen();
        let first = deck.add_note(&mut ids);
        let second = deck.add_note(&mut ids);
        assert!(first < second);
    }

    #[test]
    fn lookups_return_none_for_unknown_ids() {
        let deck = Deck::new(DeckId::new(1), "spanish");
        assert!(deck.card(CardId::new(42)).is_none());
        assert!(deck.note(NoteId::new(42)).is_none());
    }
}
