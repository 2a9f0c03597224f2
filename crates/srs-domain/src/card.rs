//! The scheduled unit and its mutable scheduling state.

use serde::{Deserialize, Serialize};

use crate::ids::{CardId, NoteId};
use crate::queue::CardQueue;
use crate::stage::CardStage;

/// A single scheduled flashcard.
///
/// All scheduling state lives on the card; the scheduler mutates it in
/// place and the owning deck is what gets persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique id, a millisecond timestamp issued at creation.
    pub id: CardId,
    /// Note this card was generated from.
    pub note_id: NoteId,
    /// Creation time in epoch seconds.
    pub crt: i64,
    /// Lifecycle stage the card has reached.
    pub stage: CardStage,
    /// Queue the card is currently eligible for.
    pub queue: CardQueue,
    /// Current interval: positive values are days, negative values are
    /// seconds, zero for cards never graduated.
    pub ivl: i32,
    /// Ease factor in permille; zero until first graduation, then never
    /// below 1300.
    pub factor: u32,
    /// Lifetime number of answers recorded.
    pub reps: u32,
    /// Lifetime number of lapses (Again while in review).
    pub lapses: u32,
    /// Packed learning-step counter: `steps_today * 1000 + steps_remaining`.
    pub left: u32,
    /// Due marker, interpreted through `queue`: the note id for new cards
    /// (insertion order), an epoch second for learning cards, and a day
    /// offset from the collection creation day for review cards.
    pub due: i64,
}

impl Card {
    /// Creates a card in the New stage for the given note.
    #[must_use]
    pub fn new(id: CardId, note_id: NoteId, crt: i64) -> Self {
        Self {
            id,
            note_id,
            crt,
            stage: CardStage::New,
            queue: CardQueue::New,
            ivl: 0,
            factor: 0,
            reps: 0,
            lapses: 0,
            left: 0,
            due: note_id.get() as i64,
        }
    }
}
