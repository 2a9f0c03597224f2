//! Core domain types shared by the spaced-repetition scheduler.

mod card;
pub mod clock;
mod collection;
mod deck;
mod grade;
mod idgen;
mod ids;
mod note;
mod queue;
mod stage;

/// The scheduled unit carrying all mutable scheduling state.
pub use card::Card;
/// Wall-clock capability and the concrete clocks.
pub use clock::{Clock, ManualClock, SystemClock};
/// Top-level container anchoring day zero.
pub use collection::Collection;
/// Named card set studied through one scheduler.
pub use deck::Deck;
/// Recall grades and their validation error.
pub use grade::{Grade, GradeError};
/// Millisecond-precise unique id generator.
pub use idgen::IdGen;
/// Strongly typed entity identifiers.
pub use ids::{CardId, CollectionId, DeckId, NoteId};
/// Source content record behind each card.
pub use note::Note;
/// Queue eligibility classification for cards.
pub use queue::CardQueue;
/// Lifecycle stage classification for cards.
pub use stage::CardStage;
