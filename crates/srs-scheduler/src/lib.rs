//! SM-2 family spaced-repetition scheduling for one deck of cards.
//!
//! The scheduler answers two questions: which card should be studied next,
//! and, given the user's self-graded recall quality, when should that card
//! come back. Queue state is transient and rebuilt lazily from the deck's
//! cards, so nothing in this crate needs to be persisted between sessions.

mod config;
mod errors;
mod queues;
mod scheduler;
mod steps;

/// Tunable scheduling parameters and their builder.
pub use config::{NewSpread, SchedulerConfig, SchedulerConfigBuilder};
/// Errors surfaced while answering cards.
pub use errors::SchedulerError;
/// The per-deck scheduling state machine.
pub use scheduler::{LEECH_TAG, Scheduler};
