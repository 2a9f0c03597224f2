//! Error types returned by the scheduler.

use srs_domain::{CardId, GradeError};
use thiserror::Error;

/// Errors surfaced while answering cards.
///
/// Exhausted queues and detached decks are not errors: the former is the
/// `None` result of `next_card`, the latter clamps the day offset to zero.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// The submitted grade was outside the supported range.
    #[error(transparent)]
    InvalidGrade(#[from] GradeError),
    /// `answer` was called for a card whose queue cannot accept answers.
    #[error("card {0} is not in an answerable queue")]
    UnexpectedQueue(CardId),
    /// The card id does not belong to the deck being scheduled.
    #[error("card not found: {0}")]
    CardNotFound(CardId),
}
