//! Queue eligibility tracked for each card.

use serde::{Deserialize, Serialize};

/// Which logical queue a card currently belongs to.
///
/// The queue records *eligibility*; lifecycle progress is tracked
/// separately by [`CardStage`](crate::CardStage). Suspended cards belong to
/// no queue and are never presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i8)]
pub enum CardQueue {
    /// Withheld from study, typically as a leech.
    Suspended = -1,
    /// Waiting to be introduced.
    New = 0,
    /// Due at second granularity within the learning steps.
    Learning = 1,
    /// Due at day granularity.
    Review = 2,
}

impl CardQueue {
    /// Returns `true` when the card may be presented for study.
    #[must_use]
    pub fn is_studiable(self) -> bool {
        !matches!(self, CardQueue::Suspended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_suspended_cards_are_unstudiable() {
        assert!(CardQueue::New.is_studiable());
        assert!(CardQueue::Learning.is_studiable());
        assert!(CardQueue::Review.is_studiable());
        assert!(!CardQueue::Suspended.is_studiable());
    }
}
