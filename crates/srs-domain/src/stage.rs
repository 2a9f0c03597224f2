//! Lifecycle stage tracked for each card.

use serde::{Deserialize, Serialize};

/// How far a card has progressed through its lifecycle.
///
/// The stage records *progress*; eligibility for presentation is tracked
/// separately by [`CardQueue`](crate::CardQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardStage {
    /// Never answered.
    New,
    /// Working through the initial learning steps.
    Learning,
    /// Graduated and reviewed at day-granularity intervals.
    Review,
    /// Lapsed out of review and relearning the steps.
    Relearning,
}

impl CardStage {
    /// Returns `true` for cards that have never been answered.
    #[must_use]
    pub fn is_new(self) -> bool {
        matches!(self, CardStage::New)
    }

    /// Returns `true` for cards inside a step sequence, initial or
    /// post-lapse.
    #[must_use]
    pub fn is_stepping(self) -> bool {
        matches!(self, CardStage::Learning | CardStage::Relearning)
    }

    /// Returns `true` for cards that have graduated at least once.
    #[must_use]
    pub fn is_graduated(self) -> bool {
        matches!(self, CardStage::Review | CardStage::Relearning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_helpers_cover_all_variants() {
        assert!(CardStage::New.is_new());
        assert!(!CardStage::Learning.is_new());
        assert!(CardStage::Learning.is_stepping());
        assert!(CardStage::Relearning.is_stepping());
        assert!(!CardStage::Review.is_stepping());
        assert!(CardStage::Review.is_graduated());
        assert!(CardStage::Relearning.is_graduated());
        assert!(!CardStage::New.is_graduated());
    }
}
