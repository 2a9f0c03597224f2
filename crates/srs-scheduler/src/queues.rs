//! Lazily rebuilt card queues and the new-card interleaving ratio.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use srs_domain::{Card, CardId, CardQueue};

use crate::config::NewSpread;

/// The three bounded queues cards are served from.
///
/// Queues hold card ids and are popped from the tail. Refills are lazy and
/// never touch a non-empty queue; answering a card does not edit the queues
/// either, so eligibility changes only surface at the next refill.
#[derive(Debug, Default)]
pub(crate) struct CardQueues {
    new: Vec<CardId>,
    lrn: Vec<CardId>,
    rev: Vec<CardId>,
    new_card_modulus: u32,
}

impl CardQueues {
    pub(crate) fn clear_new(&mut self) {
        self.new.clear();
    }

    pub(crate) fn clear_lrn(&mut self) {
        self.lrn.clear();
    }

    pub(crate) fn clear_rev(&mut self) {
        self.rev.clear();
    }

    /// Refills the new queue with the day's allotment in creation order.
    pub(crate) fn fill_new(&mut self, cards: &[Card], limit: usize) {
        if !self.new.is_empty() {
            return;
        }
        let mut ids: Vec<CardId> = cards
            .iter()
            .filter(|card| card.queue == CardQueue::New)
            .map(|card| card.id)
            .collect();
        ids.sort_unstable();
        ids.truncate(limit);
        // Tail pops must yield the oldest card first.
        ids.reverse();
        self.new = ids;
    }

    /// Refills the learning queue with cards due inside the learn-ahead
    /// window, earliest due popped first.
    pub(crate) fn fill_lrn(&mut self, cards: &[Card], cutoff: i64, limit: usize) {
        if !self.lrn.is_empty() {
            return;
        }
        let mut keyed: Vec<(i64, CardId)> = cards
            .iter()
            .filter(|card| card.queue == CardQueue::Learning && card.due < cutoff)
            .map(|card| (card.due, card.id))
            .collect();
        keyed.sort_unstable();
        keyed.truncate(limit);
        keyed.reverse();
        self.lrn = keyed.into_iter().map(|(_, id)| id).collect();
    }

    /// Refills the review queue with cards due today or earlier, shuffled
    /// deterministically for the day.
    pub(crate) fn fill_rev(&mut self, cards: &[Card], today: u32, limit: usize) {
        if !self.rev.is_empty() {
            return;
        }
        let mut keyed: Vec<(i64, CardId)> = cards
            .iter()
            .filter(|card| card.queue == CardQueue::Review && card.due <= i64::from(today))
            .map(|card| (card.due, card.id))
            .collect();
        keyed.sort_unstable();
        keyed.truncate(limit);
        let mut ids: Vec<CardId> = keyed.into_iter().map(|(_, id)| id).collect();
        // Same day, same due set: same permutation across restarts.
        let mut rng = StdRng::seed_from_u64(u64::from(today));
        ids.shuffle(&mut rng);
        self.rev = ids;
    }

    pub(crate) fn pop_new(&mut self) -> Option<CardId> {
        self.new.pop()
    }

    pub(crate) fn pop_lrn(&mut self) -> Option<CardId> {
        self.lrn.pop()
    }

    pub(crate) fn pop_rev(&mut self) -> Option<CardId> {
        self.rev.pop()
    }

    pub(crate) fn new_is_empty(&self) -> bool {
        self.new.is_empty()
    }

    /// Recomputes how often a new card is interleaved between other cards.
    ///
    /// Meaningful only right after both the new and review queues have been
    /// refilled for the day.
    pub(crate) fn update_new_card_ratio(&mut self, new_spread: NewSpread) {
        self.new_card_modulus = match new_spread {
            NewSpread::Distribute if !self.new.is_empty() => {
                let ratio = ((self.new.len() + self.rev.len()) / self.new.len()) as u32;
                if self.rev.is_empty() { ratio } else { ratio.max(2) }
            }
            _ => 0,
        };
    }

    pub(crate) fn new_card_modulus(&self) -> u32 {
        self.new_card_modulus
    }
}
