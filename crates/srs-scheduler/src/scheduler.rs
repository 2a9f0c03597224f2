//! The scheduling state machine: card selection, answer dispatch, and day
//! rollover.

use num_traits::ToPrimitive;
use tracing::{debug, info};

use srs_domain::clock::{self, Clock};
use srs_domain::{Card, CardId, CardQueue, CardStage, Deck, Grade, Note};

use crate::config::{NewSpread, SchedulerConfig};
use crate::errors::SchedulerError;
use crate::queues::CardQueues;
use crate::steps;

/// Tag added to a note when one of its cards is suspended as a leech.
pub const LEECH_TAG: &str = "leech";

/// Ease factor floor in permille.
const MINIMUM_FACTOR: u32 = 1_300;

/// Permille subtracted from the ease factor on each lapse.
const LAPSE_FACTOR_PENALTY: u32 = 200;

/// Drift in seconds the learn-ahead cutoff may accumulate before an
/// unforced update takes effect.
const LRN_CUTOFF_SLACK: i64 = 60;

/// Per-deck scheduler implementing the SM-2 family state machine.
///
/// One instance drives one deck for the duration of a session. All queue
/// and day state is transient: it is rebuilt lazily from the deck's cards,
/// so a freshly constructed scheduler resumes correctly from whatever card
/// state the owner persisted.
#[derive(Debug)]
pub struct Scheduler<C> {
    clock: C,
    config: SchedulerConfig,
    today: u32,
    day_cutoff: i64,
    lrn_cutoff: i64,
    session_reps: u32,
    queues: CardQueues,
}

impl<C: Clock> Scheduler<C> {
    /// Creates a scheduler; queues stay empty until the first selection.
    pub fn new(clock: C, config: SchedulerConfig) -> Self {
        Self {
            clock,
            config,
            today: 0,
            day_cutoff: 0,
            lrn_cutoff: 0,
            session_reps: 0,
            queues: CardQueues::default(),
        }
    }

    /// Day offset currently in effect, counted from the collection's
    /// creation day.
    #[must_use]
    pub fn today(&self) -> u32 {
        self.today
    }

    /// Number of cards served so far in this session.
    #[must_use]
    pub fn session_reps(&self) -> u32 {
        self.session_reps
    }

    /// Interleaving modulus currently in effect. Exposed for test
    /// harnesses.
    #[must_use]
    pub fn new_card_modulus(&self) -> u32 {
        self.queues.new_card_modulus()
    }

    /// Selects the next card to study, or `None` when no card is available
    /// right now.
    ///
    /// A `None` result is not final: learning cards may re-enter the
    /// collapse window and the day may roll over, so the caller is free to
    /// ask again later.
    pub fn next_card(&mut self, deck: &Deck) -> Option<CardId> {
        self.check_day(deck);
        let picked = self.pick_card(deck);
        if picked.is_some() {
            self.session_reps += 1;
        }
        picked
    }

    fn pick_card(&mut self, deck: &Deck) -> Option<CardId> {
        if let Some(id) = self.get_lrn_card(deck) {
            return Some(id);
        }
        if self.time_for_new_card() {
            if let Some(id) = self.get_new_card(deck) {
                return Some(id);
            }
        }
        if let Some(id) = self.get_rev_card(deck) {
            return Some(id);
        }
        if let Some(id) = self.get_new_card(deck) {
            return Some(id);
        }
        // The collapse window may have caught up with an almost-due
        // learning card while the rest of the session drained.
        self.get_lrn_card(deck)
    }

    /// Applies a grade to the card, mutating its scheduling state in place.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::CardNotFound`] for an id outside the deck
    /// and [`SchedulerError::UnexpectedQueue`] for a suspended card.
    pub fn answer(
        &mut self,
        deck: &mut Deck,
        card_id: CardId,
        grade: Grade,
    ) -> Result<(), SchedulerError> {
        self.update_lrn_cutoff(false);
        let index = deck
            .cards
            .iter()
            .position(|card| card.id == card_id)
            .ok_or(SchedulerError::CardNotFound(card_id))?;
        let card = &mut deck.cards[index];
        match card.queue {
            CardQueue::Suspended => Err(SchedulerError::UnexpectedQueue(card_id)),
            CardQueue::New => {
                card.reps += 1;
                self.answer_new_card(card);
                self.answer_lrn_card(card, grade);
                Ok(())
            }
            CardQueue::Learning => {
                card.reps += 1;
                self.answer_lrn_card(card, grade);
                Ok(())
            }
            CardQueue::Review => {
                card.reps += 1;
                self.answer_rev_card(card, &mut deck.notes, grade);
                Ok(())
            }
        }
    }

    /// Rebuilds day state and clears all queues for lazy refill.
    pub fn reset(&mut self, deck: &Deck) {
        self.update_cutoff(deck);
        self.reset_lrn();
        self.reset_rev();
        self.reset_new(deck);
    }

    /// Widens the learn-ahead cutoff once it has drifted past the debounce
    /// slack, or unconditionally when forced. Returns whether an update
    /// took place.
    pub fn update_lrn_cutoff(&mut self, force: bool) -> bool {
        let candidate = self.clock.now_s() + self.config.collapse_time;
        if candidate - self.lrn_cutoff > LRN_CUTOFF_SLACK || force {
            self.lrn_cutoff = candidate;
            true
        } else {
            false
        }
    }

    fn check_day(&mut self, deck: &Deck) {
        if self.clock.now_s() > self.day_cutoff {
            self.reset(deck);
        }
    }

    fn update_cutoff(&mut self, deck: &Deck) {
        let now = self.clock.now_s();
        self.today = day_offset(now, deck.collection_crt);
        self.day_cutoff = clock::next_day_cutoff(now);
        debug!(today = self.today, cutoff = self.day_cutoff, "recomputed day window");
    }

    fn reset_lrn(&mut self) {
        self.update_lrn_cutoff(true);
        self.queues.clear_lrn();
    }

    fn reset_rev(&mut self) {
        self.queues.clear_rev();
    }

    /// Clears and refills the new queue, then recomputes the interleaving
    /// ratio. Runs after `reset_rev` so the ratio sees the new day's review
    /// queue.
    fn reset_new(&mut self, deck: &Deck) {
        self.queues.clear_new();
        self.queues.fill_new(&deck.cards, self.config.new_per_day);
        self.queues
            .fill_rev(&deck.cards, self.today, self.config.rev_per_day);
        self.queues.update_new_card_ratio(self.config.new_spread);
    }

    fn get_lrn_card(&mut self, deck: &Deck) -> Option<CardId> {
        let cutoff = self.clock.now_s() + self.config.collapse_time;
        self.queues
            .fill_lrn(&deck.cards, cutoff, self.config.report_limit);
        self.queues.pop_lrn()
    }

    fn get_new_card(&mut self, deck: &Deck) -> Option<CardId> {
        self.queues.fill_new(&deck.cards, self.config.new_per_day);
        self.queues.pop_new()
    }

    fn get_rev_card(&mut self, deck: &Deck) -> Option<CardId> {
        self.queues
            .fill_rev(&deck.cards, self.today, self.config.rev_per_day);
        self.queues.pop_rev()
    }

    fn time_for_new_card(&self) -> bool {
        if self.queues.new_is_empty() {
            return false;
        }
        match self.config.new_spread {
            NewSpread::Last => false,
            NewSpread::First => true,
            NewSpread::Distribute => {
                let modulus = self.queues.new_card_modulus();
                self.session_reps > 0 && modulus != 0 && self.session_reps % modulus == 0
            }
        }
    }

    /// Moves a never-seen card into its learning steps. The grade handler
    /// runs next with the same grade, so Easy still graduates early.
    fn answer_new_card(&self, card: &mut Card) {
        card.queue = CardQueue::Learning;
        card.stage = CardStage::Learning;
        card.left = self.starting_left(card);
    }

    fn answer_lrn_card(&self, card: &mut Card, grade: Grade) {
        match grade {
            Grade::Easy => self.reschedule_as_rev(card, true),
            Grade::Good => {
                let steps_left = steps::steps_remaining(card.left);
                if steps_left <= 1 {
                    self.reschedule_as_rev(card, false);
                } else {
                    let new_total = steps_left - 1;
                    let today_steps = steps::left_today(
                        self.lrn_conf(card),
                        new_total,
                        self.clock.now_s(),
                        self.day_cutoff,
                    );
                    card.left = today_steps * 1_000 + new_total;
                    self.reschedule_lrn_card(card, None);
                }
            }
            Grade::Hard => {
                let delay = steps::delay_for_repeating_grade(self.lrn_conf(card), card.left);
                self.reschedule_lrn_card(card, Some(delay));
            }
            Grade::Again => self.move_to_first_step(card),
        }
    }

    fn answer_rev_card(&self, card: &mut Card, notes: &mut [Note], grade: Grade) {
        match grade {
            Grade::Again => self.reschedule_lapse(card, notes),
            Grade::Hard | Grade::Good | Grade::Easy => self.reschedule_rev(card),
        }
    }

    fn reschedule_lapse(&self, card: &mut Card, notes: &mut [Note]) {
        card.lapses += 1;
        card.factor = card
            .factor
            .saturating_sub(LAPSE_FACTOR_PENALTY)
            .max(MINIMUM_FACTOR);
        if self.check_leech(card, notes) {
            update_rev_ivl_on_fail(card, &self.config);
        } else {
            // The stage stays on Review so the lapse steps apply while the
            // card relearns. The review interval is untouched on this path;
            // it only shrinks through a further Again while relearning.
            card.stage = CardStage::Review;
            self.move_to_first_step(card);
        }
    }

    /// Pushes a reviewed card out by its current interval.
    ///
    /// TODO: grow the interval and adjust the ease factor per SM-2. The
    /// answer dynamics for Hard/Good/Easy are not settled yet, so the
    /// interval is carried unchanged for now.
    fn reschedule_rev(&self, card: &mut Card) {
        card.ivl = card.ivl.max(1);
        card.due = i64::from(self.today) + i64::from(card.ivl);
        card.stage = CardStage::Review;
        card.queue = CardQueue::Review;
    }

    fn check_leech(&self, card: &mut Card, notes: &mut [Note]) -> bool {
        if card.lapses < self.config.leech_fails {
            return false;
        }
        if let Some(note) = notes.iter_mut().find(|note| note.id == card.note_id) {
            note.add_tag(LEECH_TAG);
        }
        card.queue = CardQueue::Suspended;
        info!(card = %card.id, lapses = card.lapses, "card suspended as leech");
        true
    }

    fn move_to_first_step(&self, card: &mut Card) {
        card.left = self.starting_left(card);
        if card.stage == CardStage::Relearning {
            update_rev_ivl_on_fail(card, &self.config);
        }
        self.reschedule_lrn_card(card, None);
    }

    fn reschedule_lrn_card(&self, card: &mut Card, delay: Option<i64>) {
        let delay =
            delay.unwrap_or_else(|| steps::delay_for_grade(self.lrn_conf(card), card.left));
        card.due = self.clock.now_s() + delay;
        card.queue = CardQueue::Learning;
    }

    fn reschedule_as_rev(&self, card: &mut Card, early: bool) {
        if card.stage == CardStage::Review {
            self.reschedule_graduating_lapse(card);
        } else {
            self.reschedule_new(card, early);
        }
    }

    /// Returns a relearned card to review at its preserved interval.
    fn reschedule_graduating_lapse(&self, card: &mut Card) {
        card.due = i64::from(self.today) + i64::from(card.ivl);
        card.stage = CardStage::Review;
        card.queue = CardQueue::Review;
    }

    /// Graduates a card out of its first learning sequence.
    fn reschedule_new(&self, card: &mut Card, early: bool) {
        card.ivl = self.graduating_ivl(card, early);
        card.due = i64::from(self.today) + i64::from(card.ivl);
        card.factor = self.config.initial_factor;
        card.stage = CardStage::Review;
        card.queue = CardQueue::Review;
    }

    fn graduating_ivl(&self, card: &Card, early: bool) -> i32 {
        if card.stage.is_graduated() {
            card.ivl
        } else if early {
            self.config.easy_ivl as i32
        } else {
            self.config.graduating_ivl as i32
        }
    }

    /// Step delays applicable to the card: graduated cards relearn through
    /// the lapse steps, everything else walks the new-card steps.
    fn lrn_conf(&self, card: &Card) -> &[u32] {
        if card.stage.is_graduated() {
            &self.config.lapse_steps
        } else {
            &self.config.new_steps
        }
    }

    fn starting_left(&self, card: &Card) -> u32 {
        steps::starting_left(self.lrn_conf(card), self.clock.now_s(), self.day_cutoff)
    }
}

fn day_offset(now: i64, crt: Option<i64>) -> u32 {
    let Some(crt) = crt else {
        return 0;
    };
    (now - crt).div_euclid(clock::SECS_PER_DAY).max(0) as u32
}

/// Shrinks the review interval after a failed review, respecting the
/// configured floor.
fn update_rev_ivl_on_fail(card: &mut Card, config: &SchedulerConfig) {
    let scaled = (f64::from(card.ivl) * f64::from(config.lapse_mult)).floor();
    let scaled = scaled.to_i32().unwrap_or(i32::MAX);
    card.ivl = scaled.max(config.lapse_min_ivl as i32).max(1);
}
