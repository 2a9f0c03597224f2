//! End-to-end selection and answering behaviour with an injected clock.

use srs_domain::{
    Card, CardId, CardQueue, CardStage, Deck, DeckId, Grade, ManualClock, Note, NoteId,
};
use srs_scheduler::{Scheduler, SchedulerConfig};

const DAY: i64 = 86_400;

fn anchored_deck() -> Deck {
    let mut deck = Deck::new(DeckId::new(1), "spanish");
    deck.collection_crt = Some(0);
    deck
}

fn push_new_card(deck: &mut Deck, id: u64) -> CardId {
    let note_id = NoteId::new(id);
    let card_id = CardId::new(id);
    deck.notes.push(Note::new(note_id));
    deck.cards.push(Card::new(card_id, note_id, 0));
    card_id
}

fn push_review_card(deck: &mut Deck, id: u64, due: i64, ivl: i32) -> CardId {
    let card_id = push_new_card(deck, id);
    let card = deck.card_mut(card_id).expect("card just pushed");
    card.stage = CardStage::Review;
    card.queue = CardQueue::Review;
    card.ivl = ivl;
    card.factor = 2_500;
    card.due = due;
    card_id
}

fn assert_invariants(deck: &Deck, config: &SchedulerConfig) {
    for card in &deck.cards {
        if card.factor > 0 {
            assert!(card.factor >= 1_300, "factor below floor: {}", card.factor);
        }
        match card.queue {
            CardQueue::New => {
                assert_eq!(card.ivl, 0);
                assert_eq!(card.factor, 0);
            }
            CardQueue::Learning => {
                assert!(card.left % 1_000 >= 1, "left lost its step: {}", card.left);
            }
            CardQueue::Review => {
                assert!(card.ivl >= 1);
                assert!(card.due >= 0);
            }
            CardQueue::Suspended => {
                assert!(card.lapses >= config.leech_fails);
                let note = deck.note(card.note_id).expect("note for card");
                assert!(note.has_tag("leech"));
            }
        }
    }
}

#[test]
fn empty_deck_yields_no_card() {
    let deck = anchored_deck();
    let mut scheduler = Scheduler::new(ManualClock::at_secs(DAY), SchedulerConfig::default());
    assert_eq!(scheduler.next_card(&deck), None);
    assert_eq!(scheduler.session_reps(), 0);
}

#[test]
fn good_on_a_new_card_enters_the_learning_steps() {
    let mut deck = anchored_deck();
    let card_id = push_new_card(&mut deck, 1);
    let config = SchedulerConfig::default();
    let mut scheduler = Scheduler::new(ManualClock::at_secs(DAY), config.clone());

    assert_eq!(scheduler.next_card(&deck), Some(card_id));
    scheduler
        .answer(&mut deck, card_id, Grade::Good)
        .expect("card is answerable");

    let card = deck.card(card_id).expect("card still in deck");
    assert_eq!(card.queue, CardQueue::Learning);
    assert_eq!(card.stage, CardStage::Learning);
    assert_eq!(card.left, 1_001, "one step left after Good consumed one");
    assert_eq!(card.due, DAY + 600, "second step is ten minutes out");
    assert_eq!(card.reps, 1);
    assert_invariants(&deck, &config);
}

#[test]
fn easy_on_a_new_card_graduates_early() {
    let mut deck = anchored_deck();
    let card_id = push_new_card(&mut deck, 1);
    let config = SchedulerConfig::default();
    let mut scheduler = Scheduler::new(ManualClock::at_secs(DAY), config.clone());

    assert_eq!(scheduler.next_card(&deck), Some(card_id));
    scheduler
        .answer(&mut deck, card_id, Grade::Easy)
        .expect("card is answerable");

    let card = deck.card(card_id).expect("card still in deck");
    assert_eq!(card.queue, CardQueue::Review);
    assert_eq!(card.stage, CardStage::Review);
    assert_eq!(card.ivl, 4);
    assert_eq!(card.factor, 2_500);
    assert_eq!(card.due, 1 + 4, "due four days after day one");
    assert_invariants(&deck, &config);
}

#[test]
fn good_twice_graduates_at_one_day() {
    let mut deck = anchored_deck();
    let card_id = push_new_card(&mut deck, 1);
    let clock = ManualClock::at_secs(DAY);
    let config = SchedulerConfig::default();
    let mut scheduler = Scheduler::new(clock.clone(), config.clone());

    assert_eq!(scheduler.next_card(&deck), Some(card_id));
    scheduler
        .answer(&mut deck, card_id, Grade::Good)
        .expect("card is answerable");

    clock.advance_secs(600);
    assert_eq!(
        scheduler.next_card(&deck),
        Some(card_id),
        "learning card is due again"
    );
    scheduler
        .answer(&mut deck, card_id, Grade::Good)
        .expect("card is answerable");

    let card = deck.card(card_id).expect("card still in deck");
    assert_eq!(card.queue, CardQueue::Review);
    assert_eq!(card.stage, CardStage::Review);
    assert_eq!(card.ivl, 1);
    assert_eq!(card.factor, 2_500);
    assert_eq!(card.due, 1 + 1, "due the day after graduation");
    assert_invariants(&deck, &config);
}

#[test]
fn distribute_interleaving_positions_new_cards_by_modulus() {
    let mut deck = anchored_deck();
    push_new_card(&mut deck, 1);
    push_new_card(&mut deck, 2);
    push_review_card(&mut deck, 11, 10, 5);
    push_review_card(&mut deck, 12, 10, 5);
    let mut scheduler = Scheduler::new(
        ManualClock::at_secs(10 * DAY),
        SchedulerConfig::default(),
    );

    let first = scheduler.next_card(&deck).expect("reviews are due");
    assert_eq!(scheduler.new_card_modulus(), 2);
    assert_eq!(
        deck.card(first).expect("card in deck").stage,
        CardStage::Review,
        "session opens with a review, not a new card"
    );
    scheduler
        .answer(&mut deck, first, Grade::Good)
        .expect("card is answerable");

    let second = scheduler.next_card(&deck).expect("one review remains");
    assert_eq!(
        deck.card(second).expect("card in deck").stage,
        CardStage::Review
    );
    scheduler
        .answer(&mut deck, second, Grade::Good)
        .expect("card is answerable");

    let third = scheduler.next_card(&deck).expect("new cards remain");
    let card = deck.card(third).expect("card in deck");
    assert_eq!(card.queue, CardQueue::New, "every second rep admits a new card");
    assert_eq!(card.id, CardId::new(1), "oldest new card comes first");
}

#[test]
fn review_order_is_reproducible_across_schedulers() {
    let mut deck = anchored_deck();
    for id in 1..=50 {
        push_review_card(&mut deck, id, 5, 3);
    }
    let clock = ManualClock::at_secs(10 * DAY);
    let mut first = Scheduler::new(clock.clone(), SchedulerConfig::default());
    let mut second = Scheduler::new(clock.clone(), SchedulerConfig::default());

    let order_a: Vec<_> = (0..50).map(|_| first.next_card(&deck)).collect();
    let order_b: Vec<_> = (0..50).map(|_| second.next_card(&deck)).collect();

    assert_eq!(order_a, order_b);
    assert!(order_a.iter().all(Option::is_some));
}

#[test]
fn skipped_cards_reappear_after_a_queue_rebuild() {
    let mut deck = anchored_deck();
    let card_id = push_new_card(&mut deck, 1);
    let mut scheduler = Scheduler::new(ManualClock::at_secs(DAY), SchedulerConfig::default());

    assert_eq!(scheduler.next_card(&deck), Some(card_id));
    // Not answered: the card keeps its state and survives the rebuild.
    scheduler.reset(&deck);
    assert_eq!(scheduler.next_card(&deck), Some(card_id));
}

#[test]
fn answering_an_unknown_card_fails() {
    let mut deck = anchored_deck();
    let mut scheduler = Scheduler::new(ManualClock::at_secs(DAY), SchedulerConfig::default());
    let err = scheduler
        .answer(&mut deck, CardId::new(404), Grade::Good)
        .expect_err("card does not exist");
    assert!(matches!(
        err,
        srs_scheduler::SchedulerError::CardNotFound(id) if id == CardId::new(404)
    ));
}
