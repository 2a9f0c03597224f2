//! Minimal example demonstrating a study session.
//!
//! Run with: `cargo run -p srs-scheduler --example quickstart`

use srs_domain::clock::Clock;
use srs_domain::{Collection, CollectionId, Deck, DeckId, Grade, IdGen, SystemClock};
use srs_scheduler::{Scheduler, SchedulerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let clock = SystemClock;
    let mut ids = IdGen::new(clock);

    // 1. Build a deck with a few notes; each note generates one card.
    let mut deck = Deck::new(DeckId::new(ids.next_id()), "demo");
    for _ in 0..3 {
        deck.add_note(&mut ids);
    }

    // 2. Attach the deck to a collection so review due dates have a
    //    day-zero anchor.
    let mut collection = Collection::new(CollectionId::new(ids.next_id()), "demo", clock.now_s());
    let deck = collection.add_deck(deck);

    // 3. Study until the scheduler has nothing left to show.
    let mut scheduler = Scheduler::new(clock, SchedulerConfig::default());
    while let Some(card_id) = scheduler.next_card(deck) {
        scheduler.answer(deck, card_id, Grade::Good)?;
        let card = deck.card(card_id).expect("card came from this deck");
        println!(
            "answered {card_id}: stage {:?}, due marker {}",
            card.stage, card.due
        );
    }
    println!("session complete after {} cards", scheduler.session_reps());

    Ok(())
}
