//! Learning-step arithmetic over the packed `left` counter.
//!
//! `left` encodes `steps_today * 1000 + steps_remaining`: the low three
//! digits count the steps a card must still pass before graduating, the
//! rest counts how many of those fit before the day cutoff.

/// Number of steps remaining, read from the low digits of `left`.
pub(crate) fn steps_remaining(left: u32) -> u32 {
    left % 1_000
}

/// Packs the step counters for a card entering a step sequence.
pub(crate) fn starting_left(delays: &[u32], now: i64, day_cutoff: i64) -> u32 {
    let total = delays.len() as u32;
    left_today(delays, total, now, day_cutoff) * 1_000 + total
}

/// Counts how many of the last `remaining` delays fit before the day
/// cutoff when walked forward from `now`.
///
/// At least one step is always permitted, even when it overflows into
/// tomorrow.
pub(crate) fn left_today(delays: &[u32], remaining: u32, now: i64, day_cutoff: i64) -> u32 {
    let start = delays.len().saturating_sub(remaining as usize);
    let mut reached = now;
    let mut fitting = 0;
    for &minutes in &delays[start..] {
        reached += i64::from(minutes) * 60;
        if reached > day_cutoff {
            break;
        }
        fitting += 1;
    }
    fitting.max(1)
}

/// Delay in seconds for the step the card currently sits on.
///
/// Step `n` of a sequence of `total` is stored as `steps_remaining ==
/// total - n`, so the delay is indexed from the back of the sequence. A
/// counter that does not map into the sequence falls back to the first
/// delay.
pub(crate) fn delay_for_grade(delays: &[u32], left: u32) -> i64 {
    let remaining = (steps_remaining(left) as usize).max(1);
    let index = delays.len().saturating_sub(remaining);
    let minutes = delays.get(index).copied().unwrap_or(1);
    i64::from(minutes) * 60
}

/// Delay applied when Hard repeats the current step: the integer average
/// of the current delay and the next one, never shorter than the current
/// delay.
pub(crate) fn delay_for_repeating_grade(delays: &[u32], left: u32) -> i64 {
    let current = delay_for_grade(delays, left);
    let next_steps = left.saturating_sub(1) % 1_000;
    let next = if next_steps == 0 {
        current
    } else {
        delay_for_grade(delays, left - 1)
    };
    (current + current.max(next)) / 2
}
