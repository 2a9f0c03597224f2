//! Millisecond-precise unique id generation.

use std::thread;
use std::time::Duration;

use crate::clock::Clock;

/// Issues strictly increasing 64-bit ids from the clock's millisecond
/// reading.
///
/// When a second id is requested within the same millisecond, the generator
/// sleeps until the clock advances, so every id doubles as a creation
/// timestamp. Uniqueness is only guaranteed within a single generator;
/// callers running multiple producers must serialise id generation
/// themselves.
#[derive(Debug)]
pub struct IdGen<C> {
    clock: C,
    last_ms: i64,
}

impl<C: Clock> IdGen<C> {
    /// Creates a generator reading from the given clock.
    pub fn new(clock: C) -> Self {
        Self { clock, last_ms: 0 }
    }

    /// Returns the next id, sleeping until the clock moves strictly past
    /// the previously issued millisecond.
    pub fn next_id(&mut self) -> u64 {
        let mut ms = self.clock.now_ms();
        while ms <= self.last_ms {
            thread::sleep(Duration::from_millis(1));
            ms = self.clock.now_ms();
        }
        self.last_ms = ms;
        ms as u64
    }
}
