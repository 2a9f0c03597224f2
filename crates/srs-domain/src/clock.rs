//! Wall-clock capability and day-boundary arithmetic.

use std::cell::Cell;
use std::rc::Rc;

use chrono::Utc;

/// Seconds in one UTC day.
pub const SECS_PER_DAY: i64 = 86_400;

/// Source of wall-clock time in epoch seconds and milliseconds.
///
/// Every time read in the scheduler goes through this capability so tests
/// can drive sessions deterministically.
pub trait Clock {
    /// Current time in seconds since the Unix epoch.
    fn now_s(&self) -> i64;

    /// Current time in milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64;
}

/// Clock backed by the system time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_s(&self) -> i64 {
        Utc::now().timestamp()
    }

    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Hand-driven clock for test harnesses.
///
/// Clones share the same underlying instant, so a harness keeps one handle
/// to advance time while the scheduler owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Rc<Cell<i64>>,
}

impl ManualClock {
    /// Creates a clock pinned at the given epoch second.
    #[must_use]
    pub fn at_secs(secs: i64) -> Self {
        Self {
            now_ms: Rc::new(Cell::new(secs * 1_000)),
        }
    }

    /// Repins the clock at the given epoch second.
    pub fn set_secs(&self, secs: i64) {
        self.now_ms.set(secs * 1_000);
    }

    /// Moves the clock forward by the given number of milliseconds.
    pub fn advance_ms(&self, ms: i64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }

    /// Moves the clock forward by whole seconds.
    pub fn advance_secs(&self, secs: i64) {
        self.advance_ms(secs * 1_000);
    }

    /// Moves the clock forward by whole days.
    pub fn advance_days(&self, days: i64) {
        self.advance_secs(days * SECS_PER_DAY);
    }
}

impl Clock for ManualClock {
    fn now_s(&self) -> i64 {
        self.now_ms.get().div_euclid(1_000)
    }

    fn now_ms(&self) -> i64 {
        self.now_ms.get()
    }
}

/// Epoch second of the UTC midnight starting the day that contains `now`.
#[must_use]
pub fn start_of_day(now: i64) -> i64 {
    now.div_euclid(SECS_PER_DAY) * SECS_PER_DAY
}

/// Epoch second of the next UTC midnight strictly after `now`.
///
/// A `now` that falls exactly on midnight rolls over to the following
/// midnight, so no day ever has zero length.
#[must_use]
pub fn next_day_cutoff(now: i64) -> i64 {
    (now.div_euclid(SECS_PER_DAY) + 1) * SECS_PER_DAY
}
