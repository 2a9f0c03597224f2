//! Scheduler configuration governing queue limits, learning steps, and
//! lapse handling.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Policy controlling when new cards are interleaved into a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewSpread {
    /// Mix new cards between reviews at a cadence derived from the queue
    /// sizes.
    #[default]
    Distribute,
    /// Show new cards only once everything else is exhausted.
    Last,
    /// Show new cards before anything else.
    First,
}

/// Tunable scheduling parameters.
///
/// `SchedulerConfig::default()` matches the stock behaviour; use
/// [`SchedulerConfigBuilder`] to override individual knobs.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(default)]
pub struct SchedulerConfig {
    /// Interleaving policy for new cards.
    pub new_spread: NewSpread,
    /// Maximum number of new cards introduced per day.
    pub new_per_day: usize,
    /// Maximum number of review cards shown per day.
    pub rev_per_day: usize,
    /// Cap on a single learning-queue refill.
    pub report_limit: usize,
    /// Learn-ahead window in seconds: learning cards due within this window
    /// may be shown early.
    pub collapse_time: i64,
    /// Learning step delays in minutes for new cards.
    pub new_steps: Vec<u32>,
    /// Relearning step delays in minutes after a lapse.
    pub lapse_steps: Vec<u32>,
    /// Floor in days for the review interval after a failed review.
    pub lapse_min_ivl: u32,
    /// Multiplier applied to the review interval on a failed review.
    pub lapse_mult: f32,
    /// Lapse count at which a card is suspended as a leech.
    pub leech_fails: u32,
    /// Ease factor in permille assigned on first graduation.
    pub initial_factor: u32,
    /// Interval in days granted on normal graduation.
    pub graduating_ivl: u32,
    /// Interval in days granted when graduating early with Easy.
    pub easy_ivl: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            new_spread: NewSpread::Distribute,
            new_per_day: 20,
            rev_per_day: 200,
            report_limit: 1_000,
            collapse_time: 1_200,
            new_steps: vec![1, 10],
            lapse_steps: vec![10],
            lapse_min_ivl: 1,
            lapse_mult: 0.0,
            leech_fails: 8,
            initial_factor: 2_500,
            graduating_ivl: 1,
            easy_ivl: 4,
        }
    }
}
