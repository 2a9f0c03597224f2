//! Self-graded recall quality submitted with each answer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recall quality reported by the user on the `1..=4` scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    /// Failed to recall; the card returns to its first step.
    Again = 1,
    /// Recalled with difficulty; the current step repeats.
    Hard = 2,
    /// Recalled correctly.
    Good = 3,
    /// Recalled effortlessly; learning cards graduate early.
    Easy = 4,
}

/// Error produced when a raw grade value lies outside `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid grade: {grade} (expected 1-4)")]
pub struct GradeError {
    /// The rejected raw value.
    pub grade: u8,
}

impl Grade {
    /// Converts a raw `u8` into a [`Grade`].
    ///
    /// # Errors
    ///
    /// Returns [`GradeError`] when the value is outside `1..=4`.
    pub fn from_u8(grade: u8) -> Result<Self, GradeError> {
        match grade {
            1 => Ok(Grade::Again),
            2 => Ok(Grade::Hard),
            3 => Ok(Grade::Good),
            4 => Ok(Grade::Easy),
            _ => Err(GradeError { grade }),
        }
    }

    /// Returns the raw `u8` representation of the grade.
    #[must_use]
    pub fn to_u8(self) -> u8 {
        self as u8
    }
}
