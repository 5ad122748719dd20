//! Error types for bowling games.

use serde::Serialize;

/// Coarse classification of a [`BowlingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum ErrorKind {
    /// The pin count itself is out of range.
    InvalidInput,
    /// The roll is structurally illegal in the current game state.
    InvalidOperation,
    /// A query was made that the current state cannot answer.
    InvalidState,
}

/// Error that can occur when recording a roll or inspecting a frame.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BowlingError {
    /// Pin count outside `0..=10`.
    #[display("Invalid pin count {}: must be between 0 and 10", _0)]
    InvalidPins(i32),

    /// More pins than are standing in the frame.
    #[display("Cannot knock down {} pins with only {} standing", pins, standing)]
    TooManyPins {
        /// Pins the roll claimed.
        pins: u8,
        /// Pins left standing before the roll.
        standing: u8,
    },

    /// The frame has used all of its rolls.
    #[display("Frame is already complete")]
    FrameComplete,

    /// The tenth frame is complete, including fill balls.
    #[display("Game is already over")]
    GameOver,

    /// Only the tenth frame can be granted extra rolls.
    #[display("Bonus rolls are only allowed in the last frame")]
    BonusRollsNotAllowed,

    /// Extra rolls would overflow the frame's roll budget.
    #[display("Cannot grant {} bonus rolls on top of {}", requested, available)]
    BonusRollOverflow {
        /// Rolls asked for.
        requested: u8,
        /// Rolls the frame already allows.
        available: u8,
    },

    /// No roll has been made in the frame yet.
    #[display("No rolls have been made in this frame")]
    NoRolls,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl BowlingError {
    /// Returns the kind of failure this error represents.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BowlingError::InvalidPins(_) => ErrorKind::InvalidInput,
            BowlingError::TooManyPins { .. }
            | BowlingError::FrameComplete
            | BowlingError::GameOver
            | BowlingError::BonusRollsNotAllowed
            | BowlingError::BonusRollOverflow { .. } => ErrorKind::InvalidOperation,
            BowlingError::NoRolls | BowlingError::InvariantViolation(_) => {
                ErrorKind::InvalidState
            }
        }
    }
}

impl std::error::Error for BowlingError {}
