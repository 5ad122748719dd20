//! A single roll and the points credited to it.

use crate::error::BowlingError;
use crate::rules::validate_pins;
use serde::Serialize;
use tracing::instrument;

/// One ball thrown: pins knocked down plus accumulated points.
///
/// Points start at the pin count and grow when later rolls pay out a
/// strike or spare bonus. Fill balls in the tenth frame (`bonus`) start
/// at zero points; they only feed bonuses owed to earlier rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Roll {
    pins: u8,
    points: u16,
    bonus: bool,
}

impl Roll {
    /// Creates a roll.
    ///
    /// # Errors
    ///
    /// Returns [`BowlingError::InvalidPins`] if `pins` is outside `0..=10`.
    #[instrument]
    pub fn new(pins: i32, bonus: bool) -> Result<Self, BowlingError> {
        let pins = validate_pins(pins)?;
        Ok(Self {
            pins,
            points: if bonus { 0 } else { u16::from(pins) },
            bonus,
        })
    }

    /// Credits bonus points to this roll.
    pub fn add_points(&mut self, points: u16) {
        self.points += points;
    }

    /// Pins knocked down.
    pub fn pins(&self) -> u8 {
        self.pins
    }

    /// Points credited so far.
    pub fn points(&self) -> u16 {
        self.points
    }

    /// Whether this is a tenth-frame fill ball.
    pub fn is_bonus(&self) -> bool {
        self.bonus
    }
}
