//! Fixed rules of ten-pin bowling.
//!
//! Pin count, frame count and roll limits are compile-time constants.
//! Helpers here are pure functions so they can be reused by frames,
//! contracts and invariants alike.

use crate::error::BowlingError;
use tracing::instrument;

/// Pins standing in a full rack.
pub const MAX_PINS: u8 = 10;

/// Frames in one game.
pub const FRAMES: usize = 10;

/// Index of the tenth frame.
pub const LAST_FRAME: usize = FRAMES - 1;

/// Rolls every frame starts with.
pub const BASE_ROLLS: u8 = 2;

/// Most rolls the tenth frame can hold (strike or spare plus fill balls).
pub const LAST_FRAME_MAX_ROLLS: u8 = 3;

/// Most rolls a whole game can hold: nine open frames plus a full tenth.
pub const MAX_ROLLS: usize = (FRAMES - 1) * BASE_ROLLS as usize + LAST_FRAME_MAX_ROLLS as usize;

/// Score of twelve consecutive strikes.
pub const PERFECT_SCORE: u16 = 300;

/// Converts a raw pin count into a validated one.
///
/// # Errors
///
/// Returns [`BowlingError::InvalidPins`] unless `0 <= pins <= 10`.
#[instrument]
pub fn validate_pins(pins: i32) -> Result<u8, BowlingError> {
    u8::try_from(pins)
        .ok()
        .filter(|p| *p <= MAX_PINS)
        .ok_or(BowlingError::InvalidPins(pins))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pins_in_range_accepted() {
        for pins in 0..=10 {
            assert_eq!(validate_pins(pins), Ok(pins as u8));
        }
    }

    #[test]
    fn test_pins_out_of_range_rejected() {
        for pins in [-1, 11, i32::MIN, i32::MAX, 256] {
            assert_eq!(validate_pins(pins), Err(BowlingError::InvalidPins(pins)));
        }
    }

    #[test]
    fn test_roll_limits() {
        assert_eq!(MAX_ROLLS, 21);
        assert_eq!(LAST_FRAME, 9);
    }
}
