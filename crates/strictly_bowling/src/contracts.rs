//! Contract-based validation for rolls.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} roll {Q}

use crate::error::BowlingError;
use crate::frame::Frame;
use crate::game::BowlingGame;
use crate::invariants::{BowlingInvariants, InvariantSet};
use crate::roll::Roll;
use crate::rules::{LAST_FRAME, validate_pins};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), BowlingError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), BowlingError>;
}

// ─────────────────────────────────────────────────────────────
//  Roll Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the pin count is between 0 and 10.
pub struct PinsInRange;

impl PinsInRange {
    /// Returns the validated pin count.
    pub fn check(pins: i32) -> Result<u8, BowlingError> {
        validate_pins(pins)
    }
}

/// Precondition: some frame can still take a roll.
pub struct FrameAvailable;

impl FrameAvailable {
    /// Returns the frame the next roll would land in.
    ///
    /// That is the current frame unless it is done, in which case it is
    /// the next one. A done tenth frame means the game is over.
    #[instrument(skip(game), fields(frame = game.current_frame_index() + 1))]
    pub fn check(game: &BowlingGame) -> Result<&Frame, BowlingError> {
        let current = game.current_frame();
        if !current.is_done() {
            return Ok(current);
        }
        if game.current_frame_index() == LAST_FRAME {
            return Err(BowlingError::GameOver);
        }
        game.frame(game.current_frame_index() + 1)
            .ok_or(BowlingError::GameOver)
    }
}

/// Precondition: enough pins are standing in the target frame.
pub struct PinsStanding;

impl PinsStanding {
    /// Checks `pins` against the frame's standing pins and roll budget.
    pub fn check(pins: u8, frame: &Frame) -> Result<(), BowlingError> {
        let roll = Roll::new(i32::from(pins), frame.is_bonus())?;
        frame.check_roll(&roll)
    }
}

/// Composite precondition: a roll is legal if its pins are in range,
/// a frame is available and the pins are standing.
pub struct LegalRoll;

impl LegalRoll {
    /// Validates all preconditions for a roll.
    pub fn check(pins: i32, game: &BowlingGame) -> Result<(), BowlingError> {
        let pins = PinsInRange::check(pins)?;
        let frame = FrameAvailable::check(game)?;
        PinsStanding::check(pins, frame)
    }
}

// ─────────────────────────────────────────────────────────────
//  Roll Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for roll actions.
///
/// Preconditions:
/// - Pins between 0 and 10
/// - A frame is available
/// - The pins are standing
///
/// Postconditions:
/// - Exactly one roll was added
/// - Score did not decrease
/// - All bowling invariants hold
pub struct RollContract;

impl Contract<BowlingGame, i32> for RollContract {
    fn pre(game: &BowlingGame, pins: &i32) -> Result<(), BowlingError> {
        LegalRoll::check(*pins, game)
    }

    fn post(before: &BowlingGame, after: &BowlingGame) -> Result<(), BowlingError> {
        if after.roll_count() != before.roll_count() + 1 {
            warn!(
                before = before.roll_count(),
                after = after.roll_count(),
                "Roll count did not advance by one"
            );
            return Err(BowlingError::InvariantViolation(
                "Postcondition failed: exactly one roll is recorded".to_string(),
            ));
        }
        if after.score() < before.score() {
            warn!(before = before.score(), after = after.score(), "Score decreased");
            return Err(BowlingError::InvariantViolation(
                "Postcondition failed: score never decreases".to_string(),
            ));
        }

        BowlingInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated");
            BowlingError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
