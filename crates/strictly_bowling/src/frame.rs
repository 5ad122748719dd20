//! Frames: groups of rolls with strike/spare detection.
//!
//! A single [`Frame`] type covers both shapes. The tenth frame differs in
//! exactly two places: it grows an extra roll after a strike or spare, and
//! it re-racks the pins whenever they are all knocked down.

use crate::error::BowlingError;
use crate::roll::Roll;
use crate::rules::{BASE_ROLLS, MAX_PINS};
use serde::Serialize;
use tracing::{instrument, warn};

/// Which of the two frame shapes a frame has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum FrameKind {
    /// Frames one through nine: at most two rolls, one rack.
    Regular,
    /// The tenth frame: up to three rolls, re-racked after a clear.
    Last,
}

/// A frame and the rolls made within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    kind: FrameKind,
    pub(crate) rolls: Vec<Roll>,
    available_rolls: u8,
    available_pins: u8,
}

impl Frame {
    /// Creates an empty frame of the given kind.
    pub fn new(kind: FrameKind) -> Self {
        Self {
            kind,
            rolls: Vec::with_capacity(usize::from(BASE_ROLLS)),
            available_rolls: BASE_ROLLS,
            available_pins: MAX_PINS,
        }
    }

    /// Creates one of frames one through nine.
    pub fn regular() -> Self {
        Self::new(FrameKind::Regular)
    }

    /// Creates the tenth frame.
    pub fn last() -> Self {
        Self::new(FrameKind::Last)
    }

    /// Returns the frame kind.
    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    /// Returns true for the tenth frame.
    pub fn is_last(&self) -> bool {
        self.kind == FrameKind::Last
    }

    /// Records a roll in this frame and returns it.
    ///
    /// # Errors
    ///
    /// - [`BowlingError::InvalidPins`] if `pins` is outside `0..=10`.
    /// - [`BowlingError::FrameComplete`] if the frame has no rolls left.
    /// - [`BowlingError::TooManyPins`] if fewer than `pins` are standing.
    ///
    /// The frame is left untouched on error.
    #[instrument(skip(self), fields(kind = %self.kind, rolls = self.rolls.len()))]
    pub fn add_roll(&mut self, pins: i32) -> Result<&Roll, BowlingError> {
        let roll = Roll::new(pins, self.is_bonus())?;
        if let Err(e) = self.check_roll(&roll) {
            warn!(error = %e, "Roll rejected by frame");
            return Err(e);
        }

        self.rolls.push(roll);
        self.handle_available_rolls();
        self.handle_available_pins(roll.pins());

        self.current_roll()
    }

    /// Explains why `roll` cannot be added, if it cannot.
    pub fn check_roll(&self, roll: &Roll) -> Result<(), BowlingError> {
        if self.is_done() {
            return Err(BowlingError::FrameComplete);
        }
        if roll.pins() > self.available_pins {
            return Err(BowlingError::TooManyPins {
                pins: roll.pins(),
                standing: self.available_pins,
            });
        }
        Ok(())
    }

    /// Checks whether `roll` can be added to this frame.
    pub fn can_roll(&self, roll: &Roll) -> bool {
        self.check_roll(roll).is_ok()
    }

    /// All ten pins on the first roll.
    pub fn is_strike(&self) -> bool {
        matches!(self.rolls.as_slice(), [only] if only.pins() == MAX_PINS)
    }

    /// All ten pins across the first two rolls, the first not a strike.
    ///
    /// Fill balls never turn a tenth frame into a spare after the fact.
    pub fn is_spare(&self) -> bool {
        matches!(
            self.rolls.as_slice(),
            [first, second]
                if first.pins() != MAX_PINS && first.pins() + second.pins() == MAX_PINS
        )
    }

    /// No further rolls are accepted.
    ///
    /// A regular frame also ends on a strike, whatever its roll budget says.
    pub fn is_done(&self) -> bool {
        let exhausted = self.rolls.len() >= usize::from(self.available_rolls);
        match self.kind {
            FrameKind::Regular => exhausted || self.is_strike(),
            FrameKind::Last => exhausted,
        }
    }

    /// Rolls made from here on are fill balls.
    pub fn is_bonus(&self) -> bool {
        self.available_rolls > BASE_ROLLS
    }

    /// Returns the most recent roll.
    ///
    /// # Errors
    ///
    /// Returns [`BowlingError::NoRolls`] if nothing has been rolled yet.
    pub fn current_roll(&self) -> Result<&Roll, BowlingError> {
        self.rolls.last().ok_or(BowlingError::NoRolls)
    }

    /// Index of the most recent roll.
    pub(crate) fn current_roll_index(&self) -> Result<usize, BowlingError> {
        self.rolls.len().checked_sub(1).ok_or(BowlingError::NoRolls)
    }

    /// Mutable access for bonus payouts.
    pub(crate) fn roll_mut(&mut self, index: usize) -> Option<&mut Roll> {
        self.rolls.get_mut(index)
    }

    /// Grants extra rolls to the tenth frame.
    ///
    /// # Errors
    ///
    /// - [`BowlingError::BonusRollsNotAllowed`] on frames one through nine.
    /// - [`BowlingError::BonusRollOverflow`] if the roll budget would overflow.
    #[instrument(skip(self), fields(kind = %self.kind))]
    pub fn add_bonus_rolls(&mut self, rolls: u8) -> Result<(), BowlingError> {
        match self.kind {
            FrameKind::Regular => Err(BowlingError::BonusRollsNotAllowed),
            FrameKind::Last => {
                self.available_rolls = self.available_rolls.checked_add(rolls).ok_or(
                    BowlingError::BonusRollOverflow {
                        requested: rolls,
                        available: self.available_rolls,
                    },
                )?;
                Ok(())
            }
        }
    }

    /// Points credited to this frame so far, bonuses included.
    pub fn points(&self) -> u16 {
        self.rolls.iter().map(Roll::points).sum()
    }

    /// Raw pins knocked down in this frame.
    pub fn pins(&self) -> u16 {
        self.rolls.iter().map(|r| u16::from(r.pins())).sum()
    }

    /// Rolls made so far.
    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    /// Rolls this frame may hold in total.
    pub fn available_rolls(&self) -> u8 {
        self.available_rolls
    }

    /// Pins currently standing.
    pub fn available_pins(&self) -> u8 {
        self.available_pins
    }

    fn handle_available_rolls(&mut self) {
        if self.kind == FrameKind::Last && !self.is_bonus() && (self.is_strike() || self.is_spare())
        {
            self.available_rolls += 1;
        }
    }

    fn handle_available_pins(&mut self, pins: u8) {
        self.available_pins -= pins;
        if self.kind == FrameKind::Last && self.available_pins == 0 {
            self.available_pins = MAX_PINS;
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::regular()
    }
}
