//! Game orchestration and strike/spare bonus propagation.
//!
//! Bonuses are paid by reference: a strike leaves a pointer to its roll
//! that collects the next two rolls' pins, a spare one that collects the
//! next roll's pins. Pointers are arena indices into the game's own frames.

use crate::contracts::{Contract, RollContract};
use crate::error::BowlingError;
use crate::frame::Frame;
use crate::rules::{FRAMES, LAST_FRAME, validate_pins};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Position of a roll inside a game: frame index plus roll index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_new::new)]
pub struct RollRef {
    frame: usize,
    roll: usize,
}

impl RollRef {
    /// Zero-based frame index.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Zero-based roll index within the frame.
    pub fn roll(&self) -> usize {
        self.roll
    }
}

/// Whether a game still accepts rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum GameStatus {
    /// More rolls are expected.
    InProgress,
    /// The tenth frame is complete, fill balls included.
    Complete,
}

/// One game of ten-pin bowling for a single bowler.
///
/// Frames are built up front; rolls are routed to the current frame and
/// the frame advances lazily, right before the roll that needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BowlingGame {
    pub(crate) frames: [Frame; FRAMES],
    pub(crate) current: usize,
    pub(crate) one_roll_bonus: Option<RollRef>,
    pub(crate) two_rolls_bonus: Option<RollRef>,
}

impl BowlingGame {
    /// Creates a game with nine regular frames and a tenth.
    #[instrument]
    pub fn new() -> Self {
        Self {
            frames: std::array::from_fn(|i| {
                if i == LAST_FRAME {
                    Frame::last()
                } else {
                    Frame::regular()
                }
            }),
            current: 0,
            one_roll_bonus: None,
            two_rolls_bonus: None,
        }
    }

    /// Records a roll.
    ///
    /// Pending bonuses are paid from this roll's pins before the roll is
    /// checked for a new strike or spare.
    ///
    /// # Errors
    ///
    /// - [`BowlingError::InvalidPins`] if `pins` is outside `0..=10`.
    /// - [`BowlingError::TooManyPins`] if fewer pins are standing.
    /// - [`BowlingError::GameOver`] once the tenth frame is complete.
    ///
    /// Nothing is changed when an error is returned.
    #[instrument(skip(self), fields(frame = self.current + 1))]
    pub fn roll(&mut self, pins: i32) -> Result<(), BowlingError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        if let Err(e) = RollContract::pre(self, &pins) {
            warn!(error = %e, "Roll rejected");
            return Err(e);
        }
        let pins = validate_pins(pins)?;

        if self.frames[self.current].is_done() {
            self.current += 1;
            debug!(frame = self.current + 1, "Advanced to next frame");
        }

        self.frames[self.current].add_roll(i32::from(pins))?;
        self.apply_pending_bonuses(u16::from(pins));
        self.register_bonus()?;

        // Postcondition: verify contract in debug builds
        #[cfg(debug_assertions)]
        RollContract::post(&before, self)?;

        Ok(())
    }

    /// Checks whether `roll(pins)` would be accepted, without rolling.
    pub fn can_roll(&self, pins: i32) -> bool {
        RollContract::pre(self, &pins).is_ok()
    }

    /// Score so far, including every bonus paid out up to now.
    pub fn score(&self) -> u16 {
        self.frames.iter().map(Frame::points).sum()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        if self.frames[LAST_FRAME].is_done() {
            GameStatus::Complete
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns true once no more rolls are accepted.
    pub fn is_complete(&self) -> bool {
        self.status() == GameStatus::Complete
    }

    /// All ten frames.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frame by zero-based index.
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Zero-based index of the frame that received the latest roll.
    pub fn current_frame_index(&self) -> usize {
        self.current
    }

    /// Frame that received the latest roll.
    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.current]
    }

    /// Rolls recorded across the whole game.
    pub fn roll_count(&self) -> usize {
        self.frames.iter().map(|f| f.rolls().len()).sum()
    }

    /// Roll still owed the pins of exactly one more roll.
    pub fn one_roll_bonus(&self) -> Option<RollRef> {
        self.one_roll_bonus
    }

    /// Strike still owed the pins of the next two rolls.
    pub fn two_rolls_bonus(&self) -> Option<RollRef> {
        self.two_rolls_bonus
    }

    /// Builds a game from a sequence of rolls.
    ///
    /// # Errors
    ///
    /// Returns the error of the first rejected roll.
    #[instrument]
    pub fn replay(rolls: &[i32]) -> Result<Self, BowlingError> {
        let mut game = Self::new();
        for &pins in rolls {
            game.roll(pins)?;
        }
        Ok(game)
    }

    fn apply_pending_bonuses(&mut self, pins: u16) {
        if let Some(target) = self.one_roll_bonus.take() {
            self.credit(target, pins);
        }
        if let Some(target) = self.two_rolls_bonus.take() {
            self.credit(target, pins);
            self.one_roll_bonus = Some(target);
        }
    }

    fn credit(&mut self, target: RollRef, pins: u16) {
        match self.frames.get_mut(target.frame).and_then(|f| f.roll_mut(target.roll)) {
            Some(roll) => {
                roll.add_points(pins);
                debug!(
                    frame = target.frame + 1,
                    roll = target.roll + 1,
                    pins,
                    points = roll.points(),
                    "Bonus paid"
                );
            }
            None => warn!(?target, "Bonus target does not exist"),
        }
    }

    fn register_bonus(&mut self) -> Result<(), BowlingError> {
        let frame = &self.frames[self.current];
        let target = RollRef::new(self.current, frame.current_roll_index()?);
        if frame.is_strike() {
            debug!(frame = self.current + 1, "Strike");
            self.two_rolls_bonus = Some(target);
        } else if frame.is_spare() {
            debug!(frame = self.current + 1, "Spare");
            self.one_roll_bonus = Some(target);
        }
        Ok(())
    }
}

impl Default for BowlingGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::PERFECT_SCORE;

    #[test]
    fn test_new_game_is_empty() {
        let game = BowlingGame::new();
        assert_eq!(game.score(), 0);
        assert_eq!(game.roll_count(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.frames().len(), FRAMES);
        assert!(game.frames()[LAST_FRAME].is_last());
        assert!(game.frames()[..LAST_FRAME].iter().all(|f| !f.is_last()));
    }

    #[test]
    fn test_strike_pointer_demotes_then_clears() {
        let mut game = BowlingGame::new();
        game.roll(10).unwrap();
        assert_eq!(game.two_rolls_bonus(), Some(RollRef::new(0, 0)));
        assert_eq!(game.one_roll_bonus(), None);

        game.roll(3).unwrap();
        assert_eq!(game.two_rolls_bonus(), None);
        assert_eq!(game.one_roll_bonus(), Some(RollRef::new(0, 0)));
        assert_eq!(game.current_frame_index(), 1);

        game.roll(4).unwrap();
        assert_eq!(game.one_roll_bonus(), None);
        assert_eq!(game.frames()[0].points(), 17);
        assert_eq!(game.score(), 24);
    }

    #[test]
    fn test_spare_pointer_targets_second_roll() {
        let mut game = BowlingGame::new();
        game.roll(9).unwrap();
        game.roll(1).unwrap();
        assert_eq!(game.one_roll_bonus(), Some(RollRef::new(0, 1)));
        game.roll(4).unwrap();
        assert_eq!(game.frames()[0].rolls()[1].points(), 5);
        assert_eq!(game.score(), 18);
    }

    #[test]
    fn test_frame_advances_lazily() {
        let mut game = BowlingGame::new();
        game.roll(3).unwrap();
        game.roll(4).unwrap();
        assert_eq!(game.current_frame_index(), 0);
        game.roll(5).unwrap();
        assert_eq!(game.current_frame_index(), 1);
    }

    #[test]
    fn test_perfect_game() {
        let game = BowlingGame::replay(&[10; 12]).unwrap();
        assert_eq!(game.score(), PERFECT_SCORE);
        assert!(game.is_complete());
        assert_eq!(game.roll_count(), 12);
    }

    #[test]
    fn test_rejected_roll_leaves_game_unchanged() {
        let mut game = BowlingGame::replay(&[10, 7]).unwrap();
        let before = game.clone();
        assert_eq!(
            game.roll(7),
            Err(BowlingError::TooManyPins { pins: 7, standing: 3 })
        );
        assert_eq!(game.roll(11), Err(BowlingError::InvalidPins(11)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_can_roll_matches_roll() {
        let game = BowlingGame::replay(&[6]).unwrap();
        assert!(game.can_roll(4));
        assert!(!game.can_roll(5));
        assert!(!game.can_roll(-1));

        let done = BowlingGame::replay(&[0; 20]).unwrap();
        assert!(!done.can_roll(0));
    }

    #[test]
    fn test_game_over_after_open_tenth() {
        let mut game = BowlingGame::replay(&[0; 20]).unwrap();
        assert!(game.is_complete());
        assert_eq!(game.roll(0), Err(BowlingError::GameOver));
    }
}
