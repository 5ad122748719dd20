//! Pending bonus invariant: bonus pointers name rolls that exist.

use super::Invariant;
use crate::game::{BowlingGame, RollRef};

/// Invariant: each pending bonus points at an existing roll in a frame
/// no later than the current one.
pub struct PendingBonusInvariant;

impl PendingBonusInvariant {
    fn resolves(game: &BowlingGame, target: RollRef) -> bool {
        target.frame() <= game.current_frame_index()
            && game
                .frame(target.frame())
                .is_some_and(|f| target.roll() < f.rolls().len())
    }
}

impl Invariant<BowlingGame> for PendingBonusInvariant {
    fn holds(game: &BowlingGame) -> bool {
        [game.one_roll_bonus(), game.two_rolls_bonus()]
            .into_iter()
            .flatten()
            .all(|target| Self::resolves(game, target))
    }

    fn description() -> &'static str {
        "Pending bonuses point at rolls already made"
    }
}
