//! Score ceiling invariant: the score sits between raw pins and 300.

use super::Invariant;
use crate::game::BowlingGame;
use crate::rules::PERFECT_SCORE;

/// Invariant: the score never exceeds a perfect game and never falls
/// below the pins knocked down outside fill balls.
pub struct ScoreCeilingInvariant;

impl Invariant<BowlingGame> for ScoreCeilingInvariant {
    fn holds(game: &BowlingGame) -> bool {
        let floor: u16 = game
            .frames()
            .iter()
            .flat_map(|f| f.rolls())
            .filter(|r| !r.is_bonus())
            .map(|r| u16::from(r.pins()))
            .sum();
        let score = game.score();

        floor <= score && score <= PERFECT_SCORE
    }

    fn description() -> &'static str {
        "Score is at least the raw pins and at most 300"
    }
}
