//! Frame capacity invariant: frames never hold more rolls or pins than allowed.

use super::Invariant;
use crate::frame::{Frame, FrameKind};
use crate::game::BowlingGame;
use crate::rules::{BASE_ROLLS, LAST_FRAME_MAX_ROLLS, MAX_PINS};

/// Invariant: every frame respects its roll and pin limits.
///
/// Frames one through nine hold at most two rolls knocking down at most
/// ten pins, and a strike stands alone. The tenth frame holds at most three.
pub struct FrameCapacityInvariant;

impl FrameCapacityInvariant {
    fn frame_holds(frame: &Frame) -> bool {
        let rolls = frame.rolls();
        match frame.kind() {
            FrameKind::Regular => {
                let strike_alone = match rolls.first() {
                    Some(first) if first.pins() == MAX_PINS => rolls.len() == 1,
                    _ => true,
                };
                rolls.len() <= usize::from(BASE_ROLLS)
                    && frame.pins() <= u16::from(MAX_PINS)
                    && strike_alone
            }
            FrameKind::Last => rolls.len() <= usize::from(LAST_FRAME_MAX_ROLLS),
        }
    }
}

impl Invariant<BowlingGame> for FrameCapacityInvariant {
    fn holds(game: &BowlingGame) -> bool {
        game.frames().iter().all(Self::frame_holds)
    }

    fn description() -> &'static str {
        "Frames hold no more rolls or pins than the rules allow"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::Roll;

    #[test]
    fn test_empty_game_holds() {
        assert!(FrameCapacityInvariant::holds(&BowlingGame::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let game = BowlingGame::replay(&[
            10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1,
        ])
        .unwrap();
        assert!(FrameCapacityInvariant::holds(&game));
    }

    #[test]
    fn test_last_frame_with_three_rolls_holds() {
        let mut rolls = vec![0; 18];
        rolls.extend([10, 10, 10]);
        let game = BowlingGame::replay(&rolls).unwrap();
        assert!(FrameCapacityInvariant::holds(&game));
    }

    #[test]
    fn test_overfull_frame_violates() {
        let mut game = BowlingGame::replay(&[10]).unwrap();
        // A second roll behind a regular-frame strike
        game.frames[0].rolls.push(Roll::new(3, false).unwrap());
        assert!(!FrameCapacityInvariant::holds(&game));
    }
}
