//! Formal verification of bowling invariants using Kani model checker.
//!
//! These proof harnesses verify that invariants hold for all pin
//! counts over short roll sequences (bounded).

#[cfg(kani)]
mod proofs {
    use crate::{
        BowlingGame, BowlingInvariants, FrameCapacityInvariant, Invariant, InvariantSet,
        PERFECT_SCORE,
    };

    /// Out-of-range pins never change the game.
    #[kani::proof]
    fn verify_out_of_range_rejected() {
        let pins: i32 = kani::any();
        kani::assume(!(0..=10).contains(&pins));

        let mut game = BowlingGame::new();
        assert!(game.roll(pins).is_err());
        assert_eq!(game.score(), 0);
        assert_eq!(game.roll_count(), 0);
    }

    /// Any two accepted rolls keep every frame within capacity.
    #[kani::proof]
    #[kani::unwind(4)]
    fn verify_two_rolls_within_capacity() {
        let first: i32 = kani::any();
        let second: i32 = kani::any();

        let mut game = BowlingGame::new();
        if game.roll(first).is_ok() && game.roll(second).is_ok() {
            assert!(FrameCapacityInvariant::holds(&game));
            assert!(BowlingInvariants::check_all(&game).is_ok());
            assert!(game.score() <= PERFECT_SCORE);
        }
    }
}
