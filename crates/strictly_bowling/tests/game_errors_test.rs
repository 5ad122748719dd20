//! Rejected rolls and error classification.

use strictly_bowling::{BowlingError, BowlingGame, ErrorKind};

fn first_error(rolls: &[i32]) -> BowlingError {
    let mut game = BowlingGame::new();
    for &pins in rolls {
        if let Err(e) = game.roll(pins) {
            return e;
        }
    }
    panic!("rolls {rolls:?} were all accepted");
}

#[test]
fn test_negative_pins() {
    let err = first_error(&[-1]);
    assert_eq!(err, BowlingError::InvalidPins(-1));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_over_ten_pins() {
    let err = first_error(&[11]);
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_invalid_pins_in_any_state() {
    for prefix in [vec![], vec![3], vec![10, 10], vec![0; 20]] {
        let mut game = BowlingGame::replay(&prefix).unwrap();
        assert_eq!(game.roll(-1).unwrap_err().kind(), ErrorKind::InvalidInput);
        assert_eq!(game.roll(11).unwrap_err().kind(), ErrorKind::InvalidInput);
    }
}

#[test]
fn test_over_ten_in_frame() {
    let err = first_error(&[7, 7]);
    assert_eq!(err, BowlingError::TooManyPins { pins: 7, standing: 3 });
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);
}

#[test]
fn test_too_many_rolls() {
    let err = first_error(&[0; 21]);
    assert_eq!(err, BowlingError::GameOver);
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);
}

#[test]
fn test_strike_then_too_many_rolls() {
    let mut rolls = vec![10];
    rolls.extend([0; 20]);
    let mut game = BowlingGame::new();
    for (i, &pins) in rolls.iter().enumerate() {
        let result = game.roll(pins);
        if i < 19 {
            assert!(result.is_ok(), "roll {} should be accepted", i + 1);
        } else {
            assert_eq!(result, Err(BowlingError::GameOver));
            break;
        }
    }
}

#[test]
fn test_four_strikes_in_last_frame() {
    let mut rolls = vec![0; 18];
    rolls.extend([10, 10, 10, 10]);
    assert_eq!(first_error(&rolls), BowlingError::GameOver);
}

#[test]
fn test_strike_in_last_frame_then_too_many_rolls() {
    let mut rolls = vec![0; 18];
    rolls.extend([10, 0, 0, 0]);
    assert_eq!(first_error(&rolls), BowlingError::GameOver);
}

#[test]
fn test_fill_balls_share_a_rack() {
    let mut rolls = vec![0; 18];
    rolls.extend([10, 6, 5]);
    assert_eq!(
        first_error(&rolls),
        BowlingError::TooManyPins { pins: 5, standing: 4 }
    );
}

#[test]
fn test_score_survives_errors() {
    let mut game = BowlingGame::replay(&[10, 4]).unwrap();
    let score = game.score();
    assert!(game.roll(7).is_err());
    assert!(game.roll(-3).is_err());
    assert_eq!(game.score(), score);
    game.roll(6).unwrap();
    assert_eq!(game.score(), 30);
}

#[test]
fn test_replay_stops_at_first_error() {
    assert_eq!(
        BowlingGame::replay(&[3, 4, 5, 6]),
        Err(BowlingError::TooManyPins { pins: 6, standing: 5 })
    );
}

#[test]
fn test_current_roll_of_empty_frame() {
    let game = BowlingGame::new();
    let err = game.current_frame().current_roll().unwrap_err();
    assert_eq!(err, BowlingError::NoRolls);
    assert_eq!(err.kind(), ErrorKind::InvalidState);
}

#[test]
fn test_bonus_rolls_on_regular_frame() {
    let mut frame = strictly_bowling::Frame::regular();
    let err = frame.add_bonus_rolls(1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);
}

#[test]
fn test_error_messages() {
    assert_eq!(first_error(&[0; 21]).to_string(), "Game is already over");
    assert!(first_error(&[11]).to_string().contains("between 0 and 10"));
}
