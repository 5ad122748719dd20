//! Score-sheet notation.
//!
//! `X` is a strike, `/` a spare, `-` a gutter ball and a digit the pins
//! knocked down. Every character is one roll, except that a standalone
//! `10` token is a strike too, so `10 3 4`, `X 3 4` and `X34` all describe
//! the same rolls.

use crate::game::BowlingGame;
use crate::rules::MAX_PINS;
use tracing::instrument;

/// Error parsing score-sheet notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum NotationError {
    /// A character with no meaning in bowling notation.
    #[display("Unknown symbol {:?} in {:?}", symbol, token)]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// The token it appeared in.
        token: String,
    },

    /// A spare with no open first ball before it.
    #[display("Spare at roll {} does not follow an open first ball", _0)]
    DanglingSpare(usize),
}

impl std::error::Error for NotationError {}

/// Parses a line of notation into pin counts.
///
/// Notation only describes legal pin counts, but not necessarily legal
/// frames; `9 9` parses fine and is left for the game to reject.
#[instrument]
pub fn parse_rolls(input: &str) -> Result<Vec<i32>, NotationError> {
    let mut rolls = Vec::new();

    for token in input.split_whitespace() {
        if token == "10" {
            rolls.push(i32::from(MAX_PINS));
            continue;
        }

        for symbol in token.chars() {
            let pins = match symbol {
                'X' | 'x' => i32::from(MAX_PINS),
                '-' => 0,
                '/' => match rolls.last() {
                    Some(&prev) if (0..i32::from(MAX_PINS)).contains(&prev) => {
                        i32::from(MAX_PINS) - prev
                    }
                    _ => return Err(NotationError::DanglingSpare(rolls.len() + 1)),
                },
                d @ '0'..='9' => i32::from(d as u8 - b'0'),
                other => {
                    return Err(NotationError::UnknownSymbol {
                        symbol: other,
                        token: token.to_string(),
                    });
                }
            };
            rolls.push(pins);
        }
    }

    Ok(rolls)
}

/// Renders a game's rolls as notation, one space-separated group per frame.
///
/// Frames not yet reached are omitted.
pub fn format_rolls(game: &BowlingGame) -> String {
    game.frames()
        .iter()
        .filter(|f| !f.rolls().is_empty())
        .map(|frame| {
            let mut standing = MAX_PINS;
            let mut first_ball = true;
            let mut marks = String::new();
            for roll in frame.rolls() {
                let pins = roll.pins();
                let mark = if first_ball && pins == MAX_PINS {
                    'X'
                } else if !first_ball && pins == standing {
                    '/'
                } else if pins == 0 {
                    '-'
                } else {
                    char::from(b'0' + pins)
                };
                marks.push(mark);

                // A strike keeps the rack; a second ball always ends it
                if mark != 'X' {
                    if first_ball {
                        standing -= pins;
                        first_ball = false;
                    } else {
                        standing = MAX_PINS;
                        first_ball = true;
                    }
                }
            }
            marks
        })
        .collect::<Vec<_>>()
        .join(" ")
}
