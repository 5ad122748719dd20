//! Strictly Bowling - ten-pin bowling scoring
//!
//! A single game is a fixed run of ten frames. Rolls are recorded one at a
//! time and the score is available at any point, with strike and spare
//! bonuses credited as soon as the rolls that pay them are made.
//!
//! # Architecture
//!
//! - **Roll**: pins knocked down plus the points credited to them
//! - **Frame**: up to two rolls (three in the tenth), strike/spare detection
//! - **Game**: frame advancement and bonus propagation
//! - **Contracts/Invariants**: roll preconditions and post-roll guarantees
//! - **Notation**: `X`, `/`, `-` score-sheet parsing and rendering
//!
//! # Example
//!
//! ```
//! use strictly_bowling::{BowlingGame, BowlingError, ErrorKind};
//!
//! let mut game = BowlingGame::new();
//! game.roll(10)?;
//! game.roll(3)?;
//! game.roll(4)?;
//! assert_eq!(game.score(), 24);
//!
//! let err = game.roll(11).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidInput);
//! # Ok::<(), BowlingError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod frame;
mod game;
mod invariants;
mod notation;
mod roll;
mod rules;

// Crate-level exports - Errors
pub use error::{BowlingError, ErrorKind};

// Crate-level exports - Game types
pub use frame::{Frame, FrameKind};
pub use game::{BowlingGame, GameStatus, RollRef};
pub use roll::Roll;

// Crate-level exports - Rules
pub use rules::{
    BASE_ROLLS, FRAMES, LAST_FRAME, LAST_FRAME_MAX_ROLLS, MAX_PINS, MAX_ROLLS, PERFECT_SCORE,
    validate_pins,
};

// Crate-level exports - Contracts
pub use contracts::{Contract, FrameAvailable, LegalRoll, PinsInRange, PinsStanding, RollContract};

// Crate-level exports - Invariants
pub use invariants::{
    BowlingInvariants, FrameCapacityInvariant, Invariant, InvariantSet, InvariantViolation,
    PendingBonusInvariant, ScoreCeilingInvariant,
};

// Crate-level exports - Notation
pub use notation::{NotationError, format_rolls, parse_rolls};
