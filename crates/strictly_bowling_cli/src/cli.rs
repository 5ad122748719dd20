//! Command-line interface for strictly_bowling.

use clap::{Args, Parser, Subcommand};

/// Strictly Bowling - ten-pin bowling scorer
#[derive(Parser, Debug)]
#[command(name = "strictly_bowling")]
#[command(about = "Score ten-pin bowling games roll by roll", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Where the rolls of a game come from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct RollsInput {
    /// Pins knocked down by each roll, in order
    #[arg(allow_negative_numbers = true)]
    pub rolls: Vec<i32>,

    /// Rolls in score-sheet notation, e.g. "X 9/ 8-"
    #[arg(short, long)]
    pub notation: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a sequence of rolls
    Score {
        /// Rolls to score
        #[command(flatten)]
        input: RollsInput,

        /// Print the full game as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay a game stored in a TOML file
    Replay {
        /// Path to the game file
        #[arg(short, long)]
        file: std::path::PathBuf,

        /// Print the full game as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether one more roll would be accepted
    Check {
        /// Rolls made so far
        #[command(flatten)]
        input: RollsInput,

        /// Pins for the next roll
        #[arg(long, allow_negative_numbers = true)]
        next: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score_rolls() {
        let cli = Cli::try_parse_from(["strictly_bowling", "score", "10", "3", "4"]).unwrap();
        match cli.command {
            Command::Score { input, json } => {
                assert_eq!(input.rolls, vec![10, 3, 4]);
                assert!(input.notation.is_none());
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_roll() {
        let cli = Cli::try_parse_from(["strictly_bowling", "score", "-1"]).unwrap();
        assert!(matches!(cli.command, Command::Score { input, .. } if input.rolls == vec![-1]));
    }

    #[test]
    fn test_parse_notation() {
        let cli =
            Cli::try_parse_from(["strictly_bowling", "check", "--notation", "X 9/", "--next", "3"])
                .unwrap();
        match cli.command {
            Command::Check { input, next } => {
                assert_eq!(input.notation.as_deref(), Some("X 9/"));
                assert_eq!(next, 3);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rolls_and_notation_conflict() {
        let result =
            Cli::try_parse_from(["strictly_bowling", "score", "10", "--notation", "X"]);
        assert!(result.is_err());
    }
}
