//! Game files: a bowler's rolls stored as TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_bowling::parse_rolls;
use tracing::{debug, info, instrument};

/// A recorded game.
///
/// Either `rolls` or `notation` must be given:
///
/// ```toml
/// bowler = "Pat"
/// notation = "X 7/ 9- X -8 8/ -6 X X X81"
/// ```
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameFile {
    /// Name printed alongside the score.
    #[serde(default = "default_bowler")]
    bowler: String,

    /// Pins knocked down by each roll.
    #[serde(default)]
    rolls: Vec<i32>,

    /// Rolls in score-sheet notation.
    #[serde(default)]
    notation: Option<String>,
}

fn default_bowler() -> String {
    "Bowler".to_string()
}

impl GameFile {
    /// Loads a game from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading game file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read game file: {}", e)))?;

        let game: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse game file: {}", e)))?;

        info!(bowler = %game.bowler, "Game file loaded successfully");
        Ok(game)
    }

    /// Resolves the rolls, expanding notation if that is what was stored.
    #[instrument(skip(self), fields(bowler = %self.bowler))]
    pub fn resolve_rolls(&self) -> Result<Vec<i32>, ConfigError> {
        match (self.notation(), self.rolls().is_empty()) {
            (Some(_), false) => Err(ConfigError::new(
                "Game file must give either rolls or notation, not both",
            )),
            (Some(notation), true) => parse_rolls(notation)
                .map_err(|e| ConfigError::new(format!("Invalid notation: {}", e))),
            (None, _) => Ok(self.rolls().clone()),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_game(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_rolls() {
        let file = write_game("bowler = \"Pat\"\nrolls = [10, 3, 4]\n");
        let game = GameFile::from_file(file.path()).unwrap();
        assert_eq!(game.bowler(), "Pat");
        assert_eq!(game.resolve_rolls().unwrap(), vec![10, 3, 4]);
    }

    #[test]
    fn test_load_notation_with_default_bowler() {
        let file = write_game("notation = \"X 9/ 8-\"\n");
        let game = GameFile::from_file(file.path()).unwrap();
        assert_eq!(game.bowler(), "Bowler");
        assert_eq!(game.resolve_rolls().unwrap(), vec![10, 9, 1, 8, 0]);
    }

    #[test]
    fn test_rolls_and_notation_conflict() {
        let file = write_game("rolls = [1]\nnotation = \"1\"\n");
        let game = GameFile::from_file(file.path()).unwrap();
        let err = game.resolve_rolls().unwrap_err();
        assert!(err.message.contains("not both"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameFile::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(err.message.starts_with("Failed to read game file"));
        assert!(err.file.ends_with("game_file.rs"));
    }

    #[test]
    fn test_malformed_file() {
        let file = write_game("rolls = [10, \"three\"]\n");
        let err = GameFile::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse game file"));
    }
}
