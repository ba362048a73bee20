//! Configuration for a game session.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Result, tictactoe::Player};

/// Configuration for creating a [`Game`](crate::Game).
///
/// Builder-style API; values can also be loaded from a JSON file where
/// every field is optional.
///
/// # Examples
///
/// ```
/// use gridtoe::{app::GameConfig, tictactoe::Player};
///
/// let config = GameConfig::new(4)
///     .with_height(3)
///     .with_computer(Player::X)
///     .with_first_player(Player::O);
/// assert_eq!(config.board_height(), 3);
///
/// // Height follows width unless set explicitly.
/// assert_eq!(GameConfig::new(5).board_height(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows; `None` means square
    pub height: Option<usize>,
    /// Mark played by the computer; `None` disables computer assist
    pub computer: Option<Player>,
    /// Player who moves first
    pub first_player: Player,
}

impl GameConfig {
    /// Create a square configuration of the given width.
    ///
    /// Uses default values for other parameters:
    /// - Computer: O
    /// - First player: X
    pub fn new(width: usize) -> Self {
        Self {
            width,
            height: None,
            computer: Some(Player::O),
            first_player: Player::X,
        }
    }

    /// Set the number of rows.
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    /// Let the computer play `player`.
    pub fn with_computer(mut self, player: Player) -> Self {
        self.computer = Some(player);
        self
    }

    /// Two humans, no computer assist.
    pub fn without_computer(mut self) -> Self {
        self.computer = None;
        self
    }

    /// Set who moves first.
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Number of rows, falling back to the width
    pub fn board_height(&self) -> usize {
        self.height.unwrap_or(self.width)
    }

    /// Check that the board has at least one cell.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimensions`] for a zero dimension.
    pub fn validate(&self) -> Result<()> {
        let height = self.board_height();
        if self.width == 0 || height == 0 {
            return Err(crate::Error::InvalidDimensions {
                height,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Load and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid JSON, or
    /// describes an empty board.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        let config: GameConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_to_three_by_three_against_o() {
        let config = GameConfig::default();
        assert_eq!(config.width, 3);
        assert_eq!(config.board_height(), 3);
        assert_eq!(config.computer, Some(Player::O));
        assert_eq!(config.first_player, Player::X);
    }

    #[test]
    fn validate_rejects_empty_board() {
        assert!(GameConfig::new(0).validate().is_err());
        assert!(GameConfig::new(3).with_height(0).validate().is_err());
        assert!(GameConfig::new(1).validate().is_ok());
    }

    #[test]
    fn load_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"width": 4, "computer": "X"}}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.width, 4);
        assert_eq!(config.board_height(), 4);
        assert_eq!(config.computer, Some(Player::X));
        assert_eq!(config.first_player, Player::X);
    }

    #[test]
    fn load_null_computer_disables_assist() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"computer": null, "height": 2}}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.computer, None);
        assert_eq!(config.board_height(), 2);
        assert_eq!(config.width, 3);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("read config"));
    }

    #[test]
    fn load_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "width = 3").unwrap();
        assert!(matches!(
            GameConfig::load(file.path()),
            Err(crate::Error::Serialization(_))
        ));
    }
}
