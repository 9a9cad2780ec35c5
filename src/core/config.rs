//! Game configuration.
//!
//! `GameConfig::default()` is the standard game: five in a row wins and
//! each player starts with the 20-piece hand. Both knobs can be changed
//! for variants or tests, and configs load from JSON with missing fields
//! falling back to the standard values.
//!
//! ```
//! use shogi_gomoku::core::GameConfig;
//!
//! let config: GameConfig = serde_json::from_str(r#"{ "victory_length": 4 }"#).unwrap();
//! assert_eq!(config.victory_length, 4);
//! assert_eq!(config.initial_hand.total(), 20);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::position::BOARD_SIZE;
use crate::pieces::{Hand, PieceKind};

/// Pieces in a row needed to win in the standard game.
pub const VICTORY_LENGTH: usize = 5;

/// Invalid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("victory length {0} must be between 1 and {max}", max = BOARD_SIZE)]
    VictoryLength(usize),
    #[error("initial hand is empty")]
    EmptyHand,
}

/// Rule parameters shared by both players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Consecutive same-owner pieces that win.
    pub victory_length: usize,
    /// Starting hand for each player.
    pub initial_hand: Hand,
}

impl GameConfig {
    /// The standard rules.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            victory_length: VICTORY_LENGTH,
            initial_hand: Hand::standard(),
        }
    }

    /// Set the winning run length.
    #[must_use]
    pub fn with_victory_length(mut self, length: usize) -> Self {
        self.victory_length = length;
        self
    }

    /// Set the starting count of one kind in each hand.
    #[must_use]
    pub fn with_initial_count(mut self, kind: PieceKind, count: u8) -> Self {
        self.initial_hand = self.initial_hand.with_count(kind, count);
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=BOARD_SIZE).contains(&self.victory_length) {
            return Err(ConfigError::VictoryLength(self.victory_length));
        }
        if self.initial_hand.is_empty() {
            return Err(ConfigError::EmptyHand);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.victory_length, 5);
        assert_eq!(config.initial_hand, Hand::standard());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_victory_length_bounds() {
        let zero = GameConfig::standard().with_victory_length(0);
        assert_eq!(zero.validate(), Err(ConfigError::VictoryLength(0)));

        let long = GameConfig::standard().with_victory_length(10);
        assert_eq!(long.validate(), Err(ConfigError::VictoryLength(10)));

        let nine = GameConfig::standard().with_victory_length(9);
        assert!(nine.validate().is_ok());
    }

    #[test]
    fn test_empty_hand_rejected() {
        let mut config = GameConfig::standard();
        for kind in PieceKind::ALL {
            config = config.with_initial_count(kind, 0);
        }
        assert_eq!(config.validate(), Err(ConfigError::EmptyHand));
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::standard().with_initial_count(PieceKind::Fu, 3);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
