//! Engine configuration.
//!
//! Defaults come straight from the rule constants in the types crate. The
//! struct exists so tests and alternative frontends can run the same engine
//! with a different spawn rate or target tile.

use thiserror::Error;

use crate::types::{Tile, RESET_SPAWN_COUNT, SPAWN_PER_MOVE, WIN_TILE};

/// Rejected configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("spawn_per_move must be at least 1")]
    ZeroSpawnPerMove,

    #[error("reset_spawn_count must be at least 1")]
    ZeroResetSpawn,

    #[error("win_tile {0} is not a power of two of at least 8")]
    InvalidWinTile(Tile),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Tiles spawned after a move that changed the grid
    pub spawn_per_move: u8,
    /// Tiles spawned by a reset
    pub reset_spawn_count: u8,
    /// Tile value that wins
    pub win_tile: Tile,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spawn_per_move == 0 {
            return Err(ConfigError::ZeroSpawnPerMove);
        }
        if self.reset_spawn_count == 0 {
            return Err(ConfigError::ZeroResetSpawn);
        }
        // Spawns are 2 or 4, so anything below 8 would be won by a spawn.
        if !self.win_tile.is_power_of_two() || self.win_tile < 8 {
            return Err(ConfigError::InvalidWinTile(self.win_tile));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            spawn_per_move: SPAWN_PER_MOVE,
            reset_spawn_count: RESET_SPAWN_COUNT,
            win_tile: WIN_TILE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.spawn_per_move, SPAWN_PER_MOVE);
        assert_eq!(config.reset_spawn_count, 1);
        assert_eq!(config.win_tile, 4096);
    }

    #[test]
    fn rejects_zero_spawn_counts() {
        let config = EngineConfig {
            spawn_per_move: 0,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroSpawnPerMove));

        let config = EngineConfig {
            reset_spawn_count: 0,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroResetSpawn));
    }

    #[test]
    fn rejects_bad_win_tile() {
        for win_tile in [0, 4, 100, 4095] {
            let config = EngineConfig {
                win_tile,
                ..EngineConfig::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::InvalidWinTile(win_tile)));
        }
    }

    #[test]
    fn error_messages_name_the_field() {
        let msg = ConfigError::InvalidWinTile(100).to_string();
        assert!(msg.contains("100"));
        assert!(ConfigError::ZeroSpawnPerMove.to_string().contains("spawn_per_move"));
    }
}
