//! Game configuration.

use crate::constants::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::ConfigError;
use crate::render::RenderStyle;
use std::path::PathBuf;

/// Settings for one interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Side length of the square board
    pub board_size: usize,

    /// How boards are drawn
    pub render_style: RenderStyle,

    /// Where to write the game record when the game ends
    /// (None = `~/.goban/last_game.json`)
    pub record_path: Option<PathBuf>,

    /// Skip writing the record entirely
    pub save_record: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            render_style: RenderStyle::Color,
            record_path: None,
            save_record: true,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_board_size(self.board_size)
    }
}

pub fn validate_board_size(size: usize) -> Result<(), ConfigError> {
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(ConfigError::BoardSize {
            size,
            min: MIN_BOARD_SIZE,
            max: MAX_BOARD_SIZE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_board_size_bounds() {
        assert!(validate_board_size(MIN_BOARD_SIZE).is_ok());
        assert!(validate_board_size(MAX_BOARD_SIZE).is_ok());
        assert_eq!(
            validate_board_size(1),
            Err(ConfigError::BoardSize {
                size: 1,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE
            })
        );
        assert!(validate_board_size(MAX_BOARD_SIZE + 1).is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig {
            board_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
