use serde::Deserialize;

use crate::board::validate_size;
use crate::error::GameError;
use crate::geometry::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Viewport};

pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Settings supplied by the host page when a game starts.
/// Every field is optional on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub width: f64,
    pub height: f64,
}

impl GameConfig {
    /// Checks the board size and builds the drawing surface.
    pub fn validate(&self) -> Result<Viewport, GameError> {
        validate_size(self.board_size)?;
        Viewport::new(self.width, self.height)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "board_size": 5 }"#).unwrap();

        assert_eq!(config.board_size, 5);
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.validate().unwrap(), Viewport::default());
    }

    #[test]
    fn validate_rejects_small_board() {
        let config = GameConfig {
            board_size: 2,
            ..GameConfig::default()
        };

        assert_eq!(config.validate(), Err(GameError::InvalidSize { size: 2 }));
    }

    #[test]
    fn validate_rejects_empty_surface() {
        let config = GameConfig {
            width: 0.0,
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidViewport { .. })
        ));
    }
}
