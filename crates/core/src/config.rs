//! Board configuration checks.

use crate::error::ConfigError;
use crate::fruit::Bounds;
use crate::types::{GameConfig, MAX_BOARD_CELLS};

/// Check that a configuration describes a playable board.
///
/// The board must be cell-aligned, between three (so the center cell is not
/// lethal) and [`MAX_BOARD_CELLS`] cells on each axis, and leave at least two
/// cells for fruit.
pub fn validate(config: &GameConfig) -> Result<(), ConfigError> {
    let cell_size = config.cell_size;
    if cell_size <= 0 {
        return Err(ConfigError::NonPositiveCell(cell_size));
    }
    if config.spawn_margin < 0 {
        return Err(ConfigError::NegativeMargin(config.spawn_margin));
    }
    if config.speed == 0 {
        return Err(ConfigError::ZeroSpeed);
    }
    if config.width % cell_size != 0 || config.height % cell_size != 0 {
        return Err(ConfigError::Misaligned {
            width: config.width,
            height: config.height,
            cell_size,
        });
    }

    let too_small = ConfigError::TooSmall {
        width: config.width,
        height: config.height,
        cell_size,
        margin: config.spawn_margin,
    };
    if config.columns() < 3 || config.rows() < 3 {
        return Err(too_small);
    }
    if config.columns() > MAX_BOARD_CELLS || config.rows() > MAX_BOARD_CELLS {
        return Err(ConfigError::TooLarge {
            columns: config.columns(),
            rows: config.rows(),
            max: MAX_BOARD_CELLS,
        });
    }
    if Bounds::from_config(config).capacity() < 2 {
        return Err(too_small);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate(&GameConfig::default()), Ok(()));
    }

    #[test]
    fn test_rejects_bad_cell_size() {
        let config = GameConfig::with_board(300, 200, 0);
        assert_eq!(validate(&config), Err(ConfigError::NonPositiveCell(0)));
    }

    #[test]
    fn test_rejects_misaligned_board() {
        let config = GameConfig::with_board(305, 200, 10);
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Misaligned { .. })
        ));
    }

    #[test]
    fn test_rejects_tiny_board() {
        // 3x3 cells with a one-cell margin leaves a single placeable cell.
        let config = GameConfig::with_board(30, 30, 10);
        assert!(matches!(validate(&config), Err(ConfigError::TooSmall { .. })));

        let config = GameConfig::with_board(40, 30, 10);
        assert_eq!(validate(&config), Ok(()));
    }

    #[test]
    fn test_rejects_oversized_board() {
        let config = GameConfig::with_board(400_000, 100, 10);
        assert_eq!(
            validate(&config),
            Err(ConfigError::TooLarge {
                columns: 40_000,
                rows: 10,
                max: MAX_BOARD_CELLS,
            })
        );

        let config = GameConfig::with_board(MAX_BOARD_CELLS * 10, MAX_BOARD_CELLS * 10, 10);
        assert_eq!(validate(&config), Ok(()));
    }

    #[test]
    fn test_rejects_zero_speed() {
        let mut config = GameConfig::default();
        config.speed = 0;
        assert_eq!(validate(&config), Err(ConfigError::ZeroSpeed));
    }
}
