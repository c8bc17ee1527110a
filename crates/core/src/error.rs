//! Error types for the game core.
//!
//! Collisions are not errors; they are reported as outcome values by
//! [`crate::GameState::step`].

use thiserror::Error;

/// Fruit could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("no space left to place fruit ({capacity} placeable cells, all taken)")]
    NoSpaceLeft { capacity: usize },
}

/// Board configuration rejected by [`crate::config::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cell size must be positive, got {0}")]
    NonPositiveCell(i32),
    #[error("board {width}x{height} is not a multiple of cell size {cell_size}")]
    Misaligned {
        width: i32,
        height: i32,
        cell_size: i32,
    },
    #[error("board {width}x{height} is too small for cell size {cell_size} and margin {margin}")]
    TooSmall {
        width: i32,
        height: i32,
        cell_size: i32,
        margin: i32,
    },
    #[error("board of {columns}x{rows} cells exceeds the {max} cell limit per axis")]
    TooLarge { columns: i32, rows: i32, max: i32 },
    #[error("spawn margin must not be negative, got {0}")]
    NegativeMargin(i32),
    #[error("speed must be at least 1")]
    ZeroSpeed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Spawn(#[from] SpawnError),
}
