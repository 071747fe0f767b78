//! Error types for the fallible edges of the engine.
//!
//! Rules queries never fail; they return empty collections. Errors only
//! arise when validating configuration, when a controller rejects a move,
//! or when decoding a snapshot.

use super::player::Player;

/// Errors raised when validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board must have exactly {expected} rows, got {got}")]
    Rows { expected: usize, got: usize },

    #[error("board must have at least one column")]
    NoColumns,

    #[error("board has {got} cells, expected {expected}")]
    CellCount { expected: usize, got: usize },

    #[error("{name} must be in [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },

    #[error("{name} must be >= 0, got {value}")]
    Negative { name: &'static str, value: f64 },
}

/// Errors raised by a controller refusing to apply a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,

    #[error("no roll is active")]
    NoRoll,

    #[error("no piece of {player} at cell {from}")]
    NotOwnPiece { player: Player, from: usize },

    #[error("piece at cell {from} may not move this turn")]
    PieceLocked { from: usize },

    #[error("cell {to} is not a valid destination from {from}")]
    IllegalDestination { from: usize, to: usize },
}

/// Errors raised when encoding or decoding a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Codec(#[from] bincode::Error),

    #[error("snapshot board is invalid: {0}")]
    Board(#[from] ConfigError),
}
