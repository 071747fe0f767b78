//! Core types: players, board snapshots, moves, RNG, configuration, errors.
//!
//! Everything here is plain data. The rules and decision layers read
//! these values and never hold on to a live, mutable board.

pub mod player;
pub mod board;
pub mod moves;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use player::{Player, PlayerMap};
pub use board::{Board, Cell, Piece, PieceState};
pub use moves::{Move, MoveRecord};
pub use rng::{GameRng, GameRngState};
pub use config::{AiConfig, BoardConfig, Difficulty, DEFAULT_COLS, ROWS};
pub use error::{ConfigError, MoveError, SnapshotError};
pub use state::Snapshot;
