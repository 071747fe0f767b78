//! # tab-engine
//!
//! Move legality and automated play for Tab, a two-player race-and-capture
//! board game.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not shared state**: every rules query takes an immutable
//!    `Board`. Only the game controller mutates, then hands out a fresh
//!    snapshot.
//!
//! 2. **Stateless topology**: the snake-shaped path and its single fork are
//!    computed from the board dimensions on demand.
//!
//! 3. **Reproducible**: all randomness flows through a seeded `GameRng`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) board cloning via `im-rs`, so the
//!   hard policy can simulate every candidate move cheaply.
//!
//! - **Non-blocking turns**: the decision engine never sleeps. Rolls, skips
//!   and moves are deferred on a virtual-clock scheduler and re-validated
//!   when they fire.
//!
//! ## Modules
//!
//! - `core`: players, board, moves, RNG, configuration, errors, snapshots
//! - `rules`: path topology, destination legality, move enumeration, sticks
//! - `ai`: board evaluation, policies, the decision engine
//! - `games`: the in-memory Tab controller and self-play

pub mod core;
pub mod rules;
pub mod ai;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerMap,
    Board, Cell, Piece, PieceState,
    Move, MoveRecord,
    GameRng, GameRngState,
    AiConfig, BoardConfig, Difficulty,
    ConfigError, MoveError, SnapshotError,
    Snapshot,
};

pub use crate::rules::{
    PathTopology, Successors, TargetSet,
    candidate_targets, check_destination, valid_targets, Rejection,
    all_moves, AllowAll, MovePermission,
    throw_sticks, StickThrow,
};

pub use crate::ai::{
    BoardEvaluator, Policy, MovePolicy, DecisionContext, Selection,
    DecisionEngine, TurnStep, TurnPhase, TaskOutcome, StaleReason,
    GameController, MessageSink, MessageLog,
    DecisionRecord, DecisionStats, Scheduler,
};

pub use crate::games::tab::{MatchSummary, SelfPlay, TabGame};
