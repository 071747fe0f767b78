//! Decision history and counters for diagnostics and tuning.

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, Move, Player};

/// A move chosen by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Engine turn counter when the move was chosen (starts at 1).
    pub turn: u32,

    /// Side the engine plays.
    pub side: Player,

    /// Mode that chose the move.
    pub mode: Difficulty,

    /// The chosen move.
    pub chosen: Move,

    /// Number of legal moves at the time.
    pub candidates: usize,
}

/// Counters collected by a decision engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionStats {
    /// Turn attempts that acted (rolled, skipped or chose).
    pub turns: u32,

    /// Rolls requested from the controller.
    pub rolls_requested: u32,

    /// Turns skipped for lack of moves.
    pub skips: u32,

    /// Moves chosen.
    pub moves_chosen: u32,

    /// Deferred moves that reached the controller.
    pub moves_applied: u32,

    /// Deferred tasks dropped because the game moved on.
    pub stale_discarded: u32,

    /// Selections per mode: easy, medium, hard.
    pub easy_selections: u32,
    pub medium_selections: u32,
    pub hard_selections: u32,
}

impl DecisionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn record_mode(&mut self, mode: Difficulty) {
        match mode {
            Difficulty::Easy => self.easy_selections += 1,
            Difficulty::Hard => self.hard_selections += 1,
            Difficulty::Medium | Difficulty::Adaptive => self.medium_selections += 1,
        }
    }
}
