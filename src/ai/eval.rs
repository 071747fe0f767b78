//! Static positional scoring of a board for one side.
//!
//! Higher is better for the side being evaluated. Rows are measured by
//! progress from that side's start row, so the same weights serve both
//! Gold and Black.

use serde::{Deserialize, Serialize};

use crate::core::{Board, GameRng, Player};

const ALIVE: f64 = 10.0;
const PROGRESS_PER_ROW: f64 = 2.0;
const FINAL_ROW_BONUS: f64 = 5.0;
const EDGE_BONUS: f64 = 1.0;
const CENTER_BONUS: f64 = 1.0;
const INTRUDER_PENALTY: f64 = 3.0;

/// Scores boards for the hard policy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardEvaluator {
    /// Upper bound of the tie-breaking noise added by [`evaluate`](Self::evaluate).
    pub noise: f64,
}

impl Default for BoardEvaluator {
    fn default() -> Self {
        Self { noise: 0.05 }
    }
}

impl BoardEvaluator {
    #[must_use]
    pub const fn new(noise: f64) -> Self {
        Self { noise }
    }

    /// Score without noise. Pure.
    ///
    /// Per friendly piece: alive, progress, final row, edge column and
    /// central band bonuses. Per opposing piece: alive and progress
    /// penalties, plus a penalty for standing on our start row.
    #[must_use]
    pub fn static_score(&self, board: &Board, side: Player) -> f64 {
        let rows = board.rows();
        let cols = board.cols();
        let opponent = side.other();
        let (center_lo, center_hi) = central_band(cols);

        let mut score = 0.0;
        for (idx, piece) in board.pieces() {
            let row = board.row_of(idx);
            let col = board.col_of(idx);

            if piece.owner == side {
                score += ALIVE;
                score += side.progress(row, rows) as f64 * PROGRESS_PER_ROW;
                if row == side.final_row(rows) {
                    score += FINAL_ROW_BONUS;
                }
                if col == 0 || col == cols - 1 {
                    score += EDGE_BONUS;
                }
                if (center_lo..=center_hi).contains(&col) {
                    score += CENTER_BONUS;
                }
            } else {
                score -= ALIVE;
                score -= opponent.progress(row, rows) as f64 * PROGRESS_PER_ROW;
                if row == side.start_row(rows) {
                    score -= INTRUDER_PENALTY;
                }
            }
        }
        score
    }

    /// Score with a small random amount in `[0, noise)` to break ties.
    pub fn evaluate(&self, board: &Board, side: Player, rng: &mut GameRng) -> f64 {
        self.static_score(board, side) + rng.gen_below(self.noise)
    }
}

/// Middle third of the columns, inclusive.
fn central_band(cols: usize) -> (usize, usize) {
    let third = cols / 3;
    (third, cols.saturating_sub(third + 1))
}
