//! Board traversal order and the branch in the track.
//!
//! The path snakes through the board: even rows are walked from the last
//! column down to the first, odd rows from the first column up. This is
//! forward progress for Gold; Black uses the same path through
//! [`Board::mirror`](crate::core::Board::mirror).
//!
//! Where the path steps from row 2 into row 3, a second successor exists:
//! the row-1 cell in the same column. Every cell therefore has one or two
//! successors (none at the very end of the path).
//!
//! Nothing is materialized: path positions and successors are computed
//! arithmetically per query, so a topology is just its dimensions.
//!
//! ```
//! use tab_engine::rules::PathTopology;
//!
//! let topology = PathTopology::new(4, 3);
//! assert_eq!(topology.path(), vec![2, 1, 0, 3, 4, 5, 8, 7, 6, 9, 10, 11]);
//!
//! let mut next = topology.next_positions(6).to_vec();
//! next.sort();
//! assert_eq!(next, vec![3, 9]);
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Board, BoardConfig};

use super::{Successors, TargetSet};

/// Row that holds the fork.
const BRANCH_FROM_ROW: usize = 2;
/// Row the linear successor enters at the fork.
const BRANCH_INTO_ROW: usize = 3;
/// Row the alternate successor jumps back to.
const BRANCH_TO_ROW: usize = 1;

/// Snake-order traversal over a `rows` x `cols` board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathTopology {
    rows: usize,
    cols: usize,
}

impl PathTopology {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[must_use]
    pub const fn from_config(config: BoardConfig) -> Self {
        Self::new(config.rows, config.cols)
    }

    #[must_use]
    pub const fn for_board(board: &Board) -> Self {
        Self::from_config(board.config())
    }

    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// The full traversal order, as cell indices.
    #[must_use]
    pub fn path(&self) -> Vec<usize> {
        (0..self.cell_count()).filter_map(|pos| self.cell_at(pos)).collect()
    }

    /// Position of a cell along the path.
    #[must_use]
    pub const fn position_of(&self, idx: usize) -> Option<usize> {
        if idx >= self.cell_count() {
            return None;
        }
        let row = idx / self.cols;
        let col = idx % self.cols;
        let offset = if row % 2 == 0 { self.cols - 1 - col } else { col };
        Some(row * self.cols + offset)
    }

    /// Cell at a given path position.
    #[must_use]
    pub const fn cell_at(&self, pos: usize) -> Option<usize> {
        if pos >= self.cell_count() {
            return None;
        }
        let row = pos / self.cols;
        let offset = pos % self.cols;
        let col = if row % 2 == 0 { self.cols - 1 - offset } else { offset };
        Some(row * self.cols + col)
    }

    /// Cells one step forward from `idx`.
    ///
    /// Both successors at the fork are equally valid; order carries no
    /// priority. Empty at the end of the path or for unknown cells.
    #[must_use]
    pub fn next_positions(&self, idx: usize) -> Successors {
        let mut out = Successors::new();
        let Some(next) = self.position_of(idx).and_then(|p| self.cell_at(p + 1)) else {
            return out;
        };
        out.push(next);

        if idx / self.cols == BRANCH_FROM_ROW && next / self.cols == BRANCH_INTO_ROW {
            out.push(BRANCH_TO_ROW * self.cols + idx % self.cols);
        }
        out
    }

    /// Every cell reachable in exactly `steps` hops from `start`.
    ///
    /// Frontiers are de-duplicated at each hop; cells appear in discovery
    /// order. Zero steps yields `start` itself.
    #[must_use]
    pub fn reachable_after_steps(&self, start: usize, steps: usize) -> TargetSet {
        let mut frontier = TargetSet::new();
        frontier.push(start);

        let mut seen = FxHashSet::default();
        for _ in 0..steps {
            seen.clear();
            let mut next = TargetSet::new();
            for &cell in &frontier {
                for succ in self.next_positions(cell) {
                    if seen.insert(succ) {
                        next.push(succ);
                    }
                }
            }
            frontier = next;
            if frontier.is_empty() {
                break;
            }
        }
        frontier
    }
}
