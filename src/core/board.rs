//! Board snapshot: cells, pieces and index geometry.
//!
//! Cells are stored row-major: index `i` lives at row `i / cols`,
//! column `i % cols`. Traversal order is defined by
//! [`PathTopology`](crate::rules::PathTopology), not by raw index.
//!
//! The cell vector is an `im::Vector`, so cloning a board for a
//! simulated move is O(1) and never disturbs the original.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::BoardConfig;
use super::error::ConfigError;
use super::player::{Player, PlayerMap};

/// Presentation state of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceState {
    /// Never moved off its start row.
    Initial,
    /// Has left its start row.
    Moved,
    /// Has visited its final row.
    Final,
}

/// A single piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Player,
    pub has_left_start_row: bool,
    pub has_reached_final_row: bool,
}

impl Piece {
    /// A fresh piece that has not moved.
    #[must_use]
    pub const fn new(owner: Player) -> Self {
        Self {
            owner,
            has_left_start_row: false,
            has_reached_final_row: false,
        }
    }

    /// Mark the piece as having left its start row.
    #[must_use]
    pub const fn moved(mut self) -> Self {
        self.has_left_start_row = true;
        self
    }

    /// Mark the piece as having visited its final row.
    #[must_use]
    pub const fn finished(mut self) -> Self {
        self.has_left_start_row = true;
        self.has_reached_final_row = true;
        self
    }

    #[must_use]
    pub const fn state(&self) -> PieceState {
        if self.has_reached_final_row {
            PieceState::Final
        } else if self.has_left_start_row {
            PieceState::Moved
        } else {
            PieceState::Initial
        }
    }

    #[must_use]
    pub fn is_owned_by(&self, player: Player) -> bool {
        self.owner == player
    }
}

/// A cell is empty or holds exactly one piece.
pub type Cell = Option<Piece>;

/// Fixed-size board of cells.
///
/// Deserializing checks the dimensions and the cell count, so a decoded
/// board always has `config.cell_count()` cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    config: BoardConfig,
    cells: Vector<Cell>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct RawBoard {
    pub(crate) config: BoardConfig,
    pub(crate) cells: Vector<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = ConfigError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        raw.config.validate()?;
        let expected = raw.config.cell_count();
        if raw.cells.len() != expected {
            return Err(ConfigError::CellCount {
                expected,
                got: raw.cells.len(),
            });
        }
        Ok(Self {
            config: raw.config,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// An empty board with the given dimensions.
    #[must_use]
    pub fn empty(config: BoardConfig) -> Self {
        Self {
            config,
            cells: std::iter::repeat(None).take(config.cell_count()).collect(),
        }
    }

    /// An empty board, validating the dimensions first.
    pub fn try_empty(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    /// The opening position: each side fills its own start row.
    #[must_use]
    pub fn standard(config: BoardConfig) -> Self {
        let mut board = Self::empty(config);
        for player in Player::ALL {
            let row = player.start_row(config.rows);
            for col in 0..config.cols {
                board.place(board.index(row, col), Piece::new(player));
            }
        }
        board
    }

    /// Build a board from raw cells. Returns `None` if the length is wrong.
    #[must_use]
    pub fn from_cells(config: BoardConfig, cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let cells: Vector<Cell> = cells.into_iter().collect();
        (cells.len() == config.cell_count()).then_some(Self { config, cells })
    }

    #[must_use]
    pub const fn config(&self) -> BoardConfig {
        self.config
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.config.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.config.cols
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn contains(&self, idx: usize) -> bool {
        idx < self.cells.len()
    }

    #[must_use]
    pub const fn row_of(&self, idx: usize) -> usize {
        idx / self.config.cols
    }

    #[must_use]
    pub const fn col_of(&self, idx: usize) -> usize {
        idx % self.config.cols
    }

    #[must_use]
    pub const fn index(&self, row: usize, col: usize) -> usize {
        row * self.config.cols + col
    }

    /// The opposing side's view of a cell index. Self-inverse.
    ///
    /// `None` for indices off the board.
    #[must_use]
    pub fn mirror(&self, idx: usize) -> Option<usize> {
        if self.contains(idx) {
            self.cell_count().checked_sub(idx + 1)
        } else {
            None
        }
    }

    /// The raw cell vector.
    #[must_use]
    pub fn cells(&self) -> &Vector<Cell> {
        &self.cells
    }

    /// The piece at `idx`. Out-of-range indices read as empty.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Piece> {
        self.cells.get(idx).and_then(Option::as_ref)
    }

    /// Put a piece on a cell, replacing whatever was there.
    ///
    /// Out-of-range indices are ignored.
    pub fn place(&mut self, idx: usize, piece: Piece) {
        if self.contains(idx) {
            self.cells.set(idx, Some(piece));
        }
    }

    /// Builder form of [`place`](Self::place).
    #[must_use]
    pub fn with_piece(mut self, idx: usize, piece: Piece) -> Self {
        self.place(idx, piece);
        self
    }

    /// Empty a cell, returning what was there.
    pub fn take(&mut self, idx: usize) -> Option<Piece> {
        if self.contains(idx) {
            self.cells.set(idx, None)
        } else {
            None
        }
    }

    /// A copy of this board with the piece on `from` relocated to `to`.
    ///
    /// Whatever stood on `to` is overwritten; no other bookkeeping.
    #[must_use]
    pub fn with_move(&self, from: usize, to: usize) -> Self {
        let mut next = self.clone();
        if let Some(piece) = next.take(from) {
            next.place(to, piece);
        }
        next
    }

    /// Iterate over occupied cells in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, &Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.as_ref().map(|piece| (idx, piece)))
    }

    /// Number of pieces `player` has on the board.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.pieces().filter(|(_, p)| p.is_owned_by(player)).count()
    }

    /// Piece counts for both sides.
    #[must_use]
    pub fn piece_counts(&self) -> PlayerMap<usize> {
        let mut counts = PlayerMap::with_value(0);
        for (_, piece) in self.pieces() {
            counts[piece.owner] += 1;
        }
        counts
    }

    /// Whether `player` owns at least one piece in `row`.
    #[must_use]
    pub fn has_piece_in_row(&self, player: Player, row: usize) -> bool {
        if row >= self.rows() {
            return false;
        }
        let start = row * self.cols();
        (start..start + self.cols()).any(|idx| self.get(idx).is_some_and(|p| p.is_owned_by(player)))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let ch = match self.get(self.index(row, col)) {
                    None => '.',
                    Some(p) => match (p.owner, p.state()) {
                        (Player::Gold, PieceState::Final) => 'g',
                        (Player::Gold, _) => 'G',
                        (Player::Black, PieceState::Final) => 'b',
                        (Player::Black, _) => 'B',
                    },
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
