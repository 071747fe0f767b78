//! Snapshots: the explicit board/player/roll value handed to the rules.
//!
//! A `Snapshot` replaces any shared, mutable "current game" object. The
//! controller builds one from its live state, and every query reads it
//! without mutating. Boards clone in O(1), so taking a snapshot is cheap.

use serde::{Deserialize, Serialize};

use super::board::{Board, RawBoard};
use super::error::SnapshotError;
use super::player::Player;
use crate::rules::{self, TargetSet};

/// Board, side to move and current roll at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// `None` until the controller supplies a board.
    pub board: Option<Board>,
    pub player: Player,
    /// `None` before a throw.
    pub roll: Option<u8>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            board: None,
            player: Player::Gold,
            roll: None,
        }
    }
}

impl Snapshot {
    #[must_use]
    pub fn new(board: Board, player: Player, roll: Option<u8>) -> Self {
        Self {
            board: Some(board),
            player,
            roll,
        }
    }

    /// Replace every field at once.
    pub fn set_state(&mut self, board: Board, player: Player, roll: Option<u8>) {
        self.board = Some(board);
        self.player = player;
        self.roll = roll;
    }

    /// Valid destinations for the piece on `from` under this snapshot.
    ///
    /// Empty when no board has been supplied.
    #[must_use]
    pub fn valid_targets(&self, from: usize) -> TargetSet {
        match &self.board {
            Some(board) => rules::valid_targets(board, self.player, self.roll, from),
            None => TargetSet::new(),
        }
    }

    /// Encode as compact bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bytes produced by [`to_bytes`](Self::to_bytes).
    ///
    /// A board with bad dimensions or the wrong number of cells is reported
    /// as [`SnapshotError::Board`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot = bincode::deserialize(bytes)?;
        Ok(Self {
            board: raw.board.map(Board::try_from).transpose()?,
            player: raw.player,
            roll: raw.roll,
        })
    }
}

/// Same layout as [`Snapshot`], with the board left unchecked.
#[derive(Serialize, Deserialize)]
struct RawSnapshot {
    board: Option<RawBoard>,
    player: Player,
    roll: Option<u8>,
}
