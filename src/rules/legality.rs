//! Destination legality for a single piece.
//!
//! Candidates come from walking the path `roll` steps. Black walks the
//! mirrored board: the start cell is mirrored into Gold space, walked, and
//! every result mirrored back. Each candidate must then pass four rules:
//!
//! 1. not occupied by a piece of the same side
//! 2. a piece that has visited its final row never re-enters it
//! 3. a piece that has left its start row never returns to it
//! 4. nobody enters the final row while the side still has a piece in
//!    its start row
//!
//! Every query treats the board as an immutable snapshot.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Piece, Player};

use super::topology::PathTopology;
use super::TargetSet;

/// Why a reachable cell is not a legal destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// A piece of the same side stands there.
    OwnPiece,
    /// The piece already visited the final row and has since left it.
    FinalRowReentry,
    /// The piece already left the start row.
    StartRowReturn,
    /// The side still has a piece waiting in its start row.
    StartRowOccupied,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Rejection::OwnPiece => "cell holds a piece of the same side",
            Rejection::FinalRowReentry => "piece may not re-enter the final row",
            Rejection::StartRowReturn => "piece may not return to the start row",
            Rejection::StartRowOccupied => "start row must be empty before entering the final row",
        };
        f.write_str(text)
    }
}

/// Cells `roll` steps ahead of `from` for `player`, before any filtering.
///
/// Empty when there is no roll, the roll is zero or `from` is off the board.
#[must_use]
pub fn candidate_targets(board: &Board, player: Player, roll: Option<u8>, from: usize) -> TargetSet {
    let steps = match roll {
        Some(r) if r > 0 => usize::from(r),
        _ => return TargetSet::new(),
    };
    if !board.contains(from) {
        return TargetSet::new();
    }

    let topology = PathTopology::for_board(board);
    if player.is_mirrored() {
        let Some(start) = board.mirror(from) else {
            return TargetSet::new();
        };
        topology
            .reachable_after_steps(start, steps)
            .into_iter()
            .filter_map(|idx| board.mirror(idx))
            .collect()
    } else {
        topology.reachable_after_steps(from, steps)
    }
}

/// Check one destination for the piece standing on `from`.
pub fn check_destination(
    board: &Board,
    player: Player,
    piece: &Piece,
    from: usize,
    to: usize,
) -> Result<(), Rejection> {
    let rows = board.rows();
    let start_row = player.start_row(rows);
    let final_row = player.final_row(rows);
    let row_from = board.row_of(from);
    let row_to = board.row_of(to);

    if board.get(to).is_some_and(|p| p.is_owned_by(player)) {
        return Err(Rejection::OwnPiece);
    }
    if piece.has_reached_final_row && row_from != final_row && row_to == final_row {
        return Err(Rejection::FinalRowReentry);
    }
    if row_to == start_row && row_from != start_row {
        return Err(Rejection::StartRowReturn);
    }
    if row_to == final_row && board.has_piece_in_row(player, start_row) {
        return Err(Rejection::StartRowOccupied);
    }
    Ok(())
}

/// Legal destinations for the piece on `from`, moving as `player`.
///
/// Empty when the roll is absent or zero, or `from` holds no piece
/// (including indices off the board).
#[must_use]
pub fn valid_targets(board: &Board, player: Player, roll: Option<u8>, from: usize) -> TargetSet {
    let Some(piece) = board.get(from) else {
        return TargetSet::new();
    };

    candidate_targets(board, player, roll, from)
        .into_iter()
        .filter(|&to| board.contains(to))
        .filter(|&to| check_destination(board, player, piece, from, to).is_ok())
        .collect()
}
