//! Enumeration of every legal move for one side.

use crate::core::{Board, Move, Piece, Player};

use super::legality::valid_targets;

/// Capability check supplied by the controller.
///
/// Lets the controller lock pieces independently of the board rules
/// (e.g. a piece that has never moved waiting for a tâb).
pub trait MovePermission {
    fn can_piece_move(&self, piece: &Piece) -> bool;
}

/// Every piece may move.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

impl MovePermission for AllowAll {
    fn can_piece_move(&self, _piece: &Piece) -> bool {
        true
    }
}

impl<F> MovePermission for F
where
    F: Fn(&Piece) -> bool,
{
    fn can_piece_move(&self, piece: &Piece) -> bool {
        self(piece)
    }
}

/// All legal moves for `player`.
///
/// Ordered by source index, then by destination discovery order. Policies
/// that take "the first" move rely on this order.
#[must_use]
pub fn all_moves(
    board: &Board,
    player: Player,
    roll: Option<u8>,
    permission: &impl MovePermission,
) -> Vec<Move> {
    let mut moves = Vec::new();

    for (from, piece) in board.pieces() {
        if !piece.is_owned_by(player) || !permission.can_piece_move(piece) {
            continue;
        }
        for to in valid_targets(board, player, roll, from) {
            let is_capture = board.get(to).is_some_and(|p| !p.is_owned_by(player));
            moves.push(Move { from, to, is_capture });
        }
    }

    moves
}
