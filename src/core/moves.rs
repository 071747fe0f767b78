//! Move representation and move history records.

use serde::{Deserialize, Serialize};

use super::board::Piece;
use super::player::Player;

/// A single piece movement between two cells.
///
/// `is_capture` is true iff the destination held an opposing piece
/// when the move was generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: usize,
    pub to: usize,
    pub is_capture: bool,
}

impl Move {
    /// A move onto an empty cell.
    #[must_use]
    pub const fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            is_capture: false,
        }
    }

    /// A move onto an opposing piece.
    #[must_use]
    pub const fn capture(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            is_capture: true,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.is_capture { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

/// A move that was applied, with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that moved.
    pub player: Player,

    /// The move applied.
    pub mv: Move,

    /// Roll the move was made with.
    pub roll: u8,

    /// Turn number when the move was applied (starts at 1).
    pub turn: u32,

    /// Piece removed from the destination, if any.
    pub captured: Option<Piece>,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: Player, mv: Move, roll: u8, turn: u32) -> Self {
        Self {
            player,
            mv,
            roll,
            turn,
            captured: None,
        }
    }

    #[must_use]
    pub fn with_captured(mut self, captured: Option<Piece>) -> Self {
        self.captured = captured;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_constructors() {
        let quiet = Move::new(3, 4);
        assert!(!quiet.is_capture);

        let hit = Move::capture(3, 9);
        assert!(hit.is_capture);
        assert_eq!((hit.from, hit.to), (3, 9));
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(3, 4).to_string(), "3-4");
        assert_eq!(Move::capture(5, 8).to_string(), "5x8");
    }

    #[test]
    fn test_move_record() {
        let record = MoveRecord::new(Player::Gold, Move::capture(1, 2), 3, 7)
            .with_captured(Some(Piece::new(Player::Black)));

        assert_eq!(record.player, Player::Gold);
        assert_eq!(record.roll, 3);
        assert_eq!(record.turn, 7);
        assert_eq!(record.captured.map(|p| p.owner), Some(Player::Black));
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(Player::Black, Move::new(10, 4), 2, 1);
        let json = serde_json::to_string(&record).unwrap();
        let back: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
