//! The collaborators the decision engine talks to.
//!
//! The engine never owns the game. It reads the current board, player and
//! roll through [`GameController`], asks it to roll, skip or move, and
//! reports human-readable status lines through a [`MessageSink`].

use serde::{Deserialize, Serialize};

use crate::core::{Board, MoveError, Player, Snapshot};
use crate::rules::MovePermission;

/// Sender label for engine status messages.
pub const SYSTEM_SENDER: &str = "System";

/// The game/turn controller that owns the live board.
///
/// `can_piece_move` (from [`MovePermission`]) lets the controller lock
/// pieces independently of the board rules.
pub trait GameController: MovePermission {
    /// Current board.
    fn board(&self) -> &Board;

    /// Side to move.
    fn current_player(&self) -> Player;

    /// Active roll, if one has been thrown and not yet used.
    fn current_roll(&self) -> Option<u8>;

    fn is_game_over(&self) -> bool;

    /// Produce a roll for the current player.
    fn request_roll(&mut self);

    /// End the current player's turn without moving.
    fn skip_turn(&mut self);

    /// Move the piece on `from` to `to` for the current player.
    fn apply_move(&mut self, from: usize, to: usize) -> Result<(), MoveError>;

    /// Immutable copy of the state the engine decides from.
    fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.board().clone(), self.current_player(), self.current_roll())
    }
}

/// Receives status lines.
pub trait MessageSink {
    fn post(&mut self, sender: &str, text: &str);
}

/// One posted status line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: String,
    pub text: String,
}

/// Keeps every message in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Message texts, oldest first.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.messages.iter().map(|m| m.text.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl MessageSink for MessageLog {
    fn post(&mut self, sender: &str, text: &str) {
        self.messages.push(Message {
            sender: sender.to_string(),
            text: text.to_string(),
        });
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl MessageSink for NullSink {
    fn post(&mut self, _sender: &str, _text: &str) {}
}
