//! In-memory Tab game controller.

use im::Vector;

use crate::ai::GameController;
use crate::core::{
    Board, BoardConfig, ConfigError, GameRng, Move, MoveError, MoveRecord, Piece, Player, PlayerMap,
};
use crate::rules::{
    all_moves, grants_extra_throw, is_tab, throw_sticks, valid_targets, MovePermission, StickThrow,
};

/// A complete game of Tab between Gold and Black.
///
/// Gold moves first. A piece that has never left its start row needs a
/// tâb (a roll of 1) to move. Landing on an opposing piece captures it,
/// and a side with no pieces left loses.
#[derive(Clone, Debug)]
pub struct TabGame {
    board: Board,
    current: Player,
    roll: Option<u8>,
    last_throw: Option<StickThrow>,
    /// The active roll grants another throw after it is used.
    extra_throw: bool,
    turn: u32,
    winner: Option<Player>,
    rng: GameRng,
    history: Vector<MoveRecord>,
    captures: PlayerMap<u32>,
}

impl TabGame {
    /// Standard opening on a board of the given size.
    pub fn new(config: BoardConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_board(Board::standard(config), Player::Gold, seed))
    }

    /// Start from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board, to_move: Player, seed: u64) -> Self {
        let mut game = Self {
            board,
            current: to_move,
            roll: None,
            last_throw: None,
            extra_throw: false,
            turn: 1,
            winner: None,
            rng: GameRng::new(seed).for_context("sticks"),
            history: Vector::new(),
            captures: PlayerMap::default(),
        };
        game.check_winner();
        game
    }

    /// Force the active roll.
    pub fn set_roll(&mut self, value: u8) {
        self.roll = (value > 0).then_some(value);
        self.extra_throw = grants_extra_throw(value);
        self.last_throw = None;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Turn number (starts at 1, bumps when the turn passes).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The sticks behind the active roll, if it came from a throw.
    #[must_use]
    pub fn last_throw(&self) -> Option<&StickThrow> {
        self.last_throw.as_ref()
    }

    /// Every applied move, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Pieces captured by each side.
    #[must_use]
    pub fn captures(&self) -> &PlayerMap<u32> {
        &self.captures
    }

    /// Legal moves for the side to move under the active roll.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        all_moves(&self.board, self.current, self.roll, self)
    }

    // =========================================================================
    // Turn flow
    // =========================================================================

    fn check_winner(&mut self) {
        let counts = self.board.piece_counts();
        for player in Player::ALL {
            if counts[player] == 0 && counts[player.other()] > 0 {
                self.winner = Some(player.other());
            }
        }
    }

    /// Use up the roll; the same side throws again if it earned it.
    fn end_roll(&mut self) {
        self.roll = None;
        if self.extra_throw {
            self.extra_throw = false;
        } else {
            self.current = self.current.other();
            self.turn += 1;
        }
    }
}

impl MovePermission for TabGame {
    fn can_piece_move(&self, piece: &Piece) -> bool {
        piece.has_left_start_row || self.roll.is_some_and(is_tab)
    }
}

impl GameController for TabGame {
    fn board(&self) -> &Board {
        &self.board
    }

    fn current_player(&self) -> Player {
        self.current
    }

    fn current_roll(&self) -> Option<u8> {
        self.roll
    }

    fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    fn request_roll(&mut self) {
        if self.is_game_over() || self.roll.is_some() {
            return;
        }
        let throw = throw_sticks(&mut self.rng);
        self.roll = Some(throw.value);
        self.extra_throw = throw.keep_playing;
        self.last_throw = Some(throw);
    }

    fn skip_turn(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.end_roll();
    }

    fn apply_move(&mut self, from: usize, to: usize) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        let roll = match self.roll {
            Some(r) if r > 0 => r,
            _ => return Err(MoveError::NoRoll),
        };
        let player = self.current;
        let mut piece = match self.board.get(from) {
            Some(p) if p.is_owned_by(player) => *p,
            _ => return Err(MoveError::NotOwnPiece { player, from }),
        };
        if !self.can_piece_move(&piece) {
            return Err(MoveError::PieceLocked { from });
        }
        if !valid_targets(&self.board, player, self.roll, from).contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }

        let rows = self.board.rows();
        let to_row = self.board.row_of(to);
        if to_row != player.start_row(rows) {
            piece.has_left_start_row = true;
        }
        if to_row == player.final_row(rows) {
            piece.has_reached_final_row = true;
        }

        self.board.take(from);
        let captured = self.board.take(to);
        self.board.place(to, piece);

        let mv = Move {
            from,
            to,
            is_capture: captured.is_some(),
        };
        if captured.is_some() {
            self.captures[player] += 1;
        }
        self.history
            .push_back(MoveRecord::new(player, mv, roll, self.turn).with_captured(captured));

        self.check_winner();
        if self.is_game_over() {
            self.roll = None;
        } else {
            self.end_roll();
        }
        Ok(())
    }
}
