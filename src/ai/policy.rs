//! Move selection policies for the automated player.
//!
//! Each policy implements [`MovePolicy`]; [`Policy`] is the closed set the
//! decision engine dispatches over:
//! - `Random`: uniform pick with an occasional deliberate mistake (easy)
//! - `Heuristic`: per-move scoring from a handful of criteria (medium)
//! - `Simulated`: one-ply lookahead scored by [`BoardEvaluator`] (hard)
//! - `Adaptive`: picks one of the above from the material balance
//!
//! Heuristic and simulated policies keep the first strictly-best move, so
//! enumeration order breaks exact ties.

use serde::{Deserialize, Serialize};

use crate::core::{AiConfig, Board, Difficulty, GameRng, Move, Player};

use super::eval::BoardEvaluator;

/// What a policy sees when choosing.
#[derive(Clone, Copy, Debug)]
pub struct DecisionContext<'a> {
    /// Board the candidate moves were generated from.
    pub board: &'a Board,
    /// Side choosing the move.
    pub side: Player,
}

impl<'a> DecisionContext<'a> {
    #[must_use]
    pub const fn new(board: &'a Board, side: Player) -> Self {
        Self { board, side }
    }
}

/// A policy that picks one of the candidate moves.
pub trait MovePolicy {
    /// Choose a move. Returns `None` only when `moves` is empty.
    fn choose(&self, ctx: &DecisionContext<'_>, moves: &[Move], rng: &mut GameRng) -> Option<Move>;
}

/// Keep the first move whose score is strictly greater than all before it.
fn first_best(moves: &[Move], mut score: impl FnMut(&Move) -> f64) -> Option<Move> {
    let mut best = None;
    let mut best_score = f64::NEG_INFINITY;
    for mv in moves {
        let s = score(mv);
        if s > best_score {
            best_score = s;
            best = Some(*mv);
        }
    }
    best
}

// =============================================================================
// Easy
// =============================================================================

/// Uniform random choice; with `mistake_rate` probability plays the
/// first candidate instead.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RandomPolicy {
    pub mistake_rate: f64,
}

impl MovePolicy for RandomPolicy {
    fn choose(&self, _ctx: &DecisionContext<'_>, moves: &[Move], rng: &mut GameRng) -> Option<Move> {
        let first = *moves.first()?;
        if rng.gen_bool(self.mistake_rate) {
            return Some(first);
        }
        rng.choose(moves).copied()
    }
}

// =============================================================================
// Medium
// =============================================================================

const CAPTURE_WEIGHT: f64 = 10.0;
const ADVANCE_WEIGHT: f64 = 3.0;
const LEAVE_START_WEIGHT: f64 = 4.0;
const ENTER_FINAL_WEIGHT: f64 = 6.0;
const FINISHED_PIECE_PENALTY: f64 = 2.0;

/// Scores each move on its own merits.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeuristicPolicy {
    /// Upper bound of the random amount added to each score.
    pub noise: f64,
}

impl HeuristicPolicy {
    /// Score without noise.
    #[must_use]
    pub fn score(&self, ctx: &DecisionContext<'_>, mv: &Move) -> f64 {
        let board = ctx.board;
        let rows = board.rows();
        let side = ctx.side;
        let from_row = board.row_of(mv.from);
        let to_row = board.row_of(mv.to);
        let start_row = side.start_row(rows);

        let mut score = 0.0;
        if mv.is_capture {
            score += CAPTURE_WEIGHT;
        }
        if side.progress(to_row, rows) > side.progress(from_row, rows) {
            score += ADVANCE_WEIGHT;
        }
        if from_row == start_row && to_row != start_row {
            score += LEAVE_START_WEIGHT;
        }
        if to_row == side.final_row(rows) {
            score += ENTER_FINAL_WEIGHT;
        }
        if board.get(mv.from).is_some_and(|p| p.has_reached_final_row) {
            score -= FINISHED_PIECE_PENALTY;
        }
        score
    }
}

impl MovePolicy for HeuristicPolicy {
    fn choose(&self, ctx: &DecisionContext<'_>, moves: &[Move], rng: &mut GameRng) -> Option<Move> {
        first_best(moves, |mv| self.score(ctx, mv) + rng.gen_below(self.noise))
    }
}

// =============================================================================
// Hard
// =============================================================================

/// Applies each move to a copy of the board and keeps the best-scoring result.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulatedPolicy {
    pub evaluator: BoardEvaluator,
}

impl MovePolicy for SimulatedPolicy {
    fn choose(&self, ctx: &DecisionContext<'_>, moves: &[Move], rng: &mut GameRng) -> Option<Move> {
        first_best(moves, |mv| {
            let after = ctx.board.with_move(mv.from, mv.to);
            self.evaluator.evaluate(&after, ctx.side, rng)
        })
    }
}

// =============================================================================
// Adaptive
// =============================================================================

/// Plays harder when behind and looser when ahead.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdaptivePolicy {
    /// Probability of ignoring the balance and picking a mode at random.
    pub override_rate: f64,
    pub easy: RandomPolicy,
    pub medium: HeuristicPolicy,
    pub hard: SimulatedPolicy,
}

impl AdaptivePolicy {
    /// Mode implied by `own pieces - opposing pieces`.
    #[must_use]
    pub const fn base_mode(advantage: i64) -> Difficulty {
        if advantage < -2 {
            Difficulty::Hard
        } else if advantage <= 1 {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        }
    }

    /// Pick the mode for this move.
    pub fn select_mode(&self, ctx: &DecisionContext<'_>, rng: &mut GameRng) -> Difficulty {
        let counts = ctx.board.piece_counts();
        let advantage = counts[ctx.side] as i64 - counts[ctx.side.other()] as i64;

        if rng.gen_bool(self.override_rate) {
            const MODES: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
            return MODES[rng.gen_range_usize(0..MODES.len())];
        }
        Self::base_mode(advantage)
    }

    /// Choose with an already-selected mode.
    pub fn choose_with_mode(
        &self,
        mode: Difficulty,
        ctx: &DecisionContext<'_>,
        moves: &[Move],
        rng: &mut GameRng,
    ) -> Option<Move> {
        match mode {
            Difficulty::Easy => self.easy.choose(ctx, moves, rng),
            Difficulty::Hard => self.hard.choose(ctx, moves, rng),
            Difficulty::Medium | Difficulty::Adaptive => self.medium.choose(ctx, moves, rng),
        }
    }
}

impl MovePolicy for AdaptivePolicy {
    fn choose(&self, ctx: &DecisionContext<'_>, moves: &[Move], rng: &mut GameRng) -> Option<Move> {
        let mode = self.select_mode(ctx, rng);
        self.choose_with_mode(mode, ctx, moves, rng)
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// A chosen move and the mode that chose it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub mv: Move,
    /// For adaptive play, the mode picked for this move.
    pub mode: Difficulty,
}

/// The active policy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Policy {
    Random(RandomPolicy),
    Heuristic(HeuristicPolicy),
    Simulated(SimulatedPolicy),
    Adaptive(AdaptivePolicy),
}

impl Policy {
    /// Build the policy named by `config.difficulty`.
    #[must_use]
    pub fn from_config(config: &AiConfig) -> Self {
        let easy = RandomPolicy {
            mistake_rate: config.mistake_rate,
        };
        let medium = HeuristicPolicy {
            noise: config.heuristic_noise,
        };
        let hard = SimulatedPolicy {
            evaluator: BoardEvaluator::new(config.eval_noise),
        };

        match config.difficulty {
            Difficulty::Easy => Policy::Random(easy),
            Difficulty::Medium => Policy::Heuristic(medium),
            Difficulty::Hard => Policy::Simulated(hard),
            Difficulty::Adaptive => Policy::Adaptive(AdaptivePolicy {
                override_rate: config.adaptive_override,
                easy,
                medium,
                hard,
            }),
        }
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        match self {
            Policy::Random(_) => Difficulty::Easy,
            Policy::Heuristic(_) => Difficulty::Medium,
            Policy::Simulated(_) => Difficulty::Hard,
            Policy::Adaptive(_) => Difficulty::Adaptive,
        }
    }

    /// Choose a move. `None` only when `moves` is empty.
    pub fn select(&self, ctx: &DecisionContext<'_>, moves: &[Move], rng: &mut GameRng) -> Option<Selection> {
        let (mv, mode) = match self {
            Policy::Random(p) => (p.choose(ctx, moves, rng)?, Difficulty::Easy),
            Policy::Heuristic(p) => (p.choose(ctx, moves, rng)?, Difficulty::Medium),
            Policy::Simulated(p) => (p.choose(ctx, moves, rng)?, Difficulty::Hard),
            Policy::Adaptive(p) => {
                let mode = p.select_mode(ctx, rng);
                (p.choose_with_mode(mode, ctx, moves, rng)?, mode)
            }
        };
        Some(Selection { mv, mode })
    }
}
