//! The automated player's turn loop.
//!
//! A turn attempt walks a small state machine:
//!
//! ```text
//! Idle --no roll--> AwaitingRoll --(roll_delay)--> take_turn again
//! Idle --no moves--> SkipPending --(skip_delay)--> controller.skip_turn()
//! Idle --chosen----> MovePending --(move_delay)--> controller.apply_move()
//! ```
//!
//! `take_turn` never blocks: every controller mutation is deferred on the
//! engine's [`Scheduler`] and runs when the caller advances time. While a
//! continuation is pending, `take_turn` is a no-op, so re-entry cannot
//! double-schedule. When a deferred task fires it is checked against the
//! controller's current state and dropped with a notice if the game has
//! moved on (ended, changed turn, lost its roll, or the move became illegal).

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{AiConfig, ConfigError, Difficulty, GameRng, Move, MoveError, Player};
use crate::rules::all_moves;

use super::controller::{GameController, MessageLog, MessageSink, SYSTEM_SENDER};
use super::policy::{DecisionContext, Policy};
use super::schedule::Scheduler;
use super::stats::{DecisionRecord, DecisionStats};

/// Status line posted when no legal move exists.
pub const NO_MOVES_MESSAGE: &str = "AI has no valid moves — skipping turn.";

/// A deferred continuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnTask {
    /// Re-enter `take_turn` after the roll delay.
    ResumeTurn,
    /// End the turn without moving.
    SkipTurn,
    /// Play a chosen move.
    ExecuteMove(Move),
}

/// What the engine is waiting for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    #[default]
    Idle,
    AwaitingRoll,
    SkipPending,
    MovePending(Move),
}

/// Result of one `take_turn` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnStep {
    GameOver,
    NotOurTurn,
    /// A continuation is already scheduled.
    Pending,
    RollRequested,
    SkipScheduled,
    MoveScheduled(Move),
}

/// Why a deferred task was dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StaleReason {
    GameOver,
    TurnChanged,
    RollGone,
    NoLongerLegal,
    Rejected(MoveError),
}

impl std::fmt::Display for StaleReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StaleReason::GameOver => f.write_str("game is over"),
            StaleReason::TurnChanged => f.write_str("turn changed"),
            StaleReason::RollGone => f.write_str("roll was used"),
            StaleReason::NoLongerLegal => f.write_str("move is no longer legal"),
            StaleReason::Rejected(e) => write!(f, "controller rejected it: {e}"),
        }
    }
}

/// What running a deferred task did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskOutcome {
    /// `take_turn` ran again after a roll.
    Resumed(TurnStep),
    Skipped,
    Applied(Move),
    Discarded { task: TurnTask, reason: StaleReason },
}

/// Plays one side through a [`GameController`].
pub struct DecisionEngine<S: MessageSink = MessageLog> {
    side: Player,
    config: AiConfig,
    policy: Policy,
    rng: GameRng,
    scheduler: Scheduler<TurnTask>,
    phase: TurnPhase,
    sink: S,
    history: Vector<DecisionRecord>,
    stats: DecisionStats,
    decisions: u32,
}

impl DecisionEngine<MessageLog> {
    /// Engine posting to an in-memory [`MessageLog`].
    #[must_use]
    pub fn new(side: Player, config: AiConfig) -> Self {
        Self::with_sink(side, config, MessageLog::new())
    }

    /// Like [`new`](Self::new), rejecting invalid configuration.
    pub fn try_new(side: Player, config: AiConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(side, config))
    }
}

impl<S: MessageSink> DecisionEngine<S> {
    pub fn with_sink(side: Player, config: AiConfig, sink: S) -> Self {
        let rng = GameRng::new(config.seed).for_context(side.name());
        Self {
            side,
            policy: Policy::from_config(&config),
            config,
            rng,
            scheduler: Scheduler::new(),
            phase: TurnPhase::Idle,
            sink,
            history: Vector::new(),
            stats: DecisionStats::new(),
            decisions: 0,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn side(&self) -> Player {
        self.side
    }

    #[must_use]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// Switch level. Takes effect from the next decision.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
        self.policy = Policy::from_config(&self.config);
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Whether a continuation is scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.scheduler.is_empty()
    }

    /// Due time of the next continuation on the engine's clock.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Every decision made, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<DecisionRecord> {
        &self.history
    }

    #[must_use]
    pub fn stats(&self) -> &DecisionStats {
        &self.stats
    }

    /// Drop any pending continuation and return to idle.
    pub fn cancel(&mut self) {
        self.scheduler.clear();
        self.phase = TurnPhase::Idle;
    }

    // =========================================================================
    // Turn loop
    // =========================================================================

    /// Act once for the current turn opportunity. Never blocks.
    pub fn take_turn<G: GameController>(&mut self, game: &mut G) -> TurnStep {
        if game.is_game_over() {
            return TurnStep::GameOver;
        }
        if game.current_player() != self.side {
            return TurnStep::NotOurTurn;
        }
        if self.is_pending() {
            return TurnStep::Pending;
        }

        self.stats.turns += 1;

        let roll = match game.current_roll() {
            Some(r) if r > 0 => r,
            _ => {
                game.request_roll();
                self.stats.rolls_requested += 1;
                self.scheduler.schedule(self.config.roll_delay(), TurnTask::ResumeTurn);
                self.phase = TurnPhase::AwaitingRoll;
                return TurnStep::RollRequested;
            }
        };

        let moves = all_moves(game.board(), self.side, Some(roll), &*game);
        let ctx = DecisionContext::new(game.board(), self.side);
        let Some(selection) = self.policy.select(&ctx, &moves, &mut self.rng) else {
            return self.schedule_skip();
        };

        if matches!(self.policy, Policy::Adaptive(_)) {
            let text = format!("AI switched to {} mode.", selection.mode.label());
            self.sink.post(SYSTEM_SENDER, &text);
        }

        self.decisions += 1;
        self.stats.moves_chosen += 1;
        self.stats.record_mode(selection.mode);
        self.history.push_back(DecisionRecord {
            turn: self.decisions,
            side: self.side,
            mode: selection.mode,
            chosen: selection.mv,
            candidates: moves.len(),
        });

        self.scheduler
            .schedule(self.config.move_delay(), TurnTask::ExecuteMove(selection.mv));
        self.phase = TurnPhase::MovePending(selection.mv);
        TurnStep::MoveScheduled(selection.mv)
    }

    fn schedule_skip(&mut self) -> TurnStep {
        self.sink.post(SYSTEM_SENDER, NO_MOVES_MESSAGE);
        self.scheduler.schedule(self.config.skip_delay(), TurnTask::SkipTurn);
        self.phase = TurnPhase::SkipPending;
        TurnStep::SkipScheduled
    }

    /// Advance the engine's clock by `elapsed`, running every task that
    /// falls due (including ones scheduled along the way).
    pub fn advance<G: GameController>(&mut self, game: &mut G, elapsed: Duration) -> Vec<TaskOutcome> {
        let until = self.scheduler.now() + elapsed;
        let mut outcomes = Vec::new();
        while let Some(task) = self.scheduler.pop_due(until) {
            outcomes.push(self.run_task(game, task));
        }
        self.scheduler.advance_to(until);
        outcomes
    }

    /// Jump to the next due task and run it.
    pub fn run_next<G: GameController>(&mut self, game: &mut G) -> Option<TaskOutcome> {
        let task = self.scheduler.pop_next()?;
        Some(self.run_task(game, task))
    }

    fn run_task<G: GameController>(&mut self, game: &mut G, task: TurnTask) -> TaskOutcome {
        self.phase = TurnPhase::Idle;

        match task {
            TurnTask::ResumeTurn => TaskOutcome::Resumed(self.take_turn(game)),
            TurnTask::SkipTurn => match self.check_turn(game) {
                Err(reason) => self.discard(task, reason),
                Ok(_) => {
                    game.skip_turn();
                    self.stats.skips += 1;
                    TaskOutcome::Skipped
                }
            },
            TurnTask::ExecuteMove(mv) => {
                let roll = match self.check_turn(game) {
                    Ok(roll) => roll,
                    Err(reason) => return self.discard(task, reason),
                };
                let still_legal = all_moves(game.board(), self.side, Some(roll), &*game)
                    .iter()
                    .any(|m| m.from == mv.from && m.to == mv.to);
                if !still_legal {
                    return self.discard(task, StaleReason::NoLongerLegal);
                }
                match game.apply_move(mv.from, mv.to) {
                    Ok(()) => {
                        self.stats.moves_applied += 1;
                        TaskOutcome::Applied(mv)
                    }
                    Err(e) => self.discard(task, StaleReason::Rejected(e)),
                }
            }
        }
    }

    /// The active roll, if the turn is still ours.
    fn check_turn<G: GameController>(&self, game: &G) -> Result<u8, StaleReason> {
        if game.is_game_over() {
            return Err(StaleReason::GameOver);
        }
        if game.current_player() != self.side {
            return Err(StaleReason::TurnChanged);
        }
        match game.current_roll() {
            Some(r) if r > 0 => Ok(r),
            _ => Err(StaleReason::RollGone),
        }
    }

    fn discard(&mut self, task: TurnTask, reason: StaleReason) -> TaskOutcome {
        self.stats.stale_discarded += 1;
        let what = match task {
            TurnTask::ExecuteMove(mv) => format!("move {mv}"),
            TurnTask::SkipTurn => "skip".to_string(),
            TurnTask::ResumeTurn => "turn".to_string(),
        };
        let text = format!("AI discarded stale {what}: {reason}.");
        self.sink.post(SYSTEM_SENDER, &text);
        TaskOutcome::Discarded { task, reason }
    }
}
