//! The automated player.
//!
//! ## Overview
//!
//! - [`BoardEvaluator`]: static positional score of a board for one side
//! - [`Policy`]: easy/medium/hard/adaptive move selection
//! - [`DecisionEngine`]: the non-blocking turn loop that rolls, chooses and
//!   plays through a [`GameController`], pacing each step on a virtual-clock
//!   [`Scheduler`]
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//! use tab_engine::ai::DecisionEngine;
//! use tab_engine::core::{AiConfig, BoardConfig, Difficulty, Player};
//! use tab_engine::games::tab::TabGame;
//!
//! let mut game = TabGame::new(BoardConfig::default(), 42).unwrap();
//! let mut engine = DecisionEngine::new(Player::Gold, AiConfig::new(Difficulty::Hard));
//!
//! // Ask for a roll; the engine resumes once the roll delay has passed.
//! engine.take_turn(&mut game);
//! for outcome in engine.advance(&mut game, Duration::from_secs(2)) {
//!     println!("{outcome:?}");
//! }
//! ```

pub mod eval;
pub mod policy;
pub mod schedule;
pub mod controller;
pub mod stats;
pub mod engine;

pub use eval::BoardEvaluator;
pub use policy::{
    AdaptivePolicy, DecisionContext, HeuristicPolicy, MovePolicy, Policy, RandomPolicy, Selection,
    SimulatedPolicy,
};
pub use schedule::Scheduler;
pub use controller::{GameController, Message, MessageLog, MessageSink, NullSink, SYSTEM_SENDER};
pub use stats::{DecisionRecord, DecisionStats};
pub use engine::{DecisionEngine, StaleReason, TaskOutcome, TurnPhase, TurnStep, TurnTask, NO_MOVES_MESSAGE};
