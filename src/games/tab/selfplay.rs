//! Engine-versus-engine matches.

use serde::{Deserialize, Serialize};

use crate::ai::{DecisionEngine, DecisionStats, GameController, MessageLog, MessageSink};
use crate::core::{AiConfig, Player, PlayerMap};

use super::game::TabGame;

/// Outcome of a finished or truncated match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// `None` when `max_steps` ran out first.
    pub winner: Option<Player>,

    /// Moves applied by both sides.
    pub moves: usize,

    /// Pieces captured by each side.
    pub captures: PlayerMap<u32>,

    /// Turns skipped for lack of moves, both sides.
    pub skips: u32,

    /// Driver steps taken.
    pub steps: usize,
}

/// Drives two decision engines over one game.
///
/// Each step asks the side to move to act, then jumps its clock to the
/// next due continuation and runs it.
pub struct SelfPlay<S: MessageSink = MessageLog> {
    game: TabGame,
    engines: PlayerMap<DecisionEngine<S>>,
    max_steps: usize,
}

impl SelfPlay<MessageLog> {
    /// Both engines keep their messages in a [`MessageLog`].
    #[must_use]
    pub fn new(game: TabGame, gold: AiConfig, black: AiConfig) -> Self {
        Self::with_sinks(game, gold, black, |_| MessageLog::new())
    }
}

impl<S: MessageSink> SelfPlay<S> {
    pub const DEFAULT_MAX_STEPS: usize = 20_000;

    /// Engines posting to sinks built by `sink` for each side.
    #[must_use]
    pub fn with_sinks(
        game: TabGame,
        gold: AiConfig,
        black: AiConfig,
        sink: impl Fn(Player) -> S,
    ) -> Self {
        let engines = PlayerMap::new(|player| {
            let config = match player {
                Player::Gold => gold.clone(),
                Player::Black => black.clone(),
            };
            DecisionEngine::with_sink(player, config, sink(player))
        });
        Self {
            game,
            engines,
            max_steps: Self::DEFAULT_MAX_STEPS,
        }
    }

    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    #[must_use]
    pub fn game(&self) -> &TabGame {
        &self.game
    }

    #[must_use]
    pub fn engine(&self, player: Player) -> &DecisionEngine<S> {
        &self.engines[player]
    }

    /// Play until someone wins or `max_steps` is reached.
    pub fn run(&mut self) -> MatchSummary {
        let mut steps = 0;
        while steps < self.max_steps && !self.game.is_game_over() {
            let engine = &mut self.engines[self.game.current_player()];
            engine.take_turn(&mut self.game);
            if engine.run_next(&mut self.game).is_none() {
                break;
            }
            steps += 1;
        }

        MatchSummary {
            winner: self.game.winner(),
            moves: self.game.history().len(),
            captures: self.game.captures().clone(),
            skips: self.total(|s| s.skips),
            steps,
        }
    }

    fn total(&self, field: impl Fn(&DecisionStats) -> u32) -> u32 {
        self.engines.iter().map(|(_, e)| field(e.stats())).sum()
    }
}
