//! Engine configuration.
//!
//! - `BoardConfig`: board dimensions (rows fixed at 4, columns configurable)
//! - `Difficulty`: the selectable automated-player levels
//! - `AiConfig`: policy tuning, pacing delays and RNG seed
//!
//! All configuration is plain data with builder methods and a
//! `validate()` check. Probabilities of 0 disable the corresponding
//! random branch, which makes every policy fully deterministic.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::ConfigError;

/// Number of rows on every Tab board.
pub const ROWS: usize = 4;

/// Default board width.
pub const DEFAULT_COLS: usize = 9;

/// Board dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl BoardConfig {
    /// Standard four-row board with the given width.
    #[must_use]
    pub const fn with_cols(cols: usize) -> Self {
        Self { rows: ROWS, cols }
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Check the dimensions describe a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows != ROWS {
            return Err(ConfigError::Rows {
                expected: ROWS,
                got: self.rows,
            });
        }
        if self.cols == 0 {
            return Err(ConfigError::NoColumns);
        }
        Ok(())
    }
}

/// Automated-player difficulty levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniform random with occasional deliberate mistakes.
    Easy,
    /// Per-move heuristic scoring.
    #[default]
    Medium,
    /// One-ply simulation scored by the board evaluator.
    Hard,
    /// Picks one of the other three from the material balance.
    Adaptive,
}

impl Difficulty {
    /// Upper-case label used in status messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
            Difficulty::Adaptive => "ADAPTIVE",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Decision engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Active policy.
    pub difficulty: Difficulty,

    /// Seed for the engine's RNG.
    pub seed: u64,

    /// Probability that the easy policy plays the first candidate.
    pub mistake_rate: f64,

    /// Upper bound of the medium policy's per-move noise.
    pub heuristic_noise: f64,

    /// Upper bound of the board evaluator's tie-breaking noise.
    pub eval_noise: f64,

    /// Probability that the adaptive policy ignores the material balance.
    pub adaptive_override: f64,

    /// Delay between requesting a roll and re-entering the turn.
    pub roll_delay_ms: u64,

    /// Delay before skipping a turn with no legal moves.
    pub skip_delay_ms: u64,

    /// Delay before executing a chosen move.
    pub move_delay_ms: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            seed: 42,
            mistake_rate: 0.1,
            heuristic_noise: 0.5,
            eval_noise: 0.05,
            adaptive_override: 0.2,
            roll_delay_ms: 1000,
            skip_delay_ms: 1000,
            move_delay_ms: 900,
        }
    }
}

impl AiConfig {
    /// Create a config for the given difficulty with default tuning.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_mistake_rate(mut self, rate: f64) -> Self {
        self.mistake_rate = rate;
        self
    }

    #[must_use]
    pub fn with_heuristic_noise(mut self, noise: f64) -> Self {
        self.heuristic_noise = noise;
        self
    }

    #[must_use]
    pub fn with_eval_noise(mut self, noise: f64) -> Self {
        self.eval_noise = noise;
        self
    }

    #[must_use]
    pub fn with_adaptive_override(mut self, rate: f64) -> Self {
        self.adaptive_override = rate;
        self
    }

    /// Set all three pacing delays at once.
    #[must_use]
    pub fn with_delays_ms(mut self, roll: u64, skip: u64, mv: u64) -> Self {
        self.roll_delay_ms = roll;
        self.skip_delay_ms = skip;
        self.move_delay_ms = mv;
        self
    }

    /// Disable every random branch: no mistakes, no noise, no overrides.
    #[must_use]
    pub fn deterministic(self) -> Self {
        self.with_mistake_rate(0.0)
            .with_heuristic_noise(0.0)
            .with_eval_noise(0.0)
            .with_adaptive_override(0.0)
    }

    #[must_use]
    pub fn roll_delay(&self) -> Duration {
        Duration::from_millis(self.roll_delay_ms)
    }

    #[must_use]
    pub fn skip_delay(&self) -> Duration {
        Duration::from_millis(self.skip_delay_ms)
    }

    #[must_use]
    pub fn move_delay(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms)
    }

    /// Check probabilities and noise amplitudes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("mistake_rate", self.mistake_rate),
            ("adaptive_override", self.adaptive_override),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Probability { name, value });
            }
        }
        for (name, value) in [
            ("heuristic_noise", self.heuristic_noise),
            ("eval_noise", self.eval_noise),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_config_default() {
        let config = BoardConfig::default();
        assert_eq!(config.rows, 4);
        assert_eq!(config.cols, 9);
        assert_eq!(config.cell_count(), 36);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_board_config_validation() {
        assert!(matches!(
            BoardConfig::with_cols(0).validate(),
            Err(ConfigError::NoColumns)
        ));
        let tall = BoardConfig { rows: 5, cols: 9 };
        assert!(matches!(
            tall.validate(),
            Err(ConfigError::Rows { expected: 4, got: 5 })
        ));
        assert!(BoardConfig::with_cols(3).validate().is_ok());
    }

    #[test]
    fn test_ai_config_default() {
        let config = AiConfig::default();
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.mistake_rate, 0.1);
        assert_eq!(config.move_delay(), Duration::from_millis(900));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ai_config_builder() {
        let config = AiConfig::new(Difficulty::Hard)
            .with_seed(7)
            .with_eval_noise(0.0)
            .with_delays_ms(10, 20, 30);

        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.seed, 7);
        assert_eq!(config.eval_noise, 0.0);
        assert_eq!(config.roll_delay(), Duration::from_millis(10));
        assert_eq!(config.skip_delay(), Duration::from_millis(20));
        assert_eq!(config.move_delay(), Duration::from_millis(30));
    }

    #[test]
    fn test_deterministic_disables_randomness() {
        let config = AiConfig::default().deterministic();
        assert_eq!(config.mistake_rate, 0.0);
        assert_eq!(config.heuristic_noise, 0.0);
        assert_eq!(config.eval_noise, 0.0);
        assert_eq!(config.adaptive_override, 0.0);
    }

    #[test]
    fn test_ai_config_validation() {
        let bad = AiConfig::default().with_mistake_rate(1.5);
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::Probability { name: "mistake_rate", .. })
        ));

        let bad = AiConfig::default().with_eval_noise(-0.1);
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::Negative { name: "eval_noise", .. })
        ));

        let bad = AiConfig::default().with_heuristic_noise(f64::NAN);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_difficulty_serde_lowercase() {
        let json = serde_json::to_string(&Difficulty::Adaptive).unwrap();
        assert_eq!(json, "\"adaptive\"");
        let back: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(back, Difficulty::Hard);
    }

    #[test]
    fn test_ai_config_serialization() {
        let config = AiConfig::new(Difficulty::Easy).with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let back: AiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);

        let partial: AiConfig = serde_json::from_str(r#"{"difficulty":"hard"}"#).unwrap();
        assert_eq!(partial.difficulty, Difficulty::Hard);
        assert_eq!(partial.move_delay_ms, 900);
    }
}
