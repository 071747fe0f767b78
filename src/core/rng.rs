//! Seeded randomness for stick throws and move policies.
//!
//! Every random draw in the crate goes through [`GameRng`], so a game and
//! both automated players replay exactly from their seeds. Each consumer
//! takes its own named stream (`for_context`) so that, for example, extra
//! draws by one side's policy never shift the sticks.
//!
//! ```
//! use tab_engine::core::GameRng;
//!
//! let table = GameRng::new(42);
//! let mut sticks = table.for_context("sticks");
//! let mut replay = GameRng::new(42).for_context("sticks");
//! assert_eq!(sticks.gen_range_usize(0..100), replay.gen_range_usize(0..100));
//! ```

use std::hash::{Hash, Hasher};
use std::ops::Range;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

/// ChaCha8 stream remembering its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    seed: u64,
    inner: ChaCha8Rng,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A separate stream derived from this seed and a label.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform in `[0, 1)`.
    pub fn gen_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Uniform in `[0, max)`; always 0 when `max <= 0`.
    pub fn gen_below(&mut self, max: f64) -> f64 {
        if max > 0.0 {
            self.gen_unit() * max
        } else {
            0.0
        }
    }

    pub fn gen_range_usize(&mut self, range: Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// `true` with the given probability. Values above 1 always fire,
    /// values at or below 0 never do.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        probability > 0.0 && self.inner.gen_bool(probability.min(1.0))
    }

    /// Uniform pick; `None` on an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }

    /// Position in the stream, for saving alongside a snapshot.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream saved with [`state`](Self::state).
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.inner.set_word_pos(state.word_pos);
        rng
    }
}

/// Saved position of a [`GameRng`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position.
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut GameRng) -> Vec<usize> {
        (0..16).map(|_| rng.gen_range_usize(0..1000)).collect()
    }

    #[test]
    fn test_same_seed_same_draws() {
        assert_eq!(draws(&mut GameRng::new(42)), draws(&mut GameRng::new(42)));
        assert_ne!(draws(&mut GameRng::new(42)), draws(&mut GameRng::new(43)));
    }

    #[test]
    fn test_contexts_are_independent() {
        let table = GameRng::new(42);
        let mut gold = table.for_context("Gold");
        let mut black = table.for_context("Black");
        assert_ne!(draws(&mut gold), draws(&mut black));

        let mut again = GameRng::new(42).for_context("Gold");
        assert_eq!(draws(&mut again), draws(&mut table.for_context("Gold")));
    }

    #[test]
    fn test_gen_below_bounds() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let x = rng.gen_below(0.5);
            assert!((0.0..0.5).contains(&x));
        }
        assert_eq!(rng.gen_below(0.0), 0.0);
        assert_eq!(rng.gen_below(-1.0), 0.0);
    }

    #[test]
    fn test_gen_bool_extremes() {
        let mut rng = GameRng::new(7);
        for _ in 0..100 {
            assert!(!rng.gen_bool(0.0));
            assert!(!rng.gen_bool(-0.5));
            assert!(rng.gen_bool(1.0));
            assert!(rng.gen_bool(2.0));
        }
    }

    #[test]
    fn test_choose_from_moves() {
        let mut rng = GameRng::new(1);
        let moves = ["3-4", "5x8"];
        let picked = rng.choose(&moves).copied();
        assert!(picked == Some("3-4") || picked == Some("5x8"));
        assert!(rng.choose::<u8>(&[]).is_none());
    }

    #[test]
    fn test_resume_mid_game() {
        let mut rng = GameRng::new(5);
        let _ = draws(&mut rng);

        let saved = rng.state();
        let ahead = draws(&mut rng);
        assert_eq!(draws(&mut GameRng::from_state(&saved)), ahead);

        let json = serde_json::to_string(&saved).unwrap();
        let back: GameRngState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, saved);
    }
}
