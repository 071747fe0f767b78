//! Stick throws: how a roll is produced.
//!
//! Four two-sided sticks are thrown. The number of flat sides facing up
//! gives the roll: none up scores 6, otherwise the count itself. A single
//! flat side up is the tâb. Throws of 1, 4 and 6 earn another throw.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Number of sticks in a throw.
pub const STICK_COUNT: usize = 4;

/// Value of a tâb.
pub const TAB: u8 = 1;

/// Whether a roll of `value` is a tâb.
#[must_use]
pub const fn is_tab(value: u8) -> bool {
    value == TAB
}

/// Whether a roll of `value` earns another throw.
#[must_use]
pub const fn grants_extra_throw(value: u8) -> bool {
    matches!(value, 1 | 4 | 6)
}

/// One throw of the sticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StickThrow {
    /// `true` where the flat side faces up.
    pub sticks: [bool; STICK_COUNT],
    /// Steps granted by this throw.
    pub value: u8,
    /// Whether the thrower throws again after moving.
    pub keep_playing: bool,
}

impl StickThrow {
    /// Score a given arrangement of sticks.
    #[must_use]
    pub fn from_sticks(sticks: [bool; STICK_COUNT]) -> Self {
        let up = sticks.iter().filter(|&&s| s).count();
        let value = match up {
            0 => 6,
            n => n as u8,
        };
        Self {
            sticks,
            value,
            keep_playing: grants_extra_throw(value),
        }
    }

    /// Number of flat sides facing up.
    #[must_use]
    pub fn up_count(&self) -> usize {
        self.sticks.iter().filter(|&&s| s).count()
    }

    /// Whether this throw is a tâb (exactly one flat side up).
    #[must_use]
    pub fn is_tab(&self) -> bool {
        is_tab(self.value)
    }

    /// Stick faces, flat sides first: `⎮` for up, `•` for down.
    #[must_use]
    pub fn symbol(&self) -> String {
        let up = self.up_count();
        std::iter::repeat('⎮')
            .take(up)
            .chain(std::iter::repeat('•').take(STICK_COUNT - up))
            .collect()
    }
}

/// Throw the sticks.
pub fn throw_sticks(rng: &mut GameRng) -> StickThrow {
    let mut sticks = [false; STICK_COUNT];
    for stick in &mut sticks {
        *stick = rng.gen_bool(0.5);
    }
    StickThrow::from_sticks(sticks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring() {
        let score = |up: usize| {
            let mut sticks = [false; STICK_COUNT];
            for s in sticks.iter_mut().take(up) {
                *s = true;
            }
            StickThrow::from_sticks(sticks)
        };

        assert_eq!(score(0).value, 6);
        assert_eq!(score(1).value, 1);
        assert_eq!(score(2).value, 2);
        assert_eq!(score(3).value, 3);
        assert_eq!(score(4).value, 4);

        assert!(score(0).keep_playing);
        assert!(score(1).keep_playing);
        assert!(!score(2).keep_playing);
        assert!(!score(3).keep_playing);
        assert!(score(4).keep_playing);

        assert!(score(1).is_tab());
        assert!(!score(4).is_tab());
    }

    #[test]
    fn test_symbol() {
        assert_eq!(StickThrow::from_sticks([false; 4]).symbol(), "••••");
        assert_eq!(StickThrow::from_sticks([true, false, true, false]).symbol(), "⎮⎮••");
        assert_eq!(StickThrow::from_sticks([true; 4]).symbol(), "⎮⎮⎮⎮");
    }

    #[test]
    fn test_throws_cover_every_value() {
        let mut rng = GameRng::new(3);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let throw = throw_sticks(&mut rng);
            assert!((1..=6).contains(&throw.value));
            assert_ne!(throw.value, 5);
            seen[throw.value as usize] = true;
        }
        assert!(seen[1] && seen[2] && seen[3] && seen[4] && seen[6]);
    }

    #[test]
    fn test_throws_are_seeded() {
        let mut a = GameRng::new(11);
        let mut b = GameRng::new(11);
        for _ in 0..20 {
            assert_eq!(throw_sticks(&mut a), throw_sticks(&mut b));
        }
    }

    #[test]
    fn test_roll_rules() {
        assert!(is_tab(TAB));
        assert!(!is_tab(2));
        let extra: Vec<u8> = (0..=6).filter(|&v| grants_extra_throw(v)).collect();
        assert_eq!(extra, vec![1, 4, 6]);
        for value in [1u8, 2, 3, 4, 6] {
            let up = if value == 6 { 0 } else { usize::from(value) };
            let sticks = std::array::from_fn(|i| i < up);
            assert_eq!(StickThrow::from_sticks(sticks).keep_playing, grants_extra_throw(value));
        }
    }
}
