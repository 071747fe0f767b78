//! The two sides of a Tab game and per-side data storage.
//!
//! ## Player
//!
//! Gold and Black start on opposite ends of the board. Each side's start
//! row is the other side's final row.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
///
/// Gold is the canonical perspective: the traversal path is defined for
/// Gold and mirrored for Black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Gold,
    Black,
}

impl Player {
    /// Both sides, Gold first.
    pub const ALL: [Player; 2] = [Player::Gold, Player::Black];

    /// The opposing side.
    #[must_use]
    pub const fn other(self) -> Player {
        match self {
            Player::Gold => Player::Black,
            Player::Black => Player::Gold,
        }
    }

    /// Row where this side's pieces begin.
    #[must_use]
    pub const fn start_row(self, rows: usize) -> usize {
        match self {
            Player::Gold => 0,
            Player::Black => rows - 1,
        }
    }

    /// Row this side's pieces race towards.
    #[must_use]
    pub const fn final_row(self, rows: usize) -> usize {
        self.other().start_row(rows)
    }

    /// Distance of `row` from this side's start row.
    ///
    /// Larger is further along the race.
    #[must_use]
    pub const fn progress(self, row: usize, rows: usize) -> usize {
        match self {
            Player::Gold => row,
            Player::Black => rows - 1 - row,
        }
    }

    /// Whether this side walks the board through the mirrored path.
    #[must_use]
    pub const fn is_mirrored(self) -> bool {
        matches!(self, Player::Black)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Player::Gold => "Gold",
            Player::Black => "Black",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use tab_engine::core::{Player, PlayerMap};
///
/// let mut pieces: PlayerMap<usize> = PlayerMap::with_value(9);
/// pieces[Player::Black] -= 1;
///
/// assert_eq!(pieces[Player::Gold], 9);
/// assert_eq!(pieces[Player::Black], 8);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    gold: T,
    black: T,
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            gold: factory(Player::Gold),
            black: factory(Player::Black),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            gold: value.clone(),
            black: value,
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        match player {
            Player::Gold => &self.gold,
            Player::Black => &self.black,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::Gold => &mut self.gold,
            Player::Black => &mut self.black,
        }
    }

    /// Iterate over (Player, &T) pairs, Gold first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        [(Player::Gold, &self.gold), (Player::Black, &self.black)].into_iter()
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
