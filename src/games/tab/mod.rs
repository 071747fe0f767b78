//! Tab, the Levantine race-and-capture game.
//!
//! - Four rows; Gold starts on the first, Black on the last
//! - Four sticks are thrown for each roll; 1, 4 and 6 throw again
//! - A piece leaves home only on a tâb (a throw of 1)
//! - Landing on an opposing piece captures it; lose all pieces and you lose

mod game;
mod selfplay;

pub use game::TabGame;
pub use selfplay::{MatchSummary, SelfPlay};
