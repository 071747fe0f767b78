//! Board rules: traversal, destination legality and move enumeration.
//!
//! - `topology`: the snake path and its single fork
//! - `legality`: mirrored walk plus the four destination filters
//! - `movegen`: every legal move for one side
//! - `sticks`: producing a roll
//!
//! All queries are pure functions over a borrowed [`Board`](crate::core::Board)
//! and degrade to empty results on bad input.

pub mod topology;
pub mod legality;
pub mod movegen;
pub mod sticks;

use smallvec::SmallVec;

/// Successors of one cell: one, or two at the fork.
pub type Successors = SmallVec<[usize; 2]>;

/// De-duplicated set of cells in discovery order.
pub type TargetSet = SmallVec<[usize; 4]>;

pub use topology::PathTopology;
pub use legality::{candidate_targets, check_destination, valid_targets, Rejection};
pub use movegen::{all_moves, AllowAll, MovePermission};
pub use sticks::{grants_extra_throw, is_tab, throw_sticks, StickThrow, STICK_COUNT, TAB};
