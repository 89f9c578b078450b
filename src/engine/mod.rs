//! Board-state engine: geometry, groups, liberties and capture.
//!
//! Every operation here is a pure function over [`Board`] values. Placement
//! preconditions (on board, empty) are trusted by [`apply_move`] and checked by
//! [`try_play`].

pub mod board;
pub mod capture;
pub mod group;
pub mod liberty;
pub mod moves;
pub mod point;

pub use board::{Board, Cell, Player};
pub use capture::{captured_groups, remove_captured_stones};
pub use group::{group_containing, Group};
pub use liberty::{count_liberties, liberties_at, liberties_for_group};
pub use moves::{apply_move, has_liberty_after, play_move, try_play, MoveOutcome};
pub use point::Point;
