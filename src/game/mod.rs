//! Turn controller for a two-player game.

pub mod logic;
pub mod types;

pub use logic::{pass, place_stone, process_input, resign, undo};
pub use types::*;
