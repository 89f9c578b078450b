//! Goban - a two-player territorial board game engine.
//!
//! Stones are placed alternately on a square grid; enemy groups left without
//! liberties by a move are captured. The [`engine`] module holds the pure
//! board logic, [`game`] sequences turns, and [`session`] drives an
//! interactive game over text input and output.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod game;
pub mod input;
pub mod persistence;
pub mod record;
pub mod render;
pub mod session;

pub use config::GameConfig;
pub use engine::{Board, Cell, Player, Point};
pub use error::{ConfigError, InputError, MoveError, RecordError};
pub use game::{Game, GameEnd, GameInput, TurnState};
pub use record::{replay, GameRecord};
pub use render::{render_board, RenderStyle};
