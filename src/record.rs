//! Game records: the accepted moves of a game, replayable onto a fresh board.
//!
//! Records are stored as pretty-printed JSON.

use crate::constants::{MAX_BOARD_SIZE, MIN_BOARD_SIZE, RECORD_FORMAT_VERSION};
use crate::engine::{Player, Point};
use crate::error::RecordError;
use crate::game::{pass, place_stone, Game, GameEnd};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What a player did on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Place(Point),
    Pass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMove {
    pub player: Player,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub version: u32,
    pub board_size: usize,
    pub started_at: DateTime<Utc>,
    pub moves: Vec<RecordedMove>,
    #[serde(default)]
    pub end: Option<GameEnd>,
}

impl GameRecord {
    pub fn new(board_size: usize) -> Self {
        Self {
            version: RECORD_FORMAT_VERSION,
            board_size,
            started_at: Utc::now(),
            moves: Vec::new(),
            end: None,
        }
    }

    pub fn push(&mut self, player: Player, action: Action) {
        self.moves.push(RecordedMove { player, action });
    }

    pub fn pop(&mut self) -> Option<RecordedMove> {
        self.moves.pop()
    }

    pub fn save(&self, path: &Path) -> Result<(), RecordError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, RecordError> {
        let json = fs::read_to_string(path).map_err(|source| RecordError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| RecordError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Rebuild a game by playing every recorded move on a fresh board.
///
/// Moves are taken in order and alternate from Black regardless of the
/// `player` stored with each entry, so a record always describes the same
/// final position. The recorded ending, if any, is carried over.
pub fn replay(record: &GameRecord) -> Result<Game, RecordError> {
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&record.board_size) {
        return Err(RecordError::BoardSize(record.board_size));
    }

    let mut game = Game::new(record.board_size);
    game.record.started_at = record.started_at;
    for (index, recorded) in record.moves.iter().enumerate() {
        match recorded.action {
            Action::Place(point) => {
                place_stone(&mut game, point)
                    .map_err(|source| RecordError::IllegalMove { index, source })?;
            }
            Action::Pass => pass(&mut game),
        }
    }

    game.end = record.end;
    game.record.end = record.end;
    Ok(game)
}
