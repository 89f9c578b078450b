use crate::engine::Point;
use std::path::PathBuf;

/// Reasons a placement is refused at the validated move boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("{0} is not on the board")]
    OffBoard(Point),

    #[error("{0} is already occupied")]
    Occupied(Point),

    #[error("a stone at {0} would have no liberties")]
    NoLiberties(Point),
}

/// Problems with a line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("expected a point like `2 3`, or one of pass, undo, resign, quit (got {0:?})")]
    Malformed(String),

    #[error("{0} is not on the board")]
    OffBoard(Point),

    #[error("{0} is already occupied")]
    Occupied(Point),
}

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size must be between {min} and {max} (got {size})")]
    BoardSize { size: usize, min: usize, max: usize },
}

/// Errors saving, loading or replaying a game record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("failed to read record {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse record {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("record has unsupported board size {0}")]
    BoardSize(usize),

    #[error("move {index} in record is illegal: {source}")]
    IllegalMove { index: usize, source: MoveError },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
