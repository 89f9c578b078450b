//! Location of saved games under `~/.goban/`.

use crate::constants::{LAST_GAME_FILE, SAVE_DIR_NAME};
use crate::error::RecordError;
use crate::record::GameRecord;
use std::fs;
use std::path::PathBuf;

/// The `~/.goban/` directory, created if needed.
pub fn goban_dir() -> Result<PathBuf, RecordError> {
    let home_dir = dirs::home_dir().ok_or(RecordError::NoHomeDir)?;
    let dir = home_dir.join(SAVE_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path for a file in `~/.goban/`.
pub fn save_path(filename: &str) -> Result<PathBuf, RecordError> {
    Ok(goban_dir()?.join(filename))
}

/// Save `record` as the most recent game. Returns where it was written.
pub fn save_last_game(record: &GameRecord) -> Result<PathBuf, RecordError> {
    let path = save_path(LAST_GAME_FILE)?;
    record.save(&path)?;
    Ok(path)
}

/// Load the most recent game, if one was saved.
pub fn load_last_game() -> Result<Option<GameRecord>, RecordError> {
    let path = save_path(LAST_GAME_FILE)?;
    if !path.exists() {
        return Ok(None);
    }
    GameRecord::load(&path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goban_dir_exists() {
        let dir = goban_dir().expect("goban_dir should succeed");
        assert!(dir.exists());
        assert!(dir.ends_with(SAVE_DIR_NAME));
    }

    #[test]
    fn test_save_path_format() {
        let path = save_path("test.json").expect("save_path should succeed");
        assert!(path.to_string_lossy().ends_with(".goban/test.json"));
    }
}
