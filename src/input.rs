//! Parsing of lines typed at the move prompt.

use crate::engine::{Board, Point};
use crate::error::InputError;
use crate::game::GameInput;

/// Turn a raw line into a game input.
///
/// Control words are matched case-insensitively. A point is only accepted if
/// it is on `board` and empty, so the engine never sees an invalid placement.
pub fn parse_input(line: &str, board: &Board) -> Result<GameInput, InputError> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "quit" | "q" | "exit" => return Ok(GameInput::Quit),
        "pass" | "p" => return Ok(GameInput::Pass),
        "resign" => return Ok(GameInput::Resign),
        "undo" | "u" => return Ok(GameInput::Undo),
        _ => {}
    }

    let point = Point::parse(trimmed).ok_or_else(|| InputError::Malformed(trimmed.to_string()))?;
    if !board.contains(point) {
        return Err(InputError::OffBoard(point));
    }
    if !board.is_empty_at(point) {
        return Err(InputError::Occupied(point));
    }
    Ok(GameInput::Place(point))
}
