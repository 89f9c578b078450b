//! Placement followed by capture, as a single board transition.

use super::board::{Board, Cell, Player};
use super::capture::{captured_groups, clear_group};
use super::liberty::liberties_at;
use super::point::Point;
use crate::error::MoveError;

/// Result of a placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    /// Enemy stones removed by the move.
    pub captured: usize,
}

/// Place `player`'s stone at `point` and remove any enemy groups it captures.
///
/// `point` must be on the board and empty. Self-capture is not checked here;
/// see [`has_liberty_after`] and [`try_play`].
pub fn apply_move(board: &Board, point: Point, player: Player) -> Board {
    play_move(board, point, player).board
}

/// Like [`apply_move`], also reporting how many stones were captured.
pub fn play_move(board: &Board, point: Point, player: Player) -> MoveOutcome {
    let placed = board.with_value_at(point, Cell::Stone(player));
    let groups = captured_groups(&placed, point, player);
    let captured = groups.iter().map(|group| group.len()).sum();

    let board = groups.iter().fold(placed, |next, group| clear_group(next, group));
    if captured > 0 {
        tracing::debug!(player = player.name(), at = %point, captured, "stones captured");
    }
    MoveOutcome { board, captured }
}

/// Legality check on a board produced by a move at `point`: the played stone
/// must keep at least one liberty once captures are resolved.
pub fn has_liberty_after(board: &Board, point: Point) -> bool {
    !liberties_at(board, point).is_empty()
}

/// Validated placement: rejects off-board and occupied points, and moves that
/// leave the played stone without a liberty. `board` is never modified.
pub fn try_play(board: &Board, point: Point, player: Player) -> Result<MoveOutcome, MoveError> {
    if !board.contains(point) {
        return Err(MoveError::OffBoard(point));
    }
    if !board.is_empty_at(point) {
        return Err(MoveError::Occupied(point));
    }

    let outcome = play_move(board, point, player);
    if !has_liberty_after(&outcome.board, point) {
        return Err(MoveError::NoLiberties(point));
    }
    Ok(outcome)
}
