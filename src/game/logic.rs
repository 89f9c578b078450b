//! Turn sequencing: placement with legality check, pass, undo, resign, quit.

use super::types::{Game, GameEnd, GameInput, TurnState};
use crate::engine::{try_play, Player, Point};
use crate::error::MoveError;
use crate::record::Action;

/// Handle one input for the player to move.
///
/// Illegal placements leave the game untouched and the same player to move.
/// Once the game has ended every input is ignored.
pub fn process_input(game: &mut Game, input: GameInput) -> TurnState {
    if let Some(end) = game.end {
        return end.turn_state();
    }

    match input {
        GameInput::Place(point) => match place_stone(game, point) {
            Ok(_) => TurnState::MoveAppliedValid,
            Err(err) => {
                tracing::debug!(player = game.current_player.name(), %err, "move rejected");
                TurnState::MoveAppliedIllegal
            }
        },
        GameInput::Pass => {
            pass(game);
            TurnState::Passed
        }
        GameInput::Undo => {
            undo(game);
            TurnState::AwaitingInput
        }
        GameInput::Resign => {
            resign(game);
            TurnState::Resigned
        }
        GameInput::Quit => {
            game.end = Some(GameEnd::Quit);
            game.record.end = game.end;
            tracing::info!(moves = game.move_number(), "game quit");
            TurnState::Quit
        }
    }
}

/// Place a stone for the player to move.
///
/// On success the new board replaces the old one, prisoners are credited and
/// the turn passes. Returns the number of stones captured.
pub fn place_stone(game: &mut Game, point: Point) -> Result<usize, MoveError> {
    let player = game.current_player;
    let outcome = try_play(&game.board, point, player)?;

    game.history.push(game.snapshot());
    game.board = outcome.board;
    let captured = outcome.captured as u32;
    match player {
        Player::Black => game.captured_by_black += captured,
        Player::White => game.captured_by_white += captured,
    }
    game.record.push(player, Action::Place(point));
    game.switch_player();
    Ok(outcome.captured)
}

/// Pass the turn without changing the board.
pub fn pass(game: &mut Game) {
    game.history.push(game.snapshot());
    game.record.push(game.current_player, Action::Pass);
    game.switch_player();
}

/// Take back the last accepted move or pass. Returns false if there was none.
pub fn undo(game: &mut Game) -> bool {
    let Some(snapshot) = game.history.pop() else {
        return false;
    };
    game.restore(snapshot);
    game.record.pop();
    true
}

/// The player to move resigns; the other player wins.
pub fn resign(game: &mut Game) {
    let winner = game.current_player.enemy();
    game.end = Some(GameEnd::Resigned { winner });
    game.record.end = game.end;
    tracing::info!(winner = winner.name(), moves = game.move_number(), "game resigned");
}
