//! Turn controller data structures.

use crate::engine::{Board, Player, Point};
use crate::record::GameRecord;
use serde::{Deserialize, Serialize};

/// An input from the player to move (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Place(Point),
    Pass,
    Undo,
    Resign,
    Quit,
}

/// State reached after handling one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingInput,
    MoveAppliedValid,
    /// The move left the played stone without liberties. Board and player
    /// to move are unchanged.
    MoveAppliedIllegal,
    Passed,
    Resigned,
    Quit,
}

impl TurnState {
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnState::Resigned | TurnState::Quit)
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEnd {
    Resigned { winner: Player },
    Quit,
}

impl GameEnd {
    pub fn turn_state(self) -> TurnState {
        match self {
            GameEnd::Resigned { .. } => TurnState::Resigned,
            GameEnd::Quit => TurnState::Quit,
        }
    }
}

/// Position before an accepted move or pass, kept for undo.
#[derive(Debug, Clone)]
pub(crate) struct Snapshot {
    pub board: Board,
    pub current_player: Player,
    pub captured_by_black: u32,
    pub captured_by_white: u32,
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    /// Current position
    pub board: Board,
    /// Player to move
    pub current_player: Player,
    /// White stones removed by Black
    pub captured_by_black: u32,
    /// Black stones removed by White
    pub captured_by_white: u32,
    /// Set once the game has been resigned or quit
    pub end: Option<GameEnd>,
    /// Moves and passes accepted so far
    pub record: GameRecord,
    pub(crate) history: Vec<Snapshot>,
}

impl Game {
    pub fn new(board_size: usize) -> Self {
        Self {
            board: Board::new(board_size),
            current_player: Player::Black,
            captured_by_black: 0,
            captured_by_white: 0,
            end: None,
            record: GameRecord::new(board_size),
            history: Vec::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.end.is_some()
    }

    /// Number of accepted moves and passes.
    pub fn move_number(&self) -> usize {
        self.history.len()
    }

    pub fn captures_by(&self, player: Player) -> u32 {
        match player {
            Player::Black => self.captured_by_black,
            Player::White => self.captured_by_white,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            captured_by_black: self.captured_by_black,
            captured_by_white: self.captured_by_white,
        }
    }

    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        self.board = snapshot.board;
        self.current_player = snapshot.current_player;
        self.captured_by_black = snapshot.captured_by_black;
        self.captured_by_white = snapshot.captured_by_white;
    }

    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.enemy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new(5);
        assert_eq!(game.board, Board::new(5));
        assert_eq!(game.current_player, Player::Black);
        assert_eq!(game.move_number(), 0);
        assert!(!game.is_over());
        assert!(!game.can_undo());
        assert_eq!(game.record.board_size, 5);
    }

    #[test]
    fn test_switch_player() {
        let mut game = Game::new(5);
        game.switch_player();
        assert_eq!(game.current_player, Player::White);
        game.switch_player();
        assert_eq!(game.current_player, Player::Black);
    }

    #[test]
    fn test_terminal_states() {
        assert!(TurnState::Resigned.is_terminal());
        assert!(TurnState::Quit.is_terminal());
        assert!(!TurnState::Passed.is_terminal());
        assert!(!TurnState::MoveAppliedIllegal.is_terminal());
    }
}
