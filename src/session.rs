//! Interactive turn loop over any line-based reader and writer.

use crate::config::GameConfig;
use crate::engine::{Cell, Player};
use crate::game::{process_input, Game, GameEnd, GameInput, TurnState};
use crate::input::parse_input;
use crate::render::{cell_symbol, render_board};
use std::io::{self, BufRead, Write};

fn prompt(game: &Game) -> String {
    let player = game.current_player;
    format!(
        "{} ({}) to move [row col | pass | undo | resign | quit]: ",
        player.name(),
        cell_symbol(Cell::Stone(player))
    )
}

fn status_line(game: &Game) -> String {
    format!(
        "Move {} | captures: Black {}, White {}",
        game.move_number(),
        game.captures_by(Player::Black),
        game.captures_by(Player::White)
    )
}

/// Play one game, reading moves from `input` and writing boards and prompts
/// to `output`. End of input is treated as quitting.
pub fn run_session<R: BufRead, W: Write>(
    config: &GameConfig,
    mut input: R,
    mut output: W,
) -> io::Result<Game> {
    let mut game = Game::new(config.board_size);
    tracing::info!(size = config.board_size, "game started");

    write!(output, "{}", render_board(&game.board, config.render_style))?;
    writeln!(output, "{}", status_line(&game))?;

    loop {
        write!(output, "{}", prompt(&game))?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            process_input(&mut game, GameInput::Quit);
            break;
        }

        let parsed = match parse_input(&line, &game.board) {
            Ok(parsed) => parsed,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };

        let mover = game.current_player;
        let moves_before = game.move_number();
        match process_input(&mut game, parsed) {
            TurnState::MoveAppliedIllegal => {
                writeln!(output, "Illegal move: that stone would have no liberties.")?;
                continue;
            }
            TurnState::Passed => writeln!(output, "{} passes.", mover.name())?,
            TurnState::AwaitingInput if game.move_number() < moves_before => {
                writeln!(output, "Move taken back.")?
            }
            TurnState::AwaitingInput => {
                writeln!(output, "Nothing to undo.")?;
                continue;
            }
            TurnState::MoveAppliedValid => {}
            TurnState::Resigned | TurnState::Quit => break,
        }

        write!(output, "{}", render_board(&game.board, config.render_style))?;
        writeln!(output, "{}", status_line(&game))?;
    }

    match game.end {
        Some(GameEnd::Resigned { winner }) => {
            writeln!(output, "{} resigns. {} wins.", winner.enemy().name(), winner.name())?
        }
        _ => writeln!(output, "Game over.")?,
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Point;
    use crate::render::RenderStyle;

    fn plain() -> GameConfig {
        GameConfig {
            render_style: RenderStyle::Plain,
            save_record: false,
            ..Default::default()
        }
    }

    fn run(script: &str) -> (Game, String) {
        let mut out = Vec::new();
        let game = run_session(&plain(), script.as_bytes(), &mut out).expect("session runs");
        (game, String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn test_moves_then_quit() {
        let (game, out) = run("2 2\n1 1\nquit\n");
        assert_eq!(game.move_number(), 2);
        assert_eq!(game.end, Some(GameEnd::Quit));
        assert!(out.contains("Black (@) to move"));
        assert!(out.contains("White (O) to move"));
        assert!(out.ends_with("Game over.\n"));
    }

    #[test]
    fn test_bad_input_reprompts_same_player() {
        let (game, out) = run("nonsense\n9 9\n0 0\n0 0\nq\n");
        assert!(out.contains("expected a point"));
        assert!(out.contains("(9, 9) is not on the board"));
        assert!(out.contains("(0, 0) is already occupied"));
        assert_eq!(game.move_number(), 1);
        assert_eq!(game.current_player, Player::White);
    }

    #[test]
    fn test_illegal_move_message() {
        // Black (0,1), White (4,4), Black (1,0); White (0,0) is self-capture.
        let (game, out) = run("0 1\n4 4\n1 0\n0 0\nquit\n");
        assert!(out.contains("Illegal move"));
        assert!(game.board.is_empty_at(Point::new(0, 0)));
        assert_eq!(game.current_player, Player::White);
    }

    #[test]
    fn test_resign_announces_winner() {
        let (game, out) = run("pass\nresign\n");
        assert_eq!(game.end, Some(GameEnd::Resigned { winner: Player::Black }));
        assert!(out.contains("Black passes."));
        assert!(out.contains("White resigns. Black wins."));
    }

    #[test]
    fn test_undo_takes_back_last_move() {
        let (game, out) = run("undo\n2 2\nundo\nquit\n");
        assert!(out.contains("Nothing to undo."));
        assert!(out.contains("Move taken back."));
        assert_eq!(game.move_number(), 0);
        assert_eq!(game.current_player, Player::Black);
    }

    #[test]
    fn test_end_of_input_quits() {
        let (game, _) = run("2 2\n");
        assert_eq!(game.end, Some(GameEnd::Quit));
        assert_eq!(game.move_number(), 1);
    }
}
