//! Text rendering of boards for the terminal.

use crate::constants::{BLACK_SYMBOL, EMPTY_SYMBOL, WHITE_SYMBOL};
use crate::engine::{Board, Cell, Player};
use crossterm::style::{style, Color, Stylize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    #[default]
    Plain,
    /// ANSI colours via crossterm.
    Color,
}

pub fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => EMPTY_SYMBOL,
        Cell::Stone(Player::Black) => BLACK_SYMBOL,
        Cell::Stone(Player::White) => WHITE_SYMBOL,
        Cell::OffBoard => ' ',
    }
}

fn styled_cell(cell: Cell, render_style: RenderStyle) -> String {
    let symbol = cell_symbol(cell);
    if render_style == RenderStyle::Plain {
        return symbol.to_string();
    }
    match cell {
        Cell::Empty | Cell::OffBoard => style(symbol).with(Color::DarkGrey).to_string(),
        Cell::Stone(Player::Black) => style(symbol).with(Color::Yellow).bold().to_string(),
        Cell::Stone(Player::White) => style(symbol).with(Color::White).bold().to_string(),
    }
}

/// The board as a grid with column numbers on top and row numbers on the
/// left, one line per row. Each line ends with a newline.
pub fn render_board(board: &Board, render_style: RenderStyle) -> String {
    let width = board.size().saturating_sub(1).to_string().len();
    let mut out = String::new();

    out.push_str(&" ".repeat(width));
    for col in 0..board.size() {
        out.push_str(&format!(" {col:>width$}"));
    }
    out.push('\n');

    for (row, cells) in board.rows().enumerate() {
        out.push_str(&format!("{row:>width$}"));
        for &cell in cells {
            out.push_str(&" ".repeat(width));
            out.push_str(&styled_cell(cell, render_style));
        }
        out.push('\n');
    }
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_board(self, RenderStyle::Plain))
    }
}
