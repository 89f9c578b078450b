//! Immutable square board with row-level copy-on-write.

use super::point::Point;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One of the two sides. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn enemy(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }
}

/// Contents of an intersection.
///
/// `OffBoard` is only ever produced by reads outside the grid. It is neither
/// empty nor a stone of either player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Stone(Player),
    OffBoard,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// An N x N grid of cells.
///
/// Boards are values: [`Board::with_value_at`] returns a new board and leaves
/// the receiver untouched. Rows are shared between boards until written, so a
/// move copies one row rather than the whole grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    rows: Vec<Arc<[Cell]>>,
}

impl Board {
    /// An empty board of `size` x `size`.
    pub fn new(size: usize) -> Self {
        let empty_row: Arc<[Cell]> = vec![Cell::Empty; size].into();
        Self {
            size,
            rows: vec![empty_row; size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// True iff both coordinates are within `[0, size)`.
    pub fn contains(&self, point: Point) -> bool {
        let size = self.size as i64;
        (0..size).contains(&(point.row as i64)) && (0..size).contains(&(point.col as i64))
    }

    /// Cell at `point`, or [`Cell::OffBoard`] outside the grid.
    pub fn value_at(&self, point: Point) -> Cell {
        if !self.contains(point) {
            return Cell::OffBoard;
        }
        self.rows[point.row as usize][point.col as usize]
    }

    pub fn is_empty_at(&self, point: Point) -> bool {
        self.value_at(point).is_empty()
    }

    /// A new board identical to this one except at `point`.
    ///
    /// # Panics
    ///
    /// Panics if `point` is off the board. Callers validate placement first.
    pub fn with_value_at(&self, point: Point, value: Cell) -> Board {
        assert!(
            self.contains(point),
            "point {point} is off the {size}x{size} board",
            size = self.size
        );
        let (row, col) = (point.row as usize, point.col as usize);

        let mut new_row = self.rows[row].to_vec();
        new_row[col] = value;

        let mut rows = self.rows.clone();
        rows[row] = new_row.into();
        Board {
            size: self.size,
            rows,
        }
    }

    /// All on-board points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let size = self.size as i32;
        (0..size).flat_map(move |row| (0..size).map(move |col| Point::new(row, col)))
    }

    pub fn stone_count(&self, player: Player) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == Cell::Stone(player))
            .count()
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|row| &row[..])
    }
}
