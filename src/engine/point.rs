//! Board coordinates and orthogonal adjacency.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An intersection as (row, col).
///
/// Coordinates are signed so that shifting past the top or left edge is still
/// a representable point. Whether a point lies on a board is a question for
/// [`Board::contains`](super::Board::contains).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn up(self) -> Self {
        Self::new(self.row - 1, self.col)
    }

    pub fn down(self) -> Self {
        Self::new(self.row + 1, self.col)
    }

    pub fn left(self) -> Self {
        Self::new(self.row, self.col - 1)
    }

    pub fn right(self) -> Self {
        Self::new(self.row, self.col + 1)
    }

    /// The four orthogonal neighbours in the order left, up, right, down.
    /// Some may be off the board.
    pub fn surrounding_points(self) -> [Point; 4] {
        [self.left(), self.up(), self.right(), self.down()]
    }

    /// Parse a point written as two integers.
    ///
    /// Accepts `2 3`, `2,3`, `2, 3`, `(2, 3)` and `[2 3]`. Anything without
    /// exactly two integer components is rejected.
    pub fn parse(text: &str) -> Option<Point> {
        let trimmed = text.trim();
        let inner = strip_brackets(trimmed, '(', ')')
            .or_else(|| strip_brackets(trimmed, '[', ']'))
            .unwrap_or(trimmed);

        let mut parts = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        let row = parts.next()?.parse().ok()?;
        let col = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Point::new(row, col))
    }
}

fn strip_brackets(text: &str, open: char, close: char) -> Option<&str> {
    text.strip_prefix(open)?.strip_suffix(close)
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Point::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shifts() {
        let p = Point::new(2, 3);
        assert_eq!(p.up(), Point::new(1, 3));
        assert_eq!(p.down(), Point::new(3, 3));
        assert_eq!(p.left(), Point::new(2, 2));
        assert_eq!(p.right(), Point::new(2, 4));
    }

    #[test]
    fn test_shift_past_origin_is_representable() {
        let origin = Point::new(0, 0);
        assert_eq!(origin.up(), Point::new(-1, 0));
        assert_eq!(origin.left(), Point::new(0, -1));
    }

    #[test]
    fn test_surrounding_order() {
        let p = Point::new(1, 1);
        assert_eq!(
            p.surrounding_points(),
            [
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 2),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_parse_accepted_forms() {
        for text in ["2 3", "2,3", " 2 , 3 ", "(2, 3)", "[2 3]", "(2,3)"] {
            assert_eq!(Point::parse(text), Some(Point::new(2, 3)), "{text:?}");
        }
        assert_eq!(Point::parse("-1 4"), Some(Point::new(-1, 4)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in ["", "2", "2 3 4", "a b", "2.5 3", "(2 3", "2;3", "pass"] {
            assert_eq!(Point::parse(text), None, "{text:?}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(4, 0).to_string(), "(4, 0)");
    }
}
