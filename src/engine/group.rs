//! Connected group discovery.

use super::board::{Board, Cell, Player};
use super::point::Point;
use std::collections::HashSet;

/// A maximal set of orthogonally connected stones of one player.
pub type Group = HashSet<Point>;

/// The group of `player`'s stones connected to `seed`.
///
/// `seed` is expected to hold one of `player`'s stones. The seed is always
/// part of the result; expansion only follows on-board neighbours holding
/// `player`'s stones, so the result is the same for every member used as seed.
pub fn group_containing(board: &Board, seed: Point, player: Player) -> Group {
    let friend = Cell::Stone(player);
    let mut visited = HashSet::from([seed]);
    let mut stack = vec![seed];

    while let Some(point) = stack.pop() {
        for neighbour in point.surrounding_points() {
            if board.value_at(neighbour) == friend && visited.insert(neighbour) {
                stack.push(neighbour);
            }
        }
    }
    visited
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: Board, points: &[(i32, i32)], player: Player) -> Board {
        points.iter().fold(board, |b, &(r, c)| {
            b.with_value_at(Point::new(r, c), Cell::Stone(player))
        })
    }

    #[test]
    fn test_single_stone_group() {
        let board = place(Board::new(5), &[(2, 2)], Player::Black);
        let group = group_containing(&board, Point::new(2, 2), Player::Black);
        assert_eq!(group, HashSet::from([Point::new(2, 2)]));
    }

    #[test]
    fn test_line_group() {
        let board = place(Board::new(5), &[(1, 1), (1, 2), (1, 3)], Player::White);
        let group = group_containing(&board, Point::new(1, 1), Player::White);
        assert_eq!(group.len(), 3);
        assert!(group.contains(&Point::new(1, 3)));
    }

    #[test]
    fn test_diagonal_is_not_connected() {
        let board = place(Board::new(5), &[(1, 1), (2, 2)], Player::Black);
        let group = group_containing(&board, Point::new(1, 1), Player::Black);
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_enemy_stones_stop_expansion() {
        let board = place(Board::new(5), &[(0, 0), (0, 2)], Player::Black);
        let board = place(board, &[(0, 1)], Player::White);
        let group = group_containing(&board, Point::new(0, 0), Player::Black);
        assert_eq!(group, HashSet::from([Point::new(0, 0)]));
    }

    #[test]
    fn test_same_group_from_every_member() {
        // An L with a loop closing back on itself.
        let stones = [(0, 0), (0, 1), (1, 1), (2, 1), (2, 2), (1, 2)];
        let board = place(Board::new(5), &stones, Player::Black);
        let expected = group_containing(&board, Point::new(0, 0), Player::Black);
        assert_eq!(expected.len(), stones.len());
        for &(r, c) in &stones {
            assert_eq!(
                group_containing(&board, Point::new(r, c), Player::Black),
                expected
            );
        }
    }

    #[test]
    fn test_group_spans_whole_board() {
        let board = Board::new(3);
        let all: Vec<_> = board.points().map(|p| (p.row, p.col)).collect();
        let board = place(board, &all, Player::White);
        let group = group_containing(&board, Point::new(1, 1), Player::White);
        assert_eq!(group.len(), 9);
    }

    #[test]
    fn test_unowned_seed_still_terminates() {
        let board = place(Board::new(5), &[(0, 1)], Player::Black);
        let group = group_containing(&board, Point::new(0, 0), Player::Black);
        assert_eq!(group, HashSet::from([Point::new(0, 0), Point::new(0, 1)]));
    }
}
