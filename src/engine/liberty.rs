//! Liberty counting for single points and groups.

use super::board::Board;
use super::group::Group;
use super::point::Point;
use std::collections::HashSet;

/// Empty neighbours of `point`, in left/up/right/down order.
/// Off-board neighbours never count.
pub fn liberties_at(board: &Board, point: Point) -> Vec<Point> {
    point
        .surrounding_points()
        .into_iter()
        .filter(|&neighbour| board.is_empty_at(neighbour))
        .collect()
}

/// Liberties of every member of `group`, concatenated.
///
/// A liberty shared by several members appears once per member. Use
/// [`count_liberties`] for the number of distinct liberties.
pub fn liberties_for_group(board: &Board, group: &Group) -> Vec<Point> {
    group
        .iter()
        .flat_map(|&member| liberties_at(board, member))
        .collect()
}

/// Number of distinct empty points adjacent to `group`.
pub fn count_liberties(board: &Board, group: &Group) -> usize {
    liberties_for_group(board, group)
        .into_iter()
        .collect::<HashSet<_>>()
        .len()
}
