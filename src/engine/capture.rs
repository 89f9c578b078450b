//! Removal of enemy groups left without liberties by a move.

use super::board::{Board, Cell, Player};
use super::group::{group_containing, Group};
use super::liberty::liberties_for_group;
use super::point::Point;

/// Enemy groups touching `just_played` that have no liberties.
///
/// All groups are evaluated against the same `board`, before anything is
/// removed. A group reachable from several neighbours is returned once.
pub fn captured_groups(board: &Board, just_played: Point, mover: Player) -> Vec<Group> {
    let enemy = mover.enemy();
    let mut captured: Vec<Group> = Vec::new();
    let mut seen: Vec<Group> = Vec::new();

    for neighbour in just_played.surrounding_points() {
        if board.value_at(neighbour) != Cell::Stone(enemy) {
            continue;
        }
        if seen.iter().any(|group| group.contains(&neighbour)) {
            continue;
        }
        let group = group_containing(board, neighbour, enemy);
        if liberties_for_group(board, &group).is_empty() {
            captured.push(group.clone());
        }
        seen.push(group);
    }
    captured
}

/// `board` with every captured enemy group next to `just_played` cleared.
pub fn remove_captured_stones(board: &Board, just_played: Point, mover: Player) -> Board {
    captured_groups(board, just_played, mover)
        .iter()
        .fold(board.clone(), |next, group| {
            tracing::debug!(
                mover = mover.name(),
                at = %just_played,
                stones = group.len(),
                "captured group"
            );
            clear_group(next, group)
        })
}

pub(crate) fn clear_group(board: Board, group: &Group) -> Board {
    group
        .iter()
        .fold(board, |next, &member| next.with_value_at(member, Cell::Empty))
}
