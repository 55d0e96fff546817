//! Connection detection by breadth-first search.
//!
//! A player is connected when their markers form a path, under a fixed
//! adjacency, from a cell satisfying `start` to a cell satisfying `goal`.

use std::collections::VecDeque;

use crate::core::PlayerId;

use super::grid::{Cell, Direction, Grid};

/// Check whether `player` connects a `start` cell to a `goal` cell.
///
/// The frontier is seeded with every `player` marker on a start cell and
/// grows through same-coloured neighbours along `directions`.
///
/// ```
/// use duel_arena::core::PlayerId;
/// use duel_arena::rules::connectivity::connects;
/// use duel_arena::rules::grid::{Cell, Grid, HEX_DIRECTIONS};
///
/// let x = Cell::of(PlayerId::new(0));
/// let grid = Grid::from_rows(vec![
///     vec![x, Cell::Empty],
///     vec![Cell::Empty, x],
/// ]);
///
/// // (0,0) and (1,1) are not hex neighbours.
/// assert!(!connects(&grid, PlayerId::new(0), &HEX_DIRECTIONS, |_, c| c == 0, |_, c| c == 1));
/// ```
pub fn connects<S, G>(grid: &Grid<Cell>, player: PlayerId, directions: &[Direction], start: S, goal: G) -> bool
where
    S: Fn(usize, usize) -> bool,
    G: Fn(usize, usize) -> bool,
{
    let piece = Cell::of(player);
    let mut visited = vec![false; grid.rows() * grid.cols()];
    let mut frontier = VecDeque::new();

    for ((r, c), cell) in grid.cells() {
        if cell == piece && start(r, c) {
            visited[r * grid.cols() + c] = true;
            frontier.push_back((r, c));
        }
    }

    while let Some((r, c)) = frontier.pop_front() {
        if goal(r, c) {
            return true;
        }
        for &(dr, dc) in directions {
            let Some((nr, nc)) = grid.offset(r, c, dr, dc) else {
                continue;
            };
            let idx = nr * grid.cols() + nc;
            if !visited[idx] && grid.get(nr, nc) == piece {
                visited[idx] = true;
                frontier.push_back((nr, nc));
            }
        }
    }

    false
}
