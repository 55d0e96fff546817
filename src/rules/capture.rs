//! Directional bounded capture.
//!
//! Placing a marker captures, in each direction independently, the maximal
//! run of opponent markers that is immediately closed by one of the mover's
//! own markers. Every direction is evaluated against the board as it was
//! before the placement.

use smallvec::SmallVec;

use crate::core::PlayerId;

use super::grid::{Cell, Direction, Grid};

/// Cells captured by one placement.
pub type Run = SmallVec<[(usize, usize); 8]>;

/// The bounded opponent run starting next to (row, col) along `dir`.
///
/// Returns `None` when the run is empty, hits the edge, or ends on an
/// empty cell.
#[must_use]
pub fn bounded_run(grid: &Grid<Cell>, row: usize, col: usize, dir: Direction, mover: PlayerId) -> Option<Run> {
    let opponent = Cell::of(mover.opponent());
    let mut run = Run::new();
    let (mut r, mut c) = (row, col);

    loop {
        let (nr, nc) = grid.offset(r, c, dir.0, dir.1)?;
        let cell = grid.get(nr, nc);
        if cell == opponent {
            run.push((nr, nc));
            (r, c) = (nr, nc);
        } else if cell == Cell::of(mover) && !run.is_empty() {
            return Some(run);
        } else {
            return None;
        }
    }
}

/// Check if placing at (row, col) captures in at least one direction.
#[must_use]
pub fn captures_any(grid: &Grid<Cell>, row: usize, col: usize, mover: PlayerId, directions: &[Direction]) -> bool {
    grid.get(row, col).is_empty()
        && directions
            .iter()
            .any(|&dir| bounded_run(grid, row, col, dir, mover).is_some())
}

/// Every cell captured by placing at (row, col), across all directions.
#[must_use]
pub fn captures(grid: &Grid<Cell>, row: usize, col: usize, mover: PlayerId, directions: &[Direction]) -> Vec<(usize, usize)> {
    directions
        .iter()
        .filter_map(|&dir| bounded_run(grid, row, col, dir, mover))
        .flatten()
        .collect()
}

/// Place the mover's marker and flip every captured cell.
///
/// Returns the new board; `grid` is left untouched.
#[must_use]
pub fn place_and_capture(grid: &Grid<Cell>, row: usize, col: usize, mover: PlayerId, directions: &[Direction]) -> Grid<Cell> {
    let flipped = captures(grid, row, col, mover, directions);
    let mut next = grid.clone();
    next.set(row, col, Cell::of(mover));
    for (r, c) in flipped {
        next.set(r, c, Cell::of(mover));
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::grid::KING_DIRECTIONS;

    const X: Cell = Cell::of(PlayerId::FIRST);
    const O: Cell = Cell::of(PlayerId::SECOND);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_bounded_run_requires_closing_marker() {
        let grid = Grid::from_rows(vec![vec![E, O, O, X], vec![E, O, O, E]]);
        let p0 = PlayerId::FIRST;

        let run = bounded_run(&grid, 0, 0, (0, 1), p0).unwrap();
        assert_eq!(run.as_slice(), &[(0, 1), (0, 2)]);

        assert!(bounded_run(&grid, 1, 0, (0, 1), p0).is_none());
    }

    #[test]
    fn test_adjacent_own_marker_is_not_a_run() {
        let grid = Grid::from_rows(vec![vec![E, X, O, X]]);

        assert!(bounded_run(&grid, 0, 0, (0, 1), PlayerId::FIRST).is_none());
    }

    #[test]
    fn test_run_to_edge_is_not_bounded() {
        let grid = Grid::from_rows(vec![vec![E, O, O]]);

        assert!(bounded_run(&grid, 0, 0, (0, 1), PlayerId::FIRST).is_none());
    }

    #[test]
    fn test_multiple_directions_apply_together() {
        // Placing X at (0,0) flips (0,1) horizontally and (1,1) diagonally.
        let grid = Grid::from_rows(vec![
            vec![E, O, X],
            vec![E, O, E],
            vec![E, E, X],
        ]);

        let next = place_and_capture(&grid, 0, 0, PlayerId::FIRST, &KING_DIRECTIONS);

        assert_eq!(next.get(0, 0), X);
        assert_eq!(next.get(0, 1), X);
        assert_eq!(next.get(1, 1), X);
        assert_eq!(next.get(1, 0), E);
        // Input board untouched.
        assert_eq!(grid.get(0, 1), O);
    }

    #[test]
    fn test_captures_any_needs_empty_cell() {
        let grid = Grid::from_rows(vec![vec![X, O, X]]);

        assert!(!captures_any(&grid, 0, 0, PlayerId::FIRST, &KING_DIRECTIONS));
    }

    #[test]
    fn test_flip_does_not_cascade() {
        // X at (0,0) flips (0,1); the new X at (0,1) must not then flip (1,1).
        let grid = Grid::from_rows(vec![
            vec![E, O, X],
            vec![E, O, E],
            vec![E, X, E],
        ]);

        let next = place_and_capture(&grid, 0, 0, PlayerId::FIRST, &KING_DIRECTIONS);

        assert_eq!(next.get(0, 1), X);
        assert_eq!(next.get(1, 1), O);
    }
}
