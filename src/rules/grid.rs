//! Dense 2-D boards and direction tables.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A step on the board as (row delta, column delta).
pub type Direction = (isize, isize);

/// All eight neighbours.
pub const KING_DIRECTIONS: [Direction; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Six-neighbour adjacency of a rhombic hex board stored row-major.
pub const HEX_DIRECTIONS: [Direction; 6] = [(-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0)];

/// Up, down, left, right.
pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The four diagonals.
pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A board cell holding at most one player's marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Stone(PlayerId),
}

impl Cell {
    /// The marker of `player`.
    #[must_use]
    pub const fn of(player: PlayerId) -> Self {
        Cell::Stone(player)
    }

    /// The owner of the marker, if any.
    #[must_use]
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Stone(p) => Some(p),
            Cell::Empty => None,
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// `X` for player 0, `O` for player 1, space for empty.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Stone(PlayerId(0)) => 'X',
            Cell::Stone(_) => 'O',
        }
    }
}

/// Row-major grid of cells.
///
/// ```
/// use duel_arena::rules::grid::{Cell, Grid};
/// use duel_arena::core::PlayerId;
///
/// let mut grid = Grid::new(2, 3, Cell::Empty);
/// grid.set(1, 2, Cell::of(PlayerId::new(0)));
///
/// assert_eq!(grid.get(1, 2).owner(), Some(PlayerId::new(0)));
/// assert_eq!(grid.offset(1, 2, 0, 1), None);
/// assert_eq!(grid.count(Cell::Empty), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Copy + PartialEq> Grid<T> {
    /// Create a grid filled with `fill`.
    #[must_use]
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Create a square grid filled with `fill`.
    #[must_use]
    pub fn square(size: usize, fill: T) -> Self {
        Self::new(size, size, fill)
    }

    /// Build a grid from explicit rows.
    ///
    /// Panics if the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        assert!(rows.iter().all(|row| row.len() == cols), "Grid rows must have equal length");
        Self {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if (row, col) is on the board.
    #[must_use]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get a cell. Panics when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(self.in_bounds(row, col), "Cell ({row},{col}) out of bounds");
        self.cells[row * self.cols + col]
    }

    /// Set a cell. Panics when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(self.in_bounds(row, col), "Cell ({row},{col}) out of bounds");
        self.cells[row * self.cols + col] = value;
    }

    /// Step `(dr, dc)` from (row, col), or `None` if that leaves the board.
    #[must_use]
    pub fn offset(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        self.in_bounds(r, c).then_some((r, c))
    }

    /// Iterate over ((row, col), value) in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), T)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &value)| ((i / cols, i % cols), value))
    }

    /// One row as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Number of cells equal to `value`.
    #[must_use]
    pub fn count(&self, value: T) -> usize {
        self.cells.iter().filter(|&&v| v == value).count()
    }

    /// Check if any cell equals `value`.
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        self.cells.contains(&value)
    }

    /// Render rows joined by `sep`, each cell through `symbol`.
    pub fn render_with(&self, sep: &str, symbol: impl Fn(T) -> String) -> String {
        (0..self.rows)
            .map(|r| self.row(r).iter().map(|&v| symbol(v)).collect::<Vec<_>>().join(sep))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Grid<Cell> {
    /// Number of markers owned by `player`.
    #[must_use]
    pub fn stones(&self, player: PlayerId) -> usize {
        self.count(Cell::of(player))
    }

    /// Check if every cell holds a marker.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.contains(Cell::Empty)
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells().filter(|(_, cell)| cell.is_empty()).map(|(pos, _)| pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_bounds() {
        let grid = Grid::square(3, 0u8);

        assert_eq!(grid.offset(0, 0, -1, 0), None);
        assert_eq!(grid.offset(0, 0, 1, 1), Some((1, 1)));
        assert_eq!(grid.offset(2, 2, 0, 1), None);
        assert_eq!(grid.offset(2, 2, -2, -2), Some((0, 0)));
    }

    #[test]
    fn test_from_rows_and_row() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);

        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.row(1), &[4, 5, 6]);
        assert_eq!(grid.get(0, 2), 3);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_from_rows_ragged() {
        let _ = Grid::from_rows(vec![vec![1, 2], vec![3]]);
    }

    #[test]
    fn test_stones_and_full() {
        let p0 = PlayerId::new(0);
        let mut grid = Grid::square(2, Cell::Empty);
        for (r, c) in [(0, 0), (0, 1), (1, 0)] {
            grid.set(r, c, Cell::of(p0));
        }

        assert_eq!(grid.stones(p0), 3);
        assert!(!grid.is_full());
        assert_eq!(grid.empty_cells().collect::<Vec<_>>(), vec![(1, 1)]);

        grid.set(1, 1, Cell::of(p0.opponent()));
        assert!(grid.is_full());
    }

    #[test]
    fn test_render_with() {
        let grid = Grid::from_rows(vec![
            vec![Cell::of(PlayerId::new(0)), Cell::Empty],
            vec![Cell::Empty, Cell::of(PlayerId::new(1))],
        ]);

        assert_eq!(grid.render_with("|", |c| c.symbol().to_string()), "X| \n |O");
    }
}
