//! Grid coordinates, directions and row-major addressing.
//!
//! Both puzzles store their cells in a flat `Vec` indexed by row-major
//! rank. `Dimensions` owns the arithmetic between a `GridPos` and that
//! index so neither engine repeats it.
//!
//! ```
//! use tile_puzzles::core::{Dimensions, Direction, GridPos};
//!
//! let dims = Dimensions::new(2, 3);
//! assert_eq!(dims.index_of(GridPos::new(1, 2)), Some(5));
//! assert_eq!(dims.step(GridPos::new(0, 0), Direction::Top), None);
//! assert_eq!(dims.step(GridPos::new(0, 0), Direction::Right), Some(GridPos::new(0, 1)));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{PuzzleError, Result};

/// Zero-based grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// |Δrow| + |Δcol|.
    #[must_use]
    pub const fn manhattan_distance(self, other: GridPos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for GridPos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four sides of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// Order in which neighbors are examined during a search.
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::Top,
        Direction::Bottom,
        Direction::Left,
        Direction::Right,
    ];

    /// Sides listed clockwise starting at the top.
    pub const CLOCKWISE: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// The side facing this one across a shared edge.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    /// The next side after a quarter turn clockwise.
    #[must_use]
    pub const fn clockwise(self) -> Self {
        match self {
            Direction::Top => Direction::Right,
            Direction::Right => Direction::Bottom,
            Direction::Bottom => Direction::Left,
            Direction::Left => Direction::Top,
        }
    }

    #[must_use]
    pub const fn counter_clockwise(self) -> Self {
        match self {
            Direction::Top => Direction::Left,
            Direction::Right => Direction::Top,
            Direction::Bottom => Direction::Right,
            Direction::Left => Direction::Bottom,
        }
    }
}

/// Row and column counts of a rectangular grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    #[must_use]
    pub const fn len(self) -> usize {
        self.rows * self.cols
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub const fn contains(self, pos: GridPos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Row-major index of `pos`, or `None` if it lies outside the grid.
    #[must_use]
    pub const fn index_of(self, pos: GridPos) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    /// Inverse of [`index_of`](Self::index_of). Callers pass `index < len()`.
    #[must_use]
    pub const fn pos_of(self, index: usize) -> GridPos {
        GridPos::new(index / self.cols, index % self.cols)
    }

    /// Like [`index_of`](Self::index_of) but reports an `OutOfBounds` error.
    pub fn check(self, pos: GridPos) -> Result<usize> {
        self.index_of(pos).ok_or(PuzzleError::OutOfBounds {
            row: pos.row,
            col: pos.col,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// The adjacent position in `direction`, or `None` past the edge.
    #[must_use]
    pub fn step(self, pos: GridPos, direction: Direction) -> Option<GridPos> {
        let next = match direction {
            Direction::Top => GridPos::new(pos.row.checked_sub(1)?, pos.col),
            Direction::Bottom => GridPos::new(pos.row + 1, pos.col),
            Direction::Left => GridPos::new(pos.row, pos.col.checked_sub(1)?),
            Direction::Right => GridPos::new(pos.row, pos.col + 1),
        };
        self.contains(next).then_some(next)
    }

    /// In-grid neighbors of `pos`, in [`Direction::SEARCH_ORDER`].
    ///
    /// Corners have two, edges three, interior cells four.
    #[must_use]
    pub fn neighbors(self, pos: GridPos) -> SmallVec<[GridPos; 4]> {
        Direction::SEARCH_ORDER
            .iter()
            .filter_map(|&direction| self.step(pos, direction))
            .collect()
    }

    /// Every position in row-major order.
    pub fn positions(self) -> impl Iterator<Item = GridPos> {
        (0..self.len()).map(move |index| self.pos_of(index))
    }
}
