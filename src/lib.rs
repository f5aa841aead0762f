//! # tile-puzzles
//!
//! Puzzle-state engines for two tile puzzles, with no rendering attached.
//!
//! ## Puzzles
//!
//! 1. **Pipe connectivity**: rotate pipe segments until an unbroken run of
//!    open ends links a start point left of the grid to an end point right
//!    of it. Checked with a breadth-first search over the cells plus two
//!    virtual sentinel nodes.
//!
//! 2. **Sliding tiles**: slide numbered tiles into the single empty slot
//!    until they read `1..N²` in row-major order. Boards are scrambled by a
//!    random walk of legal slides, so every board can be solved.
//!
//! ## Architecture
//!
//! - **Host-driven**: a presentation layer builds a puzzle, forwards one
//!   action per input event, and polls `is_solved` to refresh its view.
//!   Engines are synchronous and single-owner.
//!
//! - **Injected randomness**: every random choice goes through a
//!   `RandomSource`, so seeded runs are reproducible.
//!
//! ## Modules
//!
//! - `core`: Coordinates, grid addressing, errors, RNG, configuration
//! - `pipes`: Pipe shapes, cells, board and reachability solver
//! - `sliding`: Sliding-tile board and tiles
//! - `puzzle`: `Puzzle` trait shared by both boards
//!
//! ```
//! use tile_puzzles::{GridPos, PipeCell, PipeGrid, PipeShape, Rotation};
//!
//! let cells = vec![PipeCell::new(PipeShape::Straight, Rotation::Deg90); 3];
//! let mut grid = PipeGrid::from_cells(cells, 3, 0, 0).unwrap();
//! assert!(grid.is_solved());
//!
//! grid.rotate_cell_clockwise(GridPos::new(0, 1)).unwrap();
//! assert!(!grid.is_solved());
//! ```

pub mod core;
pub mod pipes;
pub mod puzzle;
pub mod sliding;

// Re-export commonly used types
pub use crate::core::{
    Dimensions, Direction, GridPos,
    PuzzleError, Result,
    PuzzleRng, PuzzleRngState, RandomSource,
    PipeConfig, SlidingConfig,
};

pub use crate::pipes::{Connections, PipeCell, PipeGrid, PipeShape, Rotation};

pub use crate::sliding::{SlidingGrid, SlidingTile};

pub use crate::puzzle::{PipeMove, Puzzle};
