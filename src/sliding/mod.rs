//! Sliding-tile puzzle.
//!
//! Numbered tiles on an `N`x`N` board with one empty slot. A tile next to
//! the empty slot can slide into it; the puzzle is solved when the tiles
//! read `1..N²` row-major with the empty slot last.

mod board;
mod tile;

pub use board::SlidingGrid;
pub use tile::SlidingTile;
