//! Pipe-connectivity puzzle.
//!
//! The player rotates pipe segments until an unbroken run of open ends
//! links a start point left of the grid to an end point right of it.
//!
//! - `shape`: pipe shapes, rotations and the open sides they produce
//! - `cell`: a single rotatable segment
//! - `grid`: the board and its actions
//! - `solver`: breadth-first reachability between the two sentinels

mod cell;
mod grid;
mod shape;
pub mod solver;

pub use cell::PipeCell;
pub use grid::PipeGrid;
pub use shape::{Connections, PipeShape, Rotation};
