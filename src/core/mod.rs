//! Building blocks shared by both puzzles: coordinates and grid addressing,
//! errors, injectable randomness and configuration.

pub mod config;
pub mod error;
pub mod grid;
pub mod rng;

pub use config::{PipeConfig, SlidingConfig};
pub use error::{PuzzleError, Result};
pub use grid::{Dimensions, Direction, GridPos};
pub use rng::{PuzzleRng, PuzzleRngState, RandomSource};
