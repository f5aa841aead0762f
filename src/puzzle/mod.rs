//! Contract between a puzzle engine and the presentation layer.
//!
//! The presentation layer builds a puzzle, forwards each discrete player
//! action through `Puzzle::apply`, and asks `is_solved` afterwards to
//! update its view. Both puzzles implement the same trait so a host can
//! drive either one the same way.

pub mod engine;

pub use engine::{PipeMove, Puzzle};
