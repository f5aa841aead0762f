//! Error types shared by both puzzles.
//!
//! Only two things can go wrong: a grid that cannot be built, and an
//! action addressed outside the grid. A legal-looking move that the rules
//! reject (sliding a tile that does not touch the empty slot) is reported
//! as `Ok(false)`, not as an error.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// The construction input does not describe a complete, valid grid.
    #[error("malformed grid: {reason}")]
    MalformedGrid { reason: String },

    /// An action addressed a cell outside the grid.
    #[error("position ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl PuzzleError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        PuzzleError::MalformedGrid { reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
