//! Puzzle configuration.
//!
//! Hosts describe the board they want with a config value and hand it to
//! [`PipeGrid::generate`](crate::pipes::PipeGrid::generate) or
//! [`SlidingGrid::with_config`](crate::sliding::SlidingGrid::with_config).

use serde::{Deserialize, Serialize};

use crate::pipes::PipeShape;

/// Shape of a generated pipe board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipeConfig {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,

    /// Row the virtual start node attaches to, left of column 0.
    pub start_row: usize,

    /// Row the virtual end node attaches to, right of the last column.
    pub end_row: usize,

    /// Pick each cell's shape at random instead of using `default_shape`.
    pub randomize_shape: bool,

    /// Pick each cell's starting rotation at random instead of 0°.
    pub randomize_rotation: bool,

    /// Shape used when `randomize_shape` is off.
    pub default_shape: PipeShape,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            start_row: 1,
            end_row: 1,
            randomize_shape: true,
            randomize_rotation: true,
            default_shape: PipeShape::Straight,
        }
    }
}

impl PipeConfig {
    /// Set board dimensions.
    #[must_use]
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the rows the start and end sentinels attach to.
    #[must_use]
    pub fn with_sentinel_rows(mut self, start_row: usize, end_row: usize) -> Self {
        self.start_row = start_row;
        self.end_row = end_row;
        self
    }

    /// Use `shape` for every cell.
    #[must_use]
    pub fn with_fixed_shape(mut self, shape: PipeShape) -> Self {
        self.randomize_shape = false;
        self.default_shape = shape;
        self
    }

    /// Enable or disable random starting rotations.
    #[must_use]
    pub fn with_random_rotation(mut self, randomize: bool) -> Self {
        self.randomize_rotation = randomize;
        self
    }
}

/// Shape of a sliding-tile board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidingConfig {
    /// Board is `size` x `size`.
    pub size: usize,

    /// Random legal slides applied after building the solved board.
    /// `None` uses `size * size * 10`.
    pub shuffle_steps: Option<usize>,
}

impl Default for SlidingConfig {
    fn default() -> Self {
        Self {
            size: 3,
            shuffle_steps: None,
        }
    }
}

impl SlidingConfig {
    /// Multiplier applied to the cell count for the default shuffle length.
    pub const STEPS_PER_CELL: usize = 10;

    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_shuffle_steps(mut self, steps: usize) -> Self {
        self.shuffle_steps = Some(steps);
        self
    }

    /// Number of shuffle steps to actually perform.
    #[must_use]
    pub fn effective_shuffle_steps(&self) -> usize {
        self.shuffle_steps
            .unwrap_or(self.size * self.size * Self::STEPS_PER_CELL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pipe_config() {
        let config = PipeConfig::default();
        assert_eq!((config.rows, config.cols), (3, 3));
        assert_eq!((config.start_row, config.end_row), (1, 1));
        assert!(config.randomize_shape);
        assert!(config.randomize_rotation);
    }

    #[test]
    fn test_pipe_builder_pattern() {
        let config = PipeConfig::default()
            .with_size(4, 6)
            .with_sentinel_rows(0, 3)
            .with_fixed_shape(PipeShape::Cross)
            .with_random_rotation(false);

        assert_eq!((config.rows, config.cols), (4, 6));
        assert_eq!((config.start_row, config.end_row), (0, 3));
        assert!(!config.randomize_shape);
        assert_eq!(config.default_shape, PipeShape::Cross);
        assert!(!config.randomize_rotation);
    }

    #[test]
    fn test_sliding_shuffle_steps() {
        let config = SlidingConfig::default();
        assert_eq!(config.effective_shuffle_steps(), 90);

        let config = SlidingConfig::default().with_size(4);
        assert_eq!(config.effective_shuffle_steps(), 160);

        let config = config.with_shuffle_steps(5);
        assert_eq!(config.effective_shuffle_steps(), 5);
    }

    #[test]
    fn test_serialization() {
        let config = PipeConfig::default().with_size(2, 5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: PipeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);

        let config = SlidingConfig::default().with_shuffle_steps(12);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SlidingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
