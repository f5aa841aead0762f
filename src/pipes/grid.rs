//! The pipe board: a fully populated grid plus start and end rows.

use log::{debug, trace};

use super::cell::PipeCell;
use super::shape::{PipeShape, Rotation};
use super::solver;
use crate::core::{Dimensions, GridPos, PipeConfig, PuzzleError, RandomSource, Result};

/// Rectangular grid of pipe cells with a virtual start node left of
/// column 0 on `start_row` and a virtual end node right of the last
/// column on `end_row`.
///
/// Dimensions and sentinel rows are fixed at construction; afterwards the
/// only mutation is rotating cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipeGrid {
    dims: Dimensions,
    cells: Vec<PipeCell>,
    start_row: usize,
    end_row: usize,
    moves: u32,
}

impl PipeGrid {
    /// Build from a flat row-major list of cells laid out `cols` per row.
    ///
    /// The list must fill every row completely; a short last row means
    /// missing cells and is rejected.
    pub fn from_cells(cells: Vec<PipeCell>, cols: usize, start_row: usize, end_row: usize) -> Result<Self> {
        if cols == 0 {
            return Err(PuzzleError::malformed("a pipe grid needs at least one column"));
        }
        if cells.is_empty() {
            return Err(PuzzleError::malformed("a pipe grid needs at least one cell"));
        }
        let rows = cells.len().div_ceil(cols);
        if cells.len() != rows * cols {
            return Err(PuzzleError::malformed(format!(
                "{} cells do not fill {} rows of {} columns",
                cells.len(),
                rows,
                cols
            )));
        }
        Self::assemble(Dimensions::new(rows, cols), cells, start_row, end_row)
    }

    /// Build from one `Vec` per row. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<PipeCell>>, start_row: usize, end_row: usize) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(PuzzleError::malformed("a pipe grid needs at least one column"));
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(PuzzleError::malformed(format!(
                "row {} has {} cells, expected {}",
                index,
                row.len(),
                cols
            )));
        }
        let dims = Dimensions::new(rows.len(), cols);
        Self::assemble(dims, rows.into_iter().flatten().collect(), start_row, end_row)
    }

    /// Generate a board from `config`, drawing shapes and rotations from `rng`.
    pub fn generate<R: RandomSource + ?Sized>(config: &PipeConfig, rng: &mut R) -> Result<Self> {
        if config.rows == 0 || config.cols == 0 {
            return Err(PuzzleError::malformed(format!(
                "cannot generate a {}x{} pipe grid",
                config.rows, config.cols
            )));
        }
        let cells = (0..config.rows * config.cols)
            .map(|_| {
                if config.randomize_shape && config.randomize_rotation {
                    return PipeCell::random(rng);
                }
                let shape = if config.randomize_shape {
                    PipeShape::random(rng)
                } else {
                    config.default_shape
                };
                let rotation = if config.randomize_rotation {
                    Rotation::random(rng)
                } else {
                    Rotation::Deg0
                };
                PipeCell::new(shape, rotation)
            })
            .collect();
        Self::assemble(
            Dimensions::new(config.rows, config.cols),
            cells,
            config.start_row,
            config.end_row,
        )
    }

    fn assemble(dims: Dimensions, cells: Vec<PipeCell>, start_row: usize, end_row: usize) -> Result<Self> {
        for (name, row) in [("start", start_row), ("end", end_row)] {
            if row >= dims.rows {
                return Err(PuzzleError::malformed(format!(
                    "{} row {} is outside a grid of {} rows",
                    name, row, dims.rows
                )));
            }
        }
        debug!(
            "pipe grid {}x{} built, start row {}, end row {}",
            dims.rows, dims.cols, start_row, end_row
        );
        Ok(Self {
            dims,
            cells,
            start_row,
            end_row,
            moves: 0,
        })
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[must_use]
    pub fn start_row(&self) -> usize {
        self.start_row
    }

    #[must_use]
    pub fn end_row(&self) -> usize {
        self.end_row
    }

    /// First cell on the start row, the only one the start node touches.
    #[must_use]
    pub fn entry(&self) -> GridPos {
        GridPos::new(self.start_row, 0)
    }

    /// Last cell on the end row, the only one the end node touches.
    #[must_use]
    pub fn exit(&self) -> GridPos {
        GridPos::new(self.end_row, self.dims.cols - 1)
    }

    /// Successful rotations since construction.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn cell(&self, pos: GridPos) -> Option<&PipeCell> {
        self.dims.index_of(pos).map(|index| &self.cells[index])
    }

    /// Every cell with its position, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (GridPos, &PipeCell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (self.dims.pos_of(index), cell))
    }

    pub fn rotate_cell_clockwise(&mut self, pos: GridPos) -> Result<()> {
        self.rotate_cell(pos, 90)
    }

    pub fn rotate_cell_counter_clockwise(&mut self, pos: GridPos) -> Result<()> {
        self.rotate_cell(pos, -90)
    }

    fn rotate_cell(&mut self, pos: GridPos, delta_degrees: i32) -> Result<()> {
        let index = self.dims.check(pos)?;
        let cell = &mut self.cells[index];
        cell.rotate(delta_degrees);
        self.moves += 1;
        trace!("rotated {} by {} to {}", pos, delta_degrees, cell.connections());
        Ok(())
    }

    /// True when an open path links the start node to the end node.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        solver::is_reachable(self)
    }

    /// The cells of a shortest open path from entry to exit, if any.
    #[must_use]
    pub fn flow_path(&self) -> Option<Vec<GridPos>> {
        solver::flow_path(self)
    }
}
