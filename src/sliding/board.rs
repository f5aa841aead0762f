//! The sliding-tile board.
//!
//! ## Storage
//!
//! An arena of `N²` slots indexed by row-major rank. Exactly one slot is
//! `None` (the empty slot); the others hold tiles `1..N²` once each.
//!
//! ## Shuffling
//!
//! Boards start solved and are scrambled by a random walk of legal slides,
//! so every shuffled board can be slid back to solved.

use log::{debug, trace};

use super::tile::SlidingTile;
use crate::core::{Dimensions, GridPos, PuzzleError, RandomSource, Result, SlidingConfig};

/// An `N`x`N` sliding-tile puzzle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlidingGrid {
    dims: Dimensions,
    slots: Vec<Option<SlidingTile>>,
    empty: GridPos,
    moves: u32,
}

impl SlidingGrid {
    /// Smallest board that has a move to make.
    pub const MIN_SIZE: usize = 2;

    /// Build a solved board and shuffle it with the default number of steps.
    pub fn new<R: RandomSource + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        Self::with_config(&SlidingConfig::default().with_size(size), rng)
    }

    /// Build a solved board of `config.size` and shuffle it.
    pub fn with_config<R: RandomSource + ?Sized>(config: &SlidingConfig, rng: &mut R) -> Result<Self> {
        let mut grid = Self::solved(config.size)?;
        grid.shuffle(config.effective_shuffle_steps(), rng);
        Ok(grid)
    }

    /// Tiles `1..N²` in row-major order with the empty slot last.
    pub fn solved(size: usize) -> Result<Self> {
        Self::check_size(size)?;
        let dims = Dimensions::new(size, size);
        let last = dims.len() - 1;
        let slots = (0..dims.len())
            .map(|rank| (rank < last).then(|| SlidingTile::new(rank as u32 + 1, dims.pos_of(rank))))
            .collect();
        Ok(Self {
            dims,
            slots,
            empty: dims.pos_of(last),
            moves: 0,
        })
    }

    /// Build from explicit row-major tile indices, `0` marking the empty slot.
    ///
    /// `indices` must be a permutation of `0..N²`. Unsolvable layouts are
    /// accepted; check [`is_solvable`](Self::is_solvable) if that matters.
    pub fn from_layout(size: usize, indices: &[u32]) -> Result<Self> {
        Self::check_size(size)?;
        let dims = Dimensions::new(size, size);
        if indices.len() != dims.len() {
            return Err(PuzzleError::malformed(format!(
                "a {}x{} board needs {} entries, got {}",
                size,
                size,
                dims.len(),
                indices.len()
            )));
        }

        let mut seen = vec![false; dims.len()];
        let mut slots = Vec::with_capacity(dims.len());
        let mut empty = None;
        for (rank, &index) in indices.iter().enumerate() {
            let pos = dims.pos_of(rank);
            match seen.get_mut(index as usize) {
                Some(flag) if !*flag => *flag = true,
                Some(_) => return Err(PuzzleError::malformed(format!("tile {} appears twice", index))),
                None => {
                    return Err(PuzzleError::malformed(format!(
                        "tile {} is out of range for a {}x{} board",
                        index, size, size
                    )))
                }
            }
            if index == 0 {
                empty = Some(pos);
                slots.push(None);
            } else {
                slots.push(Some(SlidingTile::new(index, pos)));
            }
        }

        // A full permutation always contains 0.
        let empty = empty.ok_or_else(|| PuzzleError::malformed("board has no empty slot"))?;
        Ok(Self {
            dims,
            slots,
            empty,
            moves: 0,
        })
    }

    fn check_size(size: usize) -> Result<()> {
        if size < Self::MIN_SIZE {
            return Err(PuzzleError::malformed(format!(
                "a sliding board must be at least {}x{}, got {}x{}",
                Self::MIN_SIZE,
                Self::MIN_SIZE,
                size,
                size
            )));
        }
        Ok(())
    }

    /// Board width (and height).
    #[must_use]
    pub fn size(&self) -> usize {
        self.dims.rows
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[must_use]
    pub fn empty_position(&self) -> GridPos {
        self.empty
    }

    /// Successful player slides. Shuffle steps are not counted.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// The tile at `pos`, or `None` for the empty slot or an off-board position.
    #[must_use]
    pub fn tile_at(&self, pos: GridPos) -> Option<&SlidingTile> {
        self.dims.index_of(pos).and_then(|index| self.slots[index].as_ref())
    }

    /// Every tile, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = &SlidingTile> + '_ {
        self.slots.iter().flatten()
    }

    /// Row-major tile indices with `0` for the empty slot.
    #[must_use]
    pub fn layout(&self) -> Vec<u32> {
        self.slots
            .iter()
            .map(|slot| slot.map_or(0, |tile| tile.index))
            .collect()
    }

    /// Positions whose tile could slide into the empty slot right now.
    #[must_use]
    pub fn movable_positions(&self) -> smallvec::SmallVec<[GridPos; 4]> {
        self.dims.neighbors(self.empty)
    }

    /// Apply `steps` random legal slides, each picked uniformly among the
    /// tiles next to the empty slot.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, steps: usize, rng: &mut R) {
        for _ in 0..steps {
            let candidates = self.movable_positions();
            if let Some(&target) = rng.choose(&candidates) {
                self.swap_with_empty(target);
            }
        }
        debug!(
            "shuffled {}x{} board with {} steps, empty at {}",
            self.size(),
            self.size(),
            steps,
            self.empty
        );
    }

    /// Slide the tile at `pos` into the empty slot.
    ///
    /// Returns `Ok(false)` and leaves the board untouched unless `pos` is
    /// exactly one step from the empty slot.
    pub fn slide(&mut self, pos: GridPos) -> Result<bool> {
        self.dims.check(pos)?;
        if pos.manhattan_distance(self.empty) != 1 {
            trace!("rejected slide from {}, empty at {}", pos, self.empty);
            return Ok(false);
        }

        self.swap_with_empty(pos);
        self.moves += 1;
        trace!("slid {} into the empty slot", pos);
        if self.is_solved() {
            debug!("sliding board solved after {} moves", self.moves);
        }
        Ok(true)
    }

    fn swap_with_empty(&mut self, pos: GridPos) {
        let (Some(from), Some(to)) = (self.dims.index_of(pos), self.dims.index_of(self.empty)) else {
            return;
        };
        self.slots.swap(from, to);
        if let Some(tile) = self.slots[to].as_mut() {
            tile.position = self.empty;
        }
        self.empty = pos;
    }

    /// Tiles in row-major order `1..N²` with the empty slot last.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let last = self.slots.len() - 1;
        self.slots[last].is_none()
            && self.slots[..last]
                .iter()
                .enumerate()
                .all(|(rank, slot)| slot.is_some_and(|tile| tile.index as usize == rank + 1))
    }

    /// Can this board reach the solved layout by legal slides?
    ///
    /// Every slide swaps two cells (flipping the parity of the layout as a
    /// permutation of the solved one) and moves the empty slot one step
    /// (flipping the parity of its distance from the last cell). A board is
    /// solvable exactly when those two parities agree.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let cells = self.dims.len();
        // Where each cell's occupant belongs, the empty slot belonging last.
        let target: Vec<usize> = self
            .slots
            .iter()
            .map(|slot| slot.map_or(cells - 1, |tile| tile.index as usize - 1))
            .collect();

        let mut visited = vec![false; cells];
        let mut cycles = 0;
        for start in 0..cells {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut at = start;
            while !visited[at] {
                visited[at] = true;
                at = target[at];
            }
        }
        let permutation_parity = (cells - cycles) % 2;
        let distance_parity = self.empty.manhattan_distance(self.dims.pos_of(cells - 1)) % 2;
        permutation_parity == distance_parity
    }
}

impl std::fmt::Display for SlidingGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = (self.dims.len() - 1).to_string().len();
        for row in 0..self.dims.rows {
            let cells: Vec<String> = (0..self.dims.cols)
                .map(|col| match self.tile_at(GridPos::new(row, col)) {
                    Some(tile) => format!("{:>width$}", tile.index, width = width),
                    None => format!("{:>width$}", ".", width = width),
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
