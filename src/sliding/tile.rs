//! Numbered tile identity.

use serde::{Deserialize, Serialize};

use crate::core::GridPos;

/// A numbered tile and where it currently sits.
///
/// Indices run `1..N²`; the empty slot is not a tile. Values are copied
/// in and out of the board, so a stale copy never aliases a live slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlidingTile {
    pub index: u32,
    pub position: GridPos,
}

impl SlidingTile {
    #[must_use]
    pub const fn new(index: u32, position: GridPos) -> Self {
        Self { index, position }
    }

    /// Row-major position this tile occupies on a solved board of width `size`.
    ///
    /// `None` when the index has no slot on such a board: index 0 (the
    /// empty slot), an index of `size * size` or more, or a zero width.
    #[must_use]
    pub fn home(self, size: usize) -> Option<GridPos> {
        let index = self.index as usize;
        let rank = index.checked_sub(1)?;
        if index >= size.saturating_mul(size) {
            return None;
        }
        Some(GridPos::new(rank / size, rank % size))
    }

    #[must_use]
    pub fn is_home(self, size: usize) -> bool {
        self.home(size) == Some(self.position)
    }
}

impl std::fmt::Display for SlidingTile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({} at {})", self.index, self.position)
    }
}
