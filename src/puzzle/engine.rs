//! The `Puzzle` trait and its implementations for both boards.

use serde::{Deserialize, Serialize};

use crate::core::{GridPos, Result};
use crate::pipes::PipeGrid;
use crate::sliding::SlidingGrid;

/// A player action on the pipe board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipeMove {
    RotateClockwise(GridPos),
    RotateCounterClockwise(GridPos),
}

/// A puzzle driven one discrete action at a time.
///
/// ## Implementation Notes
///
/// - `apply`: `Err` only for actions addressed off the board; a move the
///   rules refuse returns `Ok(false)` and changes nothing
/// - `legal_moves`: every move `apply` would accept right now
/// - `moves`: count of accepted player moves
pub trait Puzzle {
    /// One player action.
    type Move: Copy;

    /// Apply a move. Returns whether the board changed.
    fn apply(&mut self, mv: Self::Move) -> Result<bool>;

    /// Has the player reached the goal state?
    fn is_solved(&self) -> bool;

    /// Moves the player has made so far.
    fn moves(&self) -> u32;

    /// Moves that would be accepted from the current state.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply moves in order, stopping at the first error.
    ///
    /// Returns how many of them changed the board.
    fn apply_all<I>(&mut self, moves: I) -> Result<usize>
    where
        I: IntoIterator<Item = Self::Move>,
    {
        let mut applied = 0;
        for mv in moves {
            if self.apply(mv)? {
                applied += 1;
            }
        }
        Ok(applied)
    }
}

impl Puzzle for PipeGrid {
    type Move = PipeMove;

    fn apply(&mut self, mv: PipeMove) -> Result<bool> {
        match mv {
            PipeMove::RotateClockwise(pos) => self.rotate_cell_clockwise(pos)?,
            PipeMove::RotateCounterClockwise(pos) => self.rotate_cell_counter_clockwise(pos)?,
        }
        Ok(true)
    }

    fn is_solved(&self) -> bool {
        PipeGrid::is_solved(self)
    }

    fn moves(&self) -> u32 {
        PipeGrid::moves(self)
    }

    fn legal_moves(&self) -> Vec<PipeMove> {
        self.dimensions()
            .positions()
            .flat_map(|pos| [PipeMove::RotateClockwise(pos), PipeMove::RotateCounterClockwise(pos)])
            .collect()
    }
}

impl Puzzle for SlidingGrid {
    type Move = GridPos;

    fn apply(&mut self, mv: GridPos) -> Result<bool> {
        self.slide(mv)
    }

    fn is_solved(&self) -> bool {
        SlidingGrid::is_solved(self)
    }

    fn moves(&self) -> u32 {
        SlidingGrid::moves(self)
    }

    fn legal_moves(&self) -> Vec<GridPos> {
        self.movable_positions().into_vec()
    }
}
