//! Pipe shapes, quarter-turn rotations and the open sides they produce.
//!
//! Connections are never stored on a cell. They are a pure function of
//! shape and rotation, so they cannot drift out of sync with either.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, PuzzleError, RandomSource, Result};

/// The four pipe pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipeShape {
    /// Open top and bottom.
    Straight,
    /// Open right and bottom.
    Elbow,
    /// Open right, bottom and left.
    T,
    /// Open on every side.
    Cross,
}

impl PipeShape {
    pub const ALL: [PipeShape; 4] = [PipeShape::Straight, PipeShape::Elbow, PipeShape::T, PipeShape::Cross];

    /// Open sides at 0° rotation.
    #[must_use]
    pub const fn base_connections(self) -> Connections {
        match self {
            PipeShape::Straight => Connections::new(true, false, true, false),
            PipeShape::Elbow => Connections::new(false, true, true, false),
            PipeShape::T => Connections::new(false, true, true, true),
            PipeShape::Cross => Connections::new(true, true, true, true),
        }
    }

    /// Pick a shape uniformly.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_index(Self::ALL.len())]
    }
}

/// Clockwise rotation in quarter turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::Deg0, Rotation::Deg90, Rotation::Deg180, Rotation::Deg270];

    /// Parse one of 0, 90, 180 or 270.
    pub fn from_degrees(degrees: u32) -> Result<Self> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(PuzzleError::malformed(format!(
                "rotation must be 0, 90, 180 or 270 degrees, got {}",
                other
            ))),
        }
    }

    #[must_use]
    pub const fn from_quarter_turns(turns: u32) -> Self {
        Self::ALL[(turns % 4) as usize]
    }

    #[must_use]
    pub const fn quarter_turns(self) -> u32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    #[must_use]
    pub const fn degrees(self) -> u32 {
        self.quarter_turns() * 90
    }

    /// Apply a signed delta in degrees. The delta is normalized into
    /// `[0, 360)` first, so -90 is the same as +270. Deltas that are not
    /// multiples of 90 are truncated to whole quarter turns.
    #[must_use]
    pub const fn rotated_by(self, delta_degrees: i32) -> Self {
        let turns = (delta_degrees.rem_euclid(360) / 90) as u32;
        Self::from_quarter_turns(self.quarter_turns() + turns)
    }

    /// Pick a rotation uniformly.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_index(Self::ALL.len())]
    }
}

/// Which sides of a cell are open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connections {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Connections {
    #[must_use]
    pub const fn new(top: bool, right: bool, bottom: bool, left: bool) -> Self {
        Self { top, right, bottom, left }
    }

    /// Open sides of `shape` turned clockwise by `rotation`.
    #[must_use]
    pub const fn of(shape: PipeShape, rotation: Rotation) -> Self {
        let mut connections = shape.base_connections();
        let mut turns = rotation.quarter_turns();
        while turns > 0 {
            connections = connections.rotated_clockwise();
            turns -= 1;
        }
        connections
    }

    /// One quarter turn clockwise: every open side moves to the next side
    /// clockwise (top to right, right to bottom, bottom to left, left to top).
    #[must_use]
    pub const fn rotated_clockwise(self) -> Self {
        Self {
            top: self.left,
            right: self.top,
            bottom: self.right,
            left: self.bottom,
        }
    }

    #[must_use]
    pub const fn is_open(self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
        }
    }

    #[must_use]
    pub const fn open_count(self) -> usize {
        self.top as usize + self.right as usize + self.bottom as usize + self.left as usize
    }
}

impl std::fmt::Display for Connections {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let flags = [(self.top, 'T'), (self.right, 'R'), (self.bottom, 'B'), (self.left, 'L')];
        write!(f, "{{")?;
        for (open, label) in flags {
            if open {
                write!(f, "{}", label)?;
            }
        }
        write!(f, "}}")
    }
}
