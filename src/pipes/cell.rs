//! A single rotatable pipe segment.

use serde::{Deserialize, Serialize};

use super::shape::{Connections, PipeShape, Rotation};
use crate::core::{Direction, RandomSource, Result};

/// A pipe piece and its current rotation.
///
/// The open sides are derived on demand from `shape` and `rotation`;
/// the only way to change them is to rotate the cell.
///
/// ```
/// use tile_puzzles::core::Direction;
/// use tile_puzzles::pipes::{PipeCell, PipeShape, Rotation};
///
/// let mut cell = PipeCell::new(PipeShape::Straight, Rotation::Deg0);
/// assert!(cell.connections().top);
///
/// cell.rotate_clockwise();
/// assert!(cell.connections().is_open(Direction::Left));
/// assert_eq!(cell.rotation().degrees(), 90);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PipeCell {
    shape: PipeShape,
    rotation: Rotation,
}

impl PipeCell {
    #[must_use]
    pub const fn new(shape: PipeShape, rotation: Rotation) -> Self {
        Self { shape, rotation }
    }

    /// Build from a rotation in degrees (0, 90, 180 or 270).
    pub fn from_degrees(shape: PipeShape, degrees: u32) -> Result<Self> {
        Ok(Self::new(shape, Rotation::from_degrees(degrees)?))
    }

    /// Uniformly random shape and rotation.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let shape = PipeShape::random(rng);
        let rotation = Rotation::random(rng);
        Self::new(shape, rotation)
    }

    #[must_use]
    pub const fn shape(&self) -> PipeShape {
        self.shape
    }

    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Currently open sides.
    #[must_use]
    pub const fn connections(&self) -> Connections {
        Connections::of(self.shape, self.rotation)
    }

    /// Rotate by a signed multiple of 90 degrees. A delta that is a
    /// multiple of 360 leaves the cell unchanged.
    pub fn rotate(&mut self, delta_degrees: i32) {
        self.rotation = self.rotation.rotated_by(delta_degrees);
    }

    pub fn rotate_clockwise(&mut self) {
        self.rotate(90);
    }

    pub fn rotate_counter_clockwise(&mut self) {
        self.rotate(-90);
    }

    /// True if this cell is open towards `direction` and `other`, the
    /// neighbor on that side, is open back towards this cell.
    #[must_use]
    pub const fn is_connected_to(&self, other: &PipeCell, direction: Direction) -> bool {
        self.connections().is_open(direction) && other.connections().is_open(direction.opposite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::tests::ScriptedSource;
    use crate::core::PuzzleRng;

    #[test]
    fn test_random_draws_shape_then_rotation() {
        let mut source = ScriptedSource::new(vec![1, 3, 2, 0]);
        assert_eq!(PipeCell::random(&mut source), PipeCell::new(PipeShape::Elbow, Rotation::Deg270));
        assert_eq!(PipeCell::random(&mut source), PipeCell::new(PipeShape::T, Rotation::Deg0));
    }

    #[test]
    fn test_random_covers_every_shape() {
        let mut rng = PuzzleRng::new(3);
        let drawn: Vec<PipeShape> = (0..200).map(|_| PipeCell::random(&mut rng).shape()).collect();
        for shape in PipeShape::ALL {
            assert!(drawn.contains(&shape));
        }
    }

    #[test]
    fn test_four_clockwise_turns_restore_connections() {
        for shape in PipeShape::ALL {
            for rotation in Rotation::ALL {
                let mut cell = PipeCell::new(shape, rotation);
                let original = cell.connections();
                for _ in 0..4 {
                    cell.rotate_clockwise();
                }
                assert_eq!(cell.connections(), original);
                assert_eq!(cell.rotation(), rotation);
            }
        }
    }

    #[test]
    fn test_counter_clockwise_undoes_clockwise() {
        let mut cell = PipeCell::new(PipeShape::T, Rotation::Deg90);
        let before = cell.connections();
        cell.rotate_clockwise();
        assert_ne!(cell.connections(), before);
        cell.rotate_counter_clockwise();
        assert_eq!(cell.connections(), before);
    }

    #[test]
    fn test_full_turn_is_noop() {
        let mut cell = PipeCell::new(PipeShape::Elbow, Rotation::Deg180);
        cell.rotate(360);
        assert_eq!(cell.rotation(), Rotation::Deg180);
        cell.rotate(0);
        assert_eq!(cell.rotation(), Rotation::Deg180);
    }

    #[test]
    fn test_is_connected_to_requires_both_sides() {
        let horizontal = PipeCell::new(PipeShape::Straight, Rotation::Deg90);
        let vertical = PipeCell::new(PipeShape::Straight, Rotation::Deg0);

        assert!(horizontal.is_connected_to(&horizontal, Direction::Right));
        assert!(horizontal.is_connected_to(&horizontal, Direction::Left));
        assert!(!horizontal.is_connected_to(&vertical, Direction::Right));
        assert!(!vertical.is_connected_to(&horizontal, Direction::Bottom));
        assert!(vertical.is_connected_to(&vertical, Direction::Bottom));
    }

    #[test]
    fn test_elbow_meets_elbow() {
        // {R,B} next to {T,L}: cell0 opens right, cell1 opens left
        let left = PipeCell::from_degrees(PipeShape::Elbow, 0).unwrap();
        let right = PipeCell::from_degrees(PipeShape::Elbow, 180).unwrap();
        assert!(left.is_connected_to(&right, Direction::Right));
        assert!(right.is_connected_to(&left, Direction::Left));
    }

    #[test]
    fn test_from_degrees_rejects_odd_angles() {
        assert!(PipeCell::from_degrees(PipeShape::Cross, 30).is_err());
    }

    #[test]
    fn test_serialization() {
        let cell = PipeCell::new(PipeShape::T, Rotation::Deg270);
        let json = serde_json::to_string(&cell).unwrap();
        let deserialized: PipeCell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, deserialized);
    }
}
