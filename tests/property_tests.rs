//! Property checks over rotations, reachability and shuffles.

use proptest::prelude::*;

use tile_puzzles::core::{Direction, GridPos, PuzzleRng};
use tile_puzzles::pipes::{PipeCell, PipeGrid, PipeShape, Rotation};
use tile_puzzles::sliding::SlidingGrid;

fn shape_strategy() -> impl Strategy<Value = PipeShape> {
    prop::sample::select(PipeShape::ALL.to_vec())
}

fn rotation_strategy() -> impl Strategy<Value = Rotation> {
    prop::sample::select(Rotation::ALL.to_vec())
}

fn cell_strategy() -> impl Strategy<Value = PipeCell> {
    (shape_strategy(), rotation_strategy()).prop_map(|(shape, rotation)| PipeCell::new(shape, rotation))
}

fn expected_open(shape: PipeShape) -> usize {
    match shape {
        PipeShape::Straight | PipeShape::Elbow => 2,
        PipeShape::T => 3,
        PipeShape::Cross => 4,
    }
}

proptest! {
    #[test]
    fn prop_four_turns_restore_connections(cell in cell_strategy()) {
        let mut rotated = cell;
        for _ in 0..4 {
            rotated.rotate_clockwise();
        }
        prop_assert_eq!(rotated.connections(), cell.connections());
    }

    #[test]
    fn prop_rotation_preserves_open_count(cell in cell_strategy(), turns in 0i32..12) {
        let mut rotated = cell;
        rotated.rotate(turns * 90);
        prop_assert_eq!(rotated.connections().open_count(), expected_open(cell.shape()));
    }

    #[test]
    fn prop_rotate_matches_repeated_quarter_turns(cell in cell_strategy(), turns in -8i32..8) {
        let mut direct = cell;
        direct.rotate(turns * 90);

        let mut stepped = cell;
        for _ in 0..turns.rem_euclid(4) {
            stepped.rotate_clockwise();
        }
        prop_assert_eq!(direct, stepped);
    }

    #[test]
    fn prop_quarter_turn_moves_each_side_clockwise(cell in cell_strategy()) {
        let mut rotated = cell;
        rotated.rotate_clockwise();
        for direction in Direction::CLOCKWISE {
            prop_assert_eq!(
                rotated.connections().is_open(direction.clockwise()),
                cell.connections().is_open(direction)
            );
        }
    }

    #[test]
    fn prop_flow_path_is_connected(
        cells in prop::collection::vec(cell_strategy(), 16),
        start_row in 0usize..4,
        end_row in 0usize..4,
    ) {
        let grid = PipeGrid::from_cells(cells, 4, start_row, end_row).unwrap();
        match grid.flow_path() {
            Some(path) => {
                prop_assert!(grid.is_solved());
                prop_assert_eq!(path.first(), Some(&grid.entry()));
                prop_assert_eq!(path.last(), Some(&grid.exit()));
                prop_assert!(grid.cell(grid.entry()).unwrap().connections().left);
                prop_assert!(grid.cell(grid.exit()).unwrap().connections().right);
                for pair in path.windows(2) {
                    prop_assert_eq!(pair[0].manhattan_distance(pair[1]), 1);
                }
            }
            None => prop_assert!(!grid.is_solved()),
        }
    }

    #[test]
    fn prop_shuffled_boards_are_solvable(size in 2usize..6, seed in any::<u64>(), steps in 0usize..300) {
        let mut grid = SlidingGrid::solved(size).unwrap();
        grid.shuffle(steps, &mut PuzzleRng::new(seed));
        prop_assert!(grid.is_solvable());

        let mut indices = grid.layout();
        indices.sort_unstable();
        let expected: Vec<u32> = (0..(size * size) as u32).collect();
        prop_assert_eq!(indices, expected);
    }

    #[test]
    fn prop_slide_legality(seed in any::<u64>(), row in 0usize..4, col in 0usize..4) {
        let mut grid = SlidingGrid::new(4, &mut PuzzleRng::new(seed)).unwrap();
        let before = grid.clone();
        let target = GridPos::new(row, col);
        let adjacent = target.manhattan_distance(grid.empty_position()) == 1;

        prop_assert_eq!(grid.slide(target), Ok(adjacent));
        if adjacent {
            prop_assert_eq!(grid.empty_position(), target);
            let moved = before.tile_at(target).map(|tile| tile.index);
            prop_assert_eq!(grid.tile_at(before.empty_position()).map(|tile| tile.index), moved);
            prop_assert!(grid.tile_at(target).is_none());
        } else {
            prop_assert_eq!(grid, before);
        }
    }
}
