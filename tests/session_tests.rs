//! Saving and replaying a puzzle session from its RNG state.

use tile_puzzles::core::{PipeConfig, PuzzleRng, PuzzleRngState};
use tile_puzzles::pipes::PipeGrid;
use tile_puzzles::sliding::SlidingGrid;

/// One seed drives both puzzles through separate context streams; a
/// checkpoint taken mid-session replays the rest exactly.
#[test]
fn test_session_replays_from_checkpoint() {
    let session = PuzzleRng::new(77);
    let mut pipe_rng = session.for_context("pipes");
    let mut tile_rng = session.for_context("tiles");

    let config = PipeConfig::default().with_size(4, 4);
    let pipes = PipeGrid::generate(&config, &mut pipe_rng).unwrap();
    let mut tiles = SlidingGrid::new(3, &mut tile_rng).unwrap();

    let json = serde_json::to_string(&tile_rng.state()).unwrap();
    let checkpoint = tiles.clone();
    tiles.shuffle(50, &mut tile_rng);

    let state: PuzzleRngState = serde_json::from_str(&json).unwrap();
    let mut replay_rng = PuzzleRng::from_state(&state);
    let mut replayed = checkpoint;
    replayed.shuffle(50, &mut replay_rng);
    assert_eq!(replayed, tiles);

    // The pipe stream is untouched by tile shuffling.
    let mut fresh_pipes = PuzzleRng::new(77).for_context("pipes");
    assert_eq!(PipeGrid::generate(&config, &mut fresh_pipes).unwrap(), pipes);
}

/// Forks taken after a restore match the forks of the original session.
#[test]
fn test_restored_session_forks_identically() {
    let mut session = PuzzleRng::new(5);
    let _first_board = session.fork();
    let saved = session.state();

    let mut restored = PuzzleRng::from_state(&saved);
    let config = PipeConfig::default().with_size(3, 5).with_sentinel_rows(0, 2);
    let original = PipeGrid::generate(&config, &mut session.fork()).unwrap();
    let again = PipeGrid::generate(&config, &mut restored.fork()).unwrap();

    assert_eq!(original, again);
    assert_eq!(session.state(), restored.state());
}
