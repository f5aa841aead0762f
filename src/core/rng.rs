//! Injectable, deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Injectable**: engines take `&mut impl RandomSource`, never ambient randomness
//! - **Deterministic**: same seed produces the same shuffles and pipe layouts
//! - **Forkable**: independent branches for generating several boards
//! - **Serializable**: O(1) state capture and restore for replaying a session
//!
//! ## Usage
//!
//! ```
//! use tile_puzzles::core::{PuzzleRng, RandomSource};
//!
//! let mut rng = PuzzleRng::new(42);
//! let mut again = PuzzleRng::new(42);
//! assert_eq!(rng.gen_index(10), again.gen_index(10));
//!
//! let options = ['a', 'b', 'c'];
//! assert!(rng.choose(&options).is_some());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Source of the uniform choices the puzzles make.
///
/// Implemented by [`PuzzleRng`]; tests may implement it with a scripted
/// sequence to force particular shuffles or layouts.
pub trait RandomSource {
    /// Uniform index in `0..upper`. Callers guarantee `upper > 0`.
    fn gen_index(&mut self, upper: usize) -> usize;

    /// Uniformly pick one element, or `None` for an empty slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.gen_index(items.len()))
        }
    }
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct PuzzleRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl PuzzleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed from the thread RNG. The chosen seed is still recorded in
    /// [`state`](Self::state) so the session can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Create an independent stream for a specific context.
    ///
    /// Keeps e.g. pipe layout and tile shuffling from consuming each
    /// other's numbers when one session drives both puzzles.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> PuzzleRngState {
        PuzzleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &PuzzleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl RandomSource for PuzzleRng {
    fn gen_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
