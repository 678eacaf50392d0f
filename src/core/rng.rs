//! Deterministic random number generation for the computer's tie-breaks.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical choices
//! - **Injectable**: Move selection only sees the `Chooser` trait, so tests
//!   can script or seed every decision
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use rust_ttt::core::{Chooser, GameRng, Place};
//!
//! let candidates = [Place::new(5).unwrap(), Place::new(9).unwrap()];
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.choose_place(&candidates), b.choose_place(&candidates));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::place::Place;

/// Source of uniform choices among candidate places.
///
/// Returns `None` only when `candidates` is empty.
pub trait Chooser {
    fn choose_place(&mut self, candidates: &[Place]) -> Option<Place>;
}

impl<F> Chooser for F
where
    F: FnMut(&[Place]) -> Option<Place>,
{
    fn choose_place(&mut self, candidates: &[Place]) -> Option<Place> {
        self(candidates)
    }
}

/// Deterministic RNG.
///
/// Uses ChaCha8 for speed while keeping a reproducible stream per seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a freshly drawn seed.
    ///
    /// The seed stays readable through `seed()` so a game can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl Chooser for GameRng {
    fn choose_place(&mut self, candidates: &[Place]) -> Option<Place> {
        self.choose(candidates).copied()
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
