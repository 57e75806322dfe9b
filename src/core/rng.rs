//! Deterministic random number generation for card shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Uniform**: Fisher–Yates over the whole sequence, every permutation
//!   equally likely
//! - **Reproducible**: The seed is kept so a session can be replayed
//!
//! ```
//! use clicky_game::core::GameRng;
//! use im::vector;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! let mut left = vector![1, 2, 3, 4, 5];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//!
//! assert_eq!(left, right);
//! ```

use im::Vector;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used for reordering the board.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
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

    /// Create an RNG seeded from the operating system.
    ///
    /// The drawn seed is still recorded and available via [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a persistent vector in place.
    ///
    /// The items are shuffled as a slice (Fisher–Yates) and the vector is
    /// rebuilt from the result.
    pub fn shuffle<T: Clone>(&mut self, items: &mut Vector<T>) {
        use rand::seq::SliceRandom;

        let mut buf: Vec<T> = items.iter().cloned().collect();
        buf.shuffle(&mut self.inner);
        *items = buf.into_iter().collect();
    }
}
