//! Deterministic random number generation scoped to one setup generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical draws, so a whole
//!   generation (extraction + selection) can be replayed exactly
//! - **Replayable**: an entropy-seeded RNG still reports its seed
//!
//! ## Usage
//!
//! ```
//! use legendary_setup::core::SetupRng;
//!
//! let mut a = SetupRng::new(42);
//! let mut b = SetupRng::new(42);
//!
//! let pool = ["Skrulls", "Hydra", "Brotherhood", "Masters of Evil"];
//! assert_eq!(a.sample(&pool, 2), b.sample(&pool, 2));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG shared by every draw of one generation.
///
/// Uses ChaCha8 for speed while keeping a stable, platform-independent stream.
#[derive(Clone, Debug)]
pub struct SetupRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SetupRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from operating-system entropy.
    ///
    /// The drawn seed is kept, so `seed()` still reports a replayable value.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen::<u64>();
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform float in `[0, upper)`. Returns 0 for a non-positive bound.
    pub fn gen_unit_scaled(&mut self, upper: f64) -> f64 {
        if upper <= 0.0 {
            return 0.0;
        }
        self.inner.gen_range(0.0..upper)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Draw `amount` distinct indices from `0..len` in random order.
    ///
    /// Asking for more than `len` returns every index (shuffled).
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(len);
        rand::seq::index::sample(&mut self.inner, len, amount).into_vec()
    }

    /// Draw `amount` distinct elements in random order.
    ///
    /// Asking for more than the slice holds returns every element.
    pub fn sample<T: Clone>(&mut self, slice: &[T], amount: usize) -> Vec<T> {
        self.sample_indices(slice.len(), amount)
            .into_iter()
            .map(|i| slice[i].clone())
            .collect()
    }
}
