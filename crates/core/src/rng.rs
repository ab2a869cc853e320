//! RNG module - seeded randomness for food placement
//!
//! Wraps a `StdRng` together with the seed it was created from, so a game
//! can be replayed by feeding the same seed back through the config.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the thread-local entropy source
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    /// Use `seed` when given, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed this RNG was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `[0, len)`; `len` must be non-zero
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
