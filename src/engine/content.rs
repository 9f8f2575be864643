//! Random file content: fixed-length strings over the 52 ASCII letters.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng, rng};

/// a-z then A-Z.
pub const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Odd 64-bit constant (golden ratio) used to spread item indexes across the seed space.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

fn sample_string<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Non-cryptographic generator owned by a single worker, so workers never contend on RNG state.
#[derive(Clone, Debug)]
pub struct ContentGenerator {
    rng: SmallRng,
}

impl ContentGenerator {
    /// Independently seeded instance (one per worker).
    pub fn from_os_rng() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Generator for one item of a seeded run. Content depends on `(seed, index)` only,
    /// never on which worker picked the item up.
    pub fn for_item(seed: u64, index: usize) -> Self {
        Self::seeded(seed ^ (index as u64).wrapping_mul(SEED_STRIDE))
    }

    /// Exactly `length` characters, each drawn uniformly from [`ALPHABET`].
    pub fn generate(&mut self, length: usize) -> String {
        sample_string(&mut self.rng, length)
    }
}
