//! RNG module - seeded draws for item placement and labels
//!
//! Every session owns one PCG stream seeded at construction, so the same
//! seed always produces the same sequence of drops (handy for tests and
//! replays).

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

const LABELS: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Deterministic random source for falling items.
#[derive(Debug, Clone)]
pub struct ItemRng {
    rng: Pcg32,
    seed: u64,
}

impl ItemRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Uniform x in `[0, max)`. A non-positive `max` yields 0.
    pub fn next_x(&mut self, max: f32) -> f32 {
        if !(max > 0.0) {
            return 0.0;
        }
        let x = self.rng.random_range(0.0..max);
        // Float rounding can land exactly on the bound; keep it half-open.
        if x >= max {
            0.0
        } else {
            x
        }
    }

    /// Uniform lowercase ASCII letter.
    pub fn next_label(&mut self) -> char {
        LABELS[self.rng.random_range(0..LABELS.len())] as char
    }

    /// Seed this stream was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
