//! Uniform scalar randomness feeding all generation and per-frame draws.
//!
//! Kept behind a trait so tests can force or suppress the rare flash/blink
//! events deterministically instead of sampling a real generator.

use rand::prelude::*;

pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_f32(&mut self) -> f32;

    /// Uniform value in `[lo, hi)`.
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }

    /// Uniform value in `[-span/2, span/2)`.
    fn centered(&mut self, span: f32) -> f32 {
        (self.next_f32() - 0.5) * span
    }

    /// Independent Bernoulli draw with the given success probability.
    fn chance(&mut self, probability: f32) -> bool {
        self.next_f32() < probability
    }
}

/// Default source backed by `StdRng`. Scenes are normally seeded from
/// entropy; tests seed explicitly for reproducible geometry.
pub struct CityRng(StdRng);

impl CityRng {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn seed_from_u64(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for CityRng {
    fn next_f32(&mut self) -> f32 {
        self.0.gen()
    }
}
