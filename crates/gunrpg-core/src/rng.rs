//! Seeded, call-counted randomness.
//!
//! The combat kernel is fully deterministic given a seed: a single
//! `ChaCha8Rng` drives every draw, in event-dispatch order, with no
//! thread-local or global RNG anywhere in the call graph. `TrackedRandom`
//! wraps the generator with a call counter so a divergence between two runs
//! seeded identically can be localized to a specific draw.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Wraps a seeded `ChaCha8Rng`, counting every draw made through it.
#[derive(Debug, Clone)]
pub struct TrackedRandom {
    seed: u64,
    rng: ChaCha8Rng,
    call_count: u64,
}

impl TrackedRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            call_count: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    /// Draw a uniform `f32` in `[0, 1)`.
    pub fn uniform(&mut self) -> f32 {
        self.call_count += 1;
        self.rng.gen::<f32>()
    }

    /// Draw a uniform `f32` in `[lo, hi)`.
    pub fn uniform_range(&mut self, lo: f32, hi: f32) -> f32 {
        self.call_count += 1;
        self.rng.gen_range(lo..hi)
    }

    /// Draw a uniform `u32` in `[lo, hi]` inclusive.
    pub fn uniform_u32_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        self.call_count += 1;
        self.rng.gen_range(lo..=hi)
    }

    /// Draw a standard-normal sample via Box-Muller, consuming two uniform
    /// draws from the underlying generator (each counted separately).
    ///
    /// Uses `1.0 - u1` rather than `u1` for the draw fed to `ln()` so the
    /// rare `u1 == 0.0` case cannot produce `ln(0) = -inf`; `rng.gen::<f32>()`
    /// samples `[0, 1)`, so `1.0 - u1` samples `(0, 1]` and never hits zero.
    pub fn gaussian(&mut self) -> f32 {
        let u1 = self.uniform();
        let u2 = self.uniform();
        let r = (-2.0 * (1.0 - u1).ln()).sqrt();
        let theta = std::f32::consts::TAU * u2;
        r * theta.cos()
    }

    /// Standard-normal sample scaled by `mean` and `stddev`.
    pub fn gaussian_scaled(&mut self, mean: f32, stddev: f32) -> f32 {
        mean + stddev * self.gaussian()
    }
}
