//! The shared, seedable uniform source and the sampling primitives built
//! on it.
//!
//! # Determinism strategy
//!
//! A run normally owns exactly one `SimRng`, consumed in a fixed order
//! (traversal order × per-individual merge order), so a fixed seed yields
//! bit-identical trees.  Runs that opt into independent per-seed streams
//! derive stream `k` with:
//!
//!   stream_seed = global_seed XOR (k * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive stream indices uniformly across the seed space,
//! so stream `k` does not depend on how many other streams exist or on
//! which thread consumes it.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::sampling::{exponential_inverse_cdf, truncated_exponential_inverse_cdf};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation RNG.  Single owner, never shared across threads; parallel
/// runs give each worker its own [`SimRng::stream`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Independent stream `k` derived deterministically from `seed`.
    pub fn stream(seed: u64, k: u64) -> Self {
        let stream_seed = seed ^ k.wrapping_add(1).wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(stream_seed))
    }

    /// Uniform draw on `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// Uniform index in `0..len`.
    ///
    /// # Panics
    /// Panics if `len == 0`.
    #[inline]
    pub fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    /// Exponential waiting time with the given `rate`; `+∞` for a zero rate.
    ///
    /// A zero rate consumes no randomness.
    pub fn sample_exponential(&mut self, rate: f64) -> f64 {
        if crate::tolerance::is_zero_rate(rate) {
            return f64::INFINITY;
        }
        let u = self.uniform();
        exponential_inverse_cdf(u, rate)
    }

    /// Exponential waiting time conditioned to lie in `[0, bound]`; exactly
    /// `bound` for a zero rate.
    ///
    /// A zero rate consumes no randomness.
    pub fn sample_truncated_exponential(&mut self, rate: f64, bound: f64) -> f64 {
        if crate::tolerance::is_zero_rate(rate) {
            return bound;
        }
        let u = self.uniform();
        truncated_exponential_inverse_cdf(u, rate, bound)
    }
}
