//! Constant effective population size.

use ct_core::SimRng;
use ct_core::tolerance::ZERO_SIZE;

use crate::{PopulationModel, pair_count};

/// Kingman coalescent with constant effective population size `size`:
/// pairwise rate `n(n−1)/(2·size)`.
///
/// A size below [`ZERO_SIZE`] is treated as a population that never
/// coalesces on its own: unconstrained draws are `+∞` and constrained
/// draws land exactly on the deadline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantSize {
    pub size: f64,
}

impl ConstantSize {
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    /// Total coalescence rate for `lineages` active lineages.
    #[inline]
    pub fn rate(&self, lineages: usize) -> f64 {
        if self.size < ZERO_SIZE {
            return 0.0;
        }
        pair_count(lineages) / self.size
    }
}

impl PopulationModel for ConstantSize {
    fn name(&self) -> &'static str {
        "constant effective population size"
    }

    fn unconstrained_delta(&self, lineages: usize, _now: f64, rng: &mut SimRng) -> f64 {
        rng.sample_exponential(self.rate(lineages))
    }

    fn constrained_delta(
        &self,
        lineages: usize,
        now:      f64,
        deadline: f64,
        rng:      &mut SimRng,
    ) -> f64 {
        rng.sample_truncated_exponential(self.rate(lineages), now - deadline)
    }
}
