//! The `PopulationModel` trait: the strategy consulted by the merge engine.

use ct_core::SimRng;

/// Number of unordered lineage pairs, `n(n−1)/2`, as a float.
#[inline]
pub fn pair_count(lineages: usize) -> f64 {
    let n = lineages as f64;
    n * (n - 1.0) / 2.0
}

/// Pluggable coalescent timing policy.
///
/// Given `lineages` active lineages at absolute time `now`, a model returns
/// the backward waiting time to the next coalescence.
///
/// # Thread safety
///
/// Runs with independent per-seed streams may consult one model from many
/// Rayon workers at once, so implementations must be `Send + Sync`.  All
/// randomness comes from the caller's `SimRng`; models hold parameters
/// only.
pub trait PopulationModel: Send + Sync {
    /// Short human-readable description used in the startup banner.
    fn name(&self) -> &'static str;

    /// Waiting time to the next coalescence with no deadline.  May be
    /// `+∞` (never) or `0` (immediately).
    fn unconstrained_delta(&self, lineages: usize, now: f64, rng: &mut SimRng) -> f64;

    /// Waiting time to the next coalescence, conditioned to land within
    /// `[0, now − deadline]`.
    fn constrained_delta(
        &self,
        lineages: usize,
        now:      f64,
        deadline: f64,
        rng:      &mut SimRng,
    ) -> f64;
}

impl<M: PopulationModel + ?Sized> PopulationModel for Box<M> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn unconstrained_delta(&self, lineages: usize, now: f64, rng: &mut SimRng) -> f64 {
        (**self).unconstrained_delta(lineages, now, rng)
    }

    fn constrained_delta(
        &self,
        lineages: usize,
        now:      f64,
        deadline: f64,
        rng:      &mut SimRng,
    ) -> f64 {
        (**self).constrained_delta(lineages, now, deadline, rng)
    }
}
