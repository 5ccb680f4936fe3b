//! Exponentially growing effective population size.
//!
//! # Derivation
//!
//! Looking backward from the current time `τ`, the population at absolute
//! time `t ≤ τ` is `S0·e^{r(t−τ)}`, so with `k = n(n−1)/2` pairs the
//! coalescent intensity at backward offset `s = τ − t` is
//!
//! ```text
//! λ(s) = k·e^{r·s} / S0
//! Λ(s) = ∫₀ˢ λ = k·(e^{r·s} − 1) / (r·S0)
//! Λ⁻¹(h) = ln(1 + r·S0·h / k) / r
//! ```
//!
//! An unconstrained draw inverts `Λ(s) = −ln(1−U)`.  For `r < 0` the total
//! hazard is bounded by `k/(|r|·S0)`; hazards beyond it never fire and map
//! to `+∞`.  A draw truncated to `[0, D]` inverts
//! `Λ(s) = −ln(1 − U·(1 − e^{−Λ(D)}))`, which is the same distribution
//! conditioned on the window.

use ct_core::SimRng;
use ct_core::tolerance::{ZERO_SIZE, is_zero_rate};

use crate::{ConstantSize, PopulationModel, pair_count};

/// Coalescent with effective population size `initial_size` at the current
/// time, shrinking backward at `growth_rate`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExponentialGrowth {
    pub initial_size: f64,
    pub growth_rate:  f64,
}

impl ExponentialGrowth {
    pub fn new(initial_size: f64, growth_rate: f64) -> Self {
        Self { initial_size, growth_rate }
    }

    /// Cumulative hazard `Λ(s)` accumulated over backward offset `s`.
    pub fn cumulative_hazard(&self, lineages: usize, s: f64) -> f64 {
        let k = pair_count(lineages);
        let r = self.growth_rate;
        k * (r * s).exp_m1() / (r * self.initial_size)
    }

    /// Backward offset at which cumulative hazard `h` is reached, or `+∞`
    /// if a shrinking-backward population never accumulates that much.
    pub fn inverse_hazard(&self, lineages: usize, h: f64) -> f64 {
        let k = pair_count(lineages);
        let r = self.growth_rate;
        let x = r * self.initial_size * h / k;
        if x <= -1.0 {
            return f64::INFINITY;
        }
        x.ln_1p() / r
    }

    /// Map `u ∈ [0, 1)` to an unconstrained waiting time.
    pub fn unconstrained_from_uniform(&self, lineages: usize, u: f64) -> f64 {
        self.inverse_hazard(lineages, -(-u).ln_1p())
    }

    /// Map `u ∈ [0, 1)` to a waiting time conditioned on `[0, window]`.
    pub fn constrained_from_uniform(&self, lineages: usize, u: f64, window: f64) -> f64 {
        let window = window.max(0.0);
        let total = self.cumulative_hazard(lineages, window);
        let mass = -(-total).exp_m1();
        let h = -(-u * mass).ln_1p();
        let s = self.inverse_hazard(lineages, h);
        if s.is_finite() { s.clamp(0.0, window) } else { window }
    }

    fn as_constant(&self) -> ConstantSize {
        ConstantSize::new(self.initial_size)
    }
}

impl PopulationModel for ExponentialGrowth {
    fn name(&self) -> &'static str {
        "exponential effective population size growth"
    }

    fn unconstrained_delta(&self, lineages: usize, now: f64, rng: &mut SimRng) -> f64 {
        if self.initial_size < ZERO_SIZE {
            return 0.0;
        }
        if is_zero_rate(self.growth_rate) {
            return self.as_constant().unconstrained_delta(lineages, now, rng);
        }
        let u = rng.uniform();
        self.unconstrained_from_uniform(lineages, u)
    }

    fn constrained_delta(
        &self,
        lineages: usize,
        now:      f64,
        deadline: f64,
        rng:      &mut SimRng,
    ) -> f64 {
        if self.initial_size < ZERO_SIZE {
            return 0.0;
        }
        if is_zero_rate(self.growth_rate) {
            return self.as_constant().constrained_delta(lineages, now, deadline, rng);
        }
        let u = rng.uniform();
        self.constrained_from_uniform(lineages, u, now - deadline)
    }
}
