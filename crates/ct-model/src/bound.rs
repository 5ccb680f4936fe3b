//! Deterministic bound models: every coalescence happens at one extreme of
//! the admissible window.

use ct_core::SimRng;

use crate::PopulationModel;

/// Lineages only coalesce when forced to: all of an individual's lineages
/// merge at its infection time, the moment it was transmitted to.  The
/// resulting phylogeny has the shape of the transmission tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransmissionBound;

impl PopulationModel for TransmissionBound {
    fn name(&self) -> &'static str {
        "time of transmission"
    }

    fn unconstrained_delta(&self, _lineages: usize, _now: f64, _rng: &mut SimRng) -> f64 {
        f64::INFINITY
    }

    fn constrained_delta(
        &self,
        _lineages: usize,
        now:       f64,
        deadline:  f64,
        _rng:      &mut SimRng,
    ) -> f64 {
        now - deadline
    }
}

/// Lineages coalesce as soon as they can: every admitted lineage merges
/// immediately with the active set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InfectionBound;

impl PopulationModel for InfectionBound {
    fn name(&self) -> &'static str {
        "time of infection"
    }

    fn unconstrained_delta(&self, _lineages: usize, _now: f64, _rng: &mut SimRng) -> f64 {
        0.0
    }

    fn constrained_delta(
        &self,
        _lineages: usize,
        now:       f64,
        deadline:  f64,
        _rng:      &mut SimRng,
    ) -> f64 {
        now - deadline
    }
}
