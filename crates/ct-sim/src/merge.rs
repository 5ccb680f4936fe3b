//! The lineage merge engine.
//!
//! # Per-individual algorithm
//!
//! For individual `p` infected at `T`:
//!
//! 1. One leaf per sample time of `p`.
//! 2. Lineages = those leaves + the cached contribution of each infectee.
//! 3. No lineages → `p` contributes nothing.
//! 4. Sort lineages by time, most recent first.
//! 5. **Admission**: lineages join the active set one at a time.  Between
//!    two admissions the active set coalesces freely under the model's
//!    unconstrained waiting time; a draw that would land before the next
//!    admission is discarded and time jumps to that admission.
//! 6. **Forced merge**: once the last lineage is in, the remaining active
//!    lineages coalesce under the model's constrained waiting time so that
//!    every merge lands in `[T, now]`.
//! 7. A transmission marker at `T` carries the single survivor to `p`'s
//!    infector.
//!
//! Each coalescence merges two active lineages chosen uniformly at random.

use ct_core::tolerance::times_coincide;
use ct_core::{IndividualId, NodeIndex, SimRng};
use ct_model::PopulationModel;
use ct_network::TransmissionNetwork;
use ct_phylo::PhyloArena;

use crate::{Contribution, ResultCache, SimError, SimResult};

/// Borrowed context for merging individuals of one seed's subtree.
///
/// The arena is exclusively borrowed for the duration of the merger, so a
/// seed's tree has a single writer.
pub struct LineageMerger<'a, M: PopulationModel + ?Sized> {
    pub network: &'a TransmissionNetwork,
    pub model:   &'a M,
    pub rng:     &'a mut SimRng,
    pub arena:   &'a mut PhyloArena,
    pub cache:   &'a mut ResultCache,
}

impl<M: PopulationModel + ?Sized> LineageMerger<'_, M> {
    /// Merge `p`'s lineages, record the result in the cache, and return it.
    ///
    /// Every infectee of `p` that has samples must already be in the cache.
    pub fn merge(&mut self, p: IndividualId) -> SimResult<Contribution> {
        let infection_time = self.network.infection_time[p.index()];

        let mut pending = self.collect_lineages(p)?;
        if pending.is_empty() {
            self.cache.record(p, Contribution::Empty);
            return Ok(Contribution::Empty);
        }

        // Most recent first.  Stable, so ties keep collection order.
        pending.sort_by(|a, b| b.1.total_cmp(&a.1));

        // ── Admission phase ───────────────────────────────────────────────
        let mut active: Vec<NodeIndex> = vec![pending[0].0];
        let mut now = pending[0].1;
        let last = pending.len() - 1;

        for i in 1..pending.len() {
            active.push(pending[i].0);
            now = pending[i].1;
            if i == last {
                break;
            }

            let next_admission = pending[i + 1].1;
            while active.len() > 1 {
                let delta = self.model.unconstrained_delta(active.len(), now, self.rng);
                let delta = checked_delta(p, active.len(), delta)?;
                let merge_time = now - delta;
                if merge_time < next_admission {
                    now = next_admission;
                    break;
                }
                now = self.coalesce(p, &mut active, merge_time)?;
            }
        }

        // ── Forced-merge phase ────────────────────────────────────────────
        while active.len() > 1 {
            if now < 0.0 {
                return Err(SimError::NegativeTime { individual: p, time: now });
            }

            let merge_time = if times_coincide(now, infection_time) {
                infection_time
            } else {
                let delta = self
                    .model
                    .constrained_delta(active.len(), now, infection_time, self.rng);
                let delta = checked_delta(p, active.len(), delta)?;
                let t = now - delta;
                if t < infection_time {
                    log::trace!("{p}: clamped merge at {t} onto infection time {infection_time}");
                    infection_time
                } else {
                    t
                }
            };
            now = self.coalesce(p, &mut active, merge_time)?;
        }

        let marker = self.arena.push_transmission(infection_time, active[0], p)?;
        let contribution = Contribution::Lineage(marker);
        self.cache.record(p, contribution);
        Ok(contribution)
    }

    /// Leaves for `p`'s samples plus its infectees' lineages, with times.
    fn collect_lineages(&mut self, p: IndividualId) -> SimResult<Vec<(NodeIndex, f64)>> {
        let network = self.network;
        let samples = &network.sample_times[p.index()];
        let infected = &network.infected[p.index()];
        let mut lineages = Vec::with_capacity(samples.len() + infected.len());

        for &t in samples {
            lineages.push((self.arena.push_leaf(t, p)?, t));
        }

        for &child in infected {
            match self.cache.get(child) {
                Some(Contribution::Lineage(node)) => {
                    lineages.push((node, self.arena.time(node)?));
                }
                Some(Contribution::Empty) => {}
                None if !network.sample_times[child.index()].is_empty() => {
                    return Err(SimError::OrderViolation { individual: p, infectee: child });
                }
                None => {
                    log::warn!("{child} reached {p} unprocessed; treating it as empty");
                }
            }
        }
        Ok(lineages)
    }

    /// Merge two uniformly chosen active lineages at `time`.  Returns `time`.
    fn coalesce(
        &mut self,
        p:      IndividualId,
        active: &mut Vec<NodeIndex>,
        time:   f64,
    ) -> SimResult<f64> {
        if time < 0.0 {
            return Err(SimError::NegativeTime { individual: p, time });
        }
        let a = active.swap_remove(self.rng.pick_index(active.len()));
        let b = active.swap_remove(self.rng.pick_index(active.len()));
        let parent = self.arena.push_coalescence(time, a, b)?;
        active.push(parent);
        Ok(time)
    }
}

fn checked_delta(individual: IndividualId, lineages: usize, delta: f64) -> SimResult<f64> {
    // Written so that NaN fails too.
    if delta >= 0.0 {
        Ok(delta)
    } else {
        Err(SimError::InvalidWaitingTime { individual, lineages, delta })
    }
}
