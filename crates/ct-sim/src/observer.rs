//! Run observer trait for progress reporting and output.

use ct_core::IndividualId;
use ct_network::TransmissionNetwork;

use crate::SeedTree;

/// Totals reported at the end of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Transmission seeds processed.
    pub seeds:  usize,
    /// Seeds that produced a tree.
    pub trees:  usize,
    /// Seeds with no sample anywhere in their subtree.
    pub empty:  usize,
    /// Arena nodes across all trees.
    pub nodes:  usize,
    /// Leaves (samples) across all trees.
    pub leaves: usize,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run], once per seed in
/// seed order regardless of how seeds were processed.
///
/// All methods have default no-op implementations so implementors only
/// need to override what they care about.
pub trait SimObserver {
    /// Called once before the first seed.
    fn on_run_start(&mut self, _network: &TransmissionNetwork) {}

    /// Called for each seed that produced a tree.
    fn on_tree(&mut self, _network: &TransmissionNetwork, _tree: &SeedTree) {}

    /// Called for each seed without any samples in its subtree.
    fn on_empty(&mut self, _network: &TransmissionNetwork, _seed: IndividualId) {}

    /// Called once after the last seed.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
