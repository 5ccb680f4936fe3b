//! The `Sim` struct and its per-seed driver.

use ct_core::{IndividualId, SimConfig, SimRng};
use ct_model::PopulationModel;
use ct_network::{TraversalOrder, TransmissionNetwork};
use ct_phylo::PhyloArena;

use crate::{
    Contribution, LineageMerger, ResultCache, RunSummary, SeedTree, SimError, SimObserver,
    SimResult,
};

/// Result of processing one transmission seed.
#[derive(Clone, Debug, PartialEq)]
pub struct SeedOutcome {
    pub seed: IndividualId,
    /// `None` when no individual in the seed's subtree was sampled.
    pub tree: Option<SeedTree>,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<M>` owns the transmission network, the population model and all
/// run state.  Seeds are built one at a time, each into a fresh arena:
///
/// 1. **Order**: the seed's subtree is visited infectees-first using
///    `traversal`.
/// 2. **Merge**: every visited individual is handed to a
///    [`LineageMerger`], which records its contribution in `cache`.
/// 3. **Result**: the seed's own contribution is the root of its tree.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<M: PopulationModel> {
    /// Seed, thread count and stream mode.
    pub config: SimConfig,

    /// Read-only transmission history (SoA arrays).
    pub network: TransmissionNetwork,

    /// Coalescent timing policy, consulted for every waiting time.
    pub model: M,

    /// Children-first visiting strategy.
    pub traversal: TraversalOrder,

    /// Shared random stream.  Unused when `config.independent_streams` is
    /// set; each seed then derives its own stream from `config.seed`.
    pub rng: SimRng,

    /// Contributions of every individual processed so far in this run.
    pub cache: ResultCache,
}

impl<M: PopulationModel> Sim<M> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Build the phylogeny of one seed using the shared stream.
    ///
    /// Returns `Ok(None)` when the seed's subtree contains no samples.
    pub fn build_seed(&mut self, seed: IndividualId) -> SimResult<Option<SeedTree>> {
        self.check_seed(seed)?;
        build_seed_with(
            &self.network,
            &self.model,
            self.traversal,
            seed,
            &mut self.rng,
            &mut self.cache,
        )
    }

    /// Build every seed in network order.
    ///
    /// With `config.independent_streams` each seed `k` consumes
    /// `SimRng::stream(config.seed, k)`, and with the `parallel` feature
    /// the seeds are built on Rayon's thread pool.  The outcomes are in
    /// seed order either way.
    pub fn build_all(&mut self) -> SimResult<Vec<SeedOutcome>> {
        for &seed in &self.network.seeds {
            self.check_seed(seed)?;
        }

        if !self.config.independent_streams {
            let seeds = self.network.seeds.clone();
            return seeds
                .into_iter()
                .map(|seed| -> SimResult<SeedOutcome> {
                    Ok(SeedOutcome { seed, tree: self.build_seed(seed)? })
                })
                .collect();
        }

        let built = self.build_independent()?;
        let mut outcomes = Vec::with_capacity(built.len());
        for (outcome, cache) in built {
            self.cache.absorb(cache);
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    /// Build every seed and report each to `observer` in seed order.
    ///
    /// Shared-stream runs notify the observer as soon as each seed is done.
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need
    /// callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        log::info!(
            "building trees for {} seed(s) of {} individual(s) with {} ({} traversal{})",
            self.network.seeds.len(),
            self.network.len(),
            self.model.name(),
            self.traversal,
            if self.config.independent_streams { ", independent streams" } else { "" },
        );
        observer.on_run_start(&self.network);

        let mut summary = RunSummary::default();
        if self.config.independent_streams {
            for outcome in self.build_all()? {
                report(&self.network, &outcome, &mut summary, observer);
            }
        } else {
            let seeds = self.network.seeds.clone();
            for seed in seeds {
                let outcome = SeedOutcome { seed, tree: self.build_seed(seed)? };
                report(&self.network, &outcome, &mut summary, observer);
            }
        }

        log::info!(
            "built {} tree(s) with {} leaves and {} nodes; {} seed(s) had no samples",
            summary.trees,
            summary.leaves,
            summary.nodes,
            summary.empty,
        );
        observer.on_run_end(&summary);
        Ok(summary)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn check_seed(&self, seed: IndividualId) -> SimResult<()> {
        if seed.index() >= self.network.len() || !self.network.is_seed(seed) {
            return Err(SimError::NotASeed(seed));
        }
        if self.cache.is_processed(seed) {
            return Err(SimError::SeedAlreadyBuilt(seed));
        }
        Ok(())
    }

    /// Build every seed on its own stream with a private cache.
    fn build_independent(&self) -> SimResult<Vec<(SeedOutcome, ResultCache)>> {
        // Explicit field borrows so worker closures capture only shared data.
        let network   = &self.network;
        let model     = &self.model;
        let traversal = self.traversal;
        let seed      = self.config.seed;

        let build_stream = move |k: usize, id: IndividualId| -> SimResult<(SeedOutcome, ResultCache)> {
            let mut rng = SimRng::stream(seed, k as u64);
            let mut cache = ResultCache::new();
            let tree = build_seed_with(network, model, traversal, id, &mut rng, &mut cache)?;
            Ok((SeedOutcome { seed: id, tree }, cache))
        };

        #[cfg(not(feature = "parallel"))]
        {
            network
                .seeds
                .iter()
                .enumerate()
                .map(|(k, &id)| build_stream(k, id))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let work = || {
                network
                    .seeds
                    .par_iter()
                    .enumerate()
                    .map(|(k, &id)| build_stream(k, id))
                    .collect::<SimResult<Vec<_>>>()
            };

            match self.config.num_threads {
                Some(n) => rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::Config(format!("thread pool: {e}")))?
                    .install(work),
                None => work(),
            }
        }
    }
}

// ── Per-seed construction ─────────────────────────────────────────────────────

/// Build the tree of `seed` into a fresh arena, consuming `rng` and
/// recording every visited individual in `cache`.
fn build_seed_with<M: PopulationModel + ?Sized>(
    network:   &TransmissionNetwork,
    model:     &M,
    traversal: TraversalOrder,
    seed:      IndividualId,
    rng:       &mut SimRng,
    cache:     &mut ResultCache,
) -> SimResult<Option<SeedTree>> {
    let order = traversal.visit_order(network, seed);
    let mut arena = PhyloArena::new();

    let root = {
        let mut merger = LineageMerger {
            network,
            model,
            rng,
            arena: &mut arena,
            cache,
        };
        // Both traversal orders end on the seed itself.
        let mut root = Contribution::Empty;
        for id in order {
            root = merger.merge(id)?;
        }
        root
    };

    match root {
        Contribution::Empty => {
            log::debug!("seed {} has no samples", network.name(seed));
            Ok(None)
        }
        Contribution::Lineage(root) => {
            let tree = SeedTree { seed, arena, root };
            log::debug!(
                "seed {}: {} leaves, {} nodes, root at {}",
                network.name(seed),
                tree.leaf_count(),
                tree.arena.len(),
                network.infection_time[seed.index()],
            );
            Ok(Some(tree))
        }
    }
}

fn report<O: SimObserver>(
    network:  &TransmissionNetwork,
    outcome:  &SeedOutcome,
    summary:  &mut RunSummary,
    observer: &mut O,
) {
    summary.seeds += 1;
    match &outcome.tree {
        Some(tree) => {
            summary.trees += 1;
            summary.nodes += tree.arena.len();
            summary.leaves += tree.leaf_count();
            observer.on_tree(network, tree);
        }
        None => {
            summary.empty += 1;
            observer.on_empty(network, outcome.seed);
        }
    }
}
