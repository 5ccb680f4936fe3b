//! `ct-sim`: builds one time-calibrated phylogeny per transmission seed.
//!
//! # Per-seed loop
//!
//! ```text
//! for seed in network.seeds:
//!   ① Order:  TraversalOrder::visit_order(seed): infectees before infectors.
//!   ② Merge:  for each individual p in that order, LineageMerger::merge(p):
//!                leaves for p's samples + cached contributions of p's
//!                infectees, coalesced backward in time down to p's
//!                infection time, capped by a transmission marker.
//!   ③ Result: the seed's cached contribution is the root (or "empty").
//! ```
//!
//! # Reproducibility
//!
//! By default one `SimRng` is consumed in traversal order across all seeds,
//! so a fixed seed and traversal order give bit-identical trees.  Setting
//! `SimConfig::independent_streams` gives each seed its own stream instead;
//! results then no longer match the shared-stream run but no longer depend
//! on processing order either, which is what allows the `parallel` feature
//! to build seeds concurrently.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `parallel` | Builds independent-stream seeds on Rayon's thread pool.     |
//! | `fx-hash`  | FxHash for the result cache and the network name index.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ct_core::SimConfig;
//! use ct_model::ConstantSize;
//! use ct_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::with_seed(42), network, ConstantSize::new(1.0))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod cache;
pub mod error;
pub mod merge;
pub mod observer;
pub mod sim;
pub mod tree;


pub use builder::SimBuilder;
pub use cache::{Contribution, ResultCache};
pub use error::{SimError, SimResult};
pub use merge::LineageMerger;
pub use observer::{NoopObserver, RunSummary, SimObserver};
pub use sim::{SeedOutcome, Sim};
pub use tree::SeedTree;
