//! Per-individual merge results.

use ct_core::{IndividualId, NodeIndex};

#[cfg(feature = "fx-hash")]
type CacheMap = rustc_hash::FxHashMap<IndividualId, Contribution>;
#[cfg(not(feature = "fx-hash"))]
type CacheMap = std::collections::HashMap<IndividualId, Contribution>;

/// What a processed individual hands to its infector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contribution {
    /// No sampled lineage anywhere in the individual's subtree.
    Empty,

    /// The transmission marker carrying the subtree's single lineage.
    Lineage(NodeIndex),
}

/// Maps each processed individual to its [`Contribution`].
///
/// Filled monotonically during a run; entries are never removed or
/// replaced.  An absent entry means "not processed yet".  Node indices
/// refer to the arena of the seed the individual belongs to.
#[derive(Clone, Debug, Default)]
pub struct ResultCache {
    entries: CacheMap,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, id: IndividualId) -> Option<Contribution> {
        self.entries.get(&id).copied()
    }

    #[inline]
    pub fn is_processed(&self, id: IndividualId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Record `id`'s result.  Each individual is recorded exactly once.
    #[inline]
    pub fn record(&mut self, id: IndividualId, contribution: Contribution) {
        let previous = self.entries.insert(id, contribution);
        debug_assert!(previous.is_none(), "{id} recorded twice");
    }

    /// Move every entry of `other` into `self`.
    pub fn absorb(&mut self, other: ResultCache) {
        for (id, contribution) in other.entries {
            self.record(id, contribution);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
