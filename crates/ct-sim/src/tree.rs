//! A finished per-seed phylogeny.

use ct_core::{IndividualId, NodeIndex};
use ct_phylo::{NewickStyle, PhyloArena, PhyloResult, to_newick};

/// The phylogeny of one transmission seed's subtree.
///
/// `root` is the seed's transmission marker, so the root time equals the
/// seed's infection time.  Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct SeedTree {
    pub seed:  IndividualId,
    pub arena: PhyloArena,
    pub root:  NodeIndex,
}

impl SeedTree {
    pub fn root_time(&self) -> PhyloResult<f64> {
        self.arena.time(self.root)
    }

    pub fn leaf_count(&self) -> usize {
        self.arena.leaf_count()
    }

    /// Render as a Newick line (terminated with `:ROOT_TIME;`).
    pub fn to_newick<S: AsRef<str>>(&self, names: &[S], style: NewickStyle) -> PhyloResult<String> {
        to_newick(&self.arena, self.root, names, style)
    }
}
