//! Arena node variants.

use ct_core::{IndividualId, NodeIndex};

/// One node of a sampled phylogeny.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PhyloNode {
    /// A sample taken from `owner` at `time`.
    Leaf { time: f64, owner: IndividualId },

    /// Two lineages merging into their common ancestor at `time`.
    Coalescence {
        time:  f64,
        left:  NodeIndex,
        right: NodeIndex,
    },

    /// The single surviving lineage of `individual`'s subtree, handed to its
    /// infector at `individual`'s infection `time`.
    Transmission {
        time:       f64,
        child:      NodeIndex,
        individual: IndividualId,
    },
}

/// Discriminant of a [`PhyloNode`], for tabular output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Leaf,
    Coalescence,
    Transmission,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Leaf => "leaf",
            NodeKind::Coalescence => "coalescence",
            NodeKind::Transmission => "transmission",
        }
    }
}

impl PhyloNode {
    #[inline]
    pub fn time(&self) -> f64 {
        match *self {
            PhyloNode::Leaf { time, .. }
            | PhyloNode::Coalescence { time, .. }
            | PhyloNode::Transmission { time, .. } => time,
        }
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        match self {
            PhyloNode::Leaf { .. } => NodeKind::Leaf,
            PhyloNode::Coalescence { .. } => NodeKind::Coalescence,
            PhyloNode::Transmission { .. } => NodeKind::Transmission,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, PhyloNode::Leaf { .. })
    }

    /// `(left, right)` children.  A transmission marker reports its single
    /// child on both sides; a leaf has none.
    #[inline]
    pub fn children(&self) -> Option<(NodeIndex, NodeIndex)> {
        match *self {
            PhyloNode::Leaf { .. } => None,
            PhyloNode::Coalescence { left, right, .. } => Some((left, right)),
            PhyloNode::Transmission { child, .. } => Some((child, child)),
        }
    }

    /// The individual a leaf was sampled from or a marker hands off.
    #[inline]
    pub fn individual(&self) -> Option<IndividualId> {
        match *self {
            PhyloNode::Leaf { owner, .. } => Some(owner),
            PhyloNode::Transmission { individual, .. } => Some(individual),
            PhyloNode::Coalescence { .. } => None,
        }
    }
}
