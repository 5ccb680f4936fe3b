//! Append-only node storage.

use ct_core::{IndividualId, NodeIndex};

use crate::{PhyloError, PhyloNode, PhyloResult};

/// Append-only sequence of [`PhyloNode`]s indexed by [`NodeIndex`].
///
/// Children are always created before their parents, so a node's index is
/// strictly greater than its children's.  Every push checks that the new
/// node's time is non-negative and not later than any child's.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhyloArena {
    nodes: Vec<PhyloNode>,
}

impl PhyloArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { nodes: Vec::with_capacity(capacity) }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> &[PhyloNode] {
        &self.nodes
    }

    /// `(index, node)` pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &PhyloNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeIndex(i as u32), node))
    }

    #[inline]
    pub fn get(&self, index: NodeIndex) -> PhyloResult<&PhyloNode> {
        self.nodes.get(index.index()).ok_or(PhyloError::UnknownNode(index))
    }

    #[inline]
    pub fn time(&self, index: NodeIndex) -> PhyloResult<f64> {
        self.get(index).map(PhyloNode::time)
    }

    /// Number of leaves (samples) in the arena.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    // ── Appends ───────────────────────────────────────────────────────────

    pub fn push_leaf(&mut self, time: f64, owner: IndividualId) -> PhyloResult<NodeIndex> {
        self.push(PhyloNode::Leaf { time, owner })
    }

    pub fn push_coalescence(
        &mut self,
        time:  f64,
        left:  NodeIndex,
        right: NodeIndex,
    ) -> PhyloResult<NodeIndex> {
        self.push(PhyloNode::Coalescence { time, left, right })
    }

    pub fn push_transmission(
        &mut self,
        time:       f64,
        child:      NodeIndex,
        individual: IndividualId,
    ) -> PhyloResult<NodeIndex> {
        self.push(PhyloNode::Transmission { time, child, individual })
    }

    fn push(&mut self, node: PhyloNode) -> PhyloResult<NodeIndex> {
        let index = NodeIndex::from_index(self.nodes.len()).map_err(|_| PhyloError::Full)?;
        if node.time() < 0.0 {
            return Err(PhyloError::NegativeTime { node: index, time: node.time() });
        }
        if let Some((left, right)) = node.children() {
            self.check_child(index, node.time(), left)?;
            self.check_child(index, node.time(), right)?;
        }
        self.nodes.push(node);
        Ok(index)
    }

    fn check_child(&self, node: NodeIndex, time: f64, child: NodeIndex) -> PhyloResult<()> {
        let child_time = self.time(child)?;
        // Written so that a NaN on either side fails.
        if !(time <= child_time) {
            return Err(PhyloError::NonMonotonic { node, time, child, child_time });
        }
        Ok(())
    }

}
