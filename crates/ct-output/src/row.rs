//! Plain data row types written by output backends.

use ct_network::TransmissionNetwork;
use ct_phylo::NodeKind;
use ct_sim::SeedTree;

/// One arena node of one seed's tree.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRow {
    /// Display name of the tree's seed.
    pub seed:       String,
    /// Arena index within the seed's tree.
    pub node:       u32,
    pub kind:       NodeKind,
    /// Child indices; a transmission marker repeats its single child.
    pub left:       Option<u32>,
    pub right:      Option<u32>,
    pub time:       f64,
    /// Sampled individual for a leaf, handed-off individual for a marker.
    pub individual: Option<String>,
}

/// Rows for every node of `tree`, in arena order.
pub fn node_rows(network: &TransmissionNetwork, tree: &SeedTree) -> Vec<NodeRow> {
    let seed = network.name(tree.seed);
    tree.arena
        .iter()
        .map(|(index, node)| {
            let children = node.children();
            NodeRow {
                seed:       seed.to_owned(),
                node:       index.0,
                kind:       node.kind(),
                left:       children.map(|(l, _)| l.0),
                right:      children.map(|(_, r)| r.0),
                time:       node.time(),
                individual: node
                    .individual()
                    .filter(|id| id.index() < network.len())
                    .map(|id| network.name(id).to_owned()),
            }
        })
        .collect()
}
