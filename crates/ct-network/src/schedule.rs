//! Dependency-ordered traversal of the transmission forest.
//!
//! The merge engine needs every infectee's contribution before it can
//! process the infector, so individuals must be visited children-first.
//! Both strategies below materialize the visiting order with an explicit
//! stack; chains of any length are safe.
//!
//! The two orders are equally valid but consume random draws in different
//! sequences, so a given seed reproduces only under the same order.

use std::fmt;
use std::str::FromStr;

use ct_core::IndividualId;

use crate::TransmissionNetwork;

/// Strategy for ordering one seed's subtree.
///
/// Any children-first order is valid, but the merge engine draws random
/// numbers in visiting order, so switching order changes the trees a given
/// RNG seed produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Post-order walk; infectees in recorded order.  Equivalent to
    /// processing each individual after recursing into its infectees.
    #[default]
    PostOrder,

    /// Subtree members by strictly decreasing id.
    ReverseIndex,
}

impl TraversalOrder {
    /// Visiting order for the subtree rooted at `seed`.
    pub fn visit_order(self, network: &TransmissionNetwork, seed: IndividualId) -> Vec<IndividualId> {
        match self {
            TraversalOrder::PostOrder => post_order(network, seed),
            TraversalOrder::ReverseIndex => reverse_index_order(network, seed),
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TraversalOrder::PostOrder => "post-order",
            TraversalOrder::ReverseIndex => "reverse-index",
        })
    }
}

impl FromStr for TraversalOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "post-order" => Ok(TraversalOrder::PostOrder),
            "reverse-index" => Ok(TraversalOrder::ReverseIndex),
            other => Err(format!(
                "invalid traversal order {other:?}: expected \"post-order\" or \"reverse-index\""
            )),
        }
    }
}

/// Iterative post-order of the subtree rooted at `seed`.
pub fn post_order(network: &TransmissionNetwork, seed: IndividualId) -> Vec<IndividualId> {
    let mut order = Vec::new();
    // (individual, position of the next infectee to descend into)
    let mut stack: Vec<(IndividualId, usize)> = vec![(seed, 0)];

    while let Some(top) = stack.last_mut() {
        let (id, next) = *top;
        match network.infected[id.index()].get(next) {
            Some(&child) => {
                top.1 += 1;
                stack.push((child, 0));
            }
            None => {
                stack.pop();
                order.push(id);
            }
        }
    }
    order
}

/// Members of the subtree rooted at `seed`, by strictly decreasing id.
pub fn reverse_index_order(network: &TransmissionNetwork, seed: IndividualId) -> Vec<IndividualId> {
    let mut members = Vec::new();
    let mut stack = vec![seed];
    while let Some(id) = stack.pop() {
        members.push(id);
        stack.extend(network.infected[id.index()].iter().copied());
    }
    members.sort_unstable_by(|a, b| b.cmp(a));
    members
}

/// Every individual in the network, by strictly decreasing id.
pub fn reverse_index_order_all(network: &TransmissionNetwork) -> Vec<IndividualId> {
    (0..network.len() as u32).rev().map(IndividualId).collect()
}
