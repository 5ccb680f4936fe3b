use ct_core::{IndividualId, NodeIndex};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PhyloError {
    #[error("{0} is not in the arena")]
    UnknownNode(NodeIndex),

    #[error("leaf {node} is owned by {owner}, which has no display name")]
    UnknownOwner { node: NodeIndex, owner: IndividualId },

    #[error("encountered negative time {time} at {node}")]
    NegativeTime { node: NodeIndex, time: f64 },

    #[error("{node} at time {time} is later than its child {child} at time {child_time}")]
    NonMonotonic {
        node:       NodeIndex,
        time:       f64,
        child:      NodeIndex,
        child_time: f64,
    },

    #[error("arena is full")]
    Full,
}

pub type PhyloResult<T> = Result<T, PhyloError>;
