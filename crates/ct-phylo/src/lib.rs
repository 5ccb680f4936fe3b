//! `ct-phylo`: the phylogeny arena and its Newick rendering.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`node`]   | `PhyloNode`, `NodeKind`                                    |
//! | [`arena`]  | `PhyloArena`: append-only node storage                    |
//! | [`newick`] | `write_newick`, `to_newick`, `NewickStyle`                 |
//! | [`error`]  | `PhyloError`, `PhyloResult<T>`                             |
//!
//! # Time convention
//!
//! Node times are absolute and decrease from the leaves (samples) toward
//! the root.  A parent's time never exceeds a child's, so every branch
//! length `time(child) − time(parent)` is non-negative.  The arena enforces
//! this on every push.

pub mod arena;
pub mod error;
pub mod newick;
pub mod node;


pub use arena::PhyloArena;
pub use error::{PhyloError, PhyloResult};
pub use newick::{NewickStyle, to_newick, write_newick};
pub use node::{NodeKind, PhyloNode};
