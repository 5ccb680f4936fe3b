//! `ct-network`: the transmission forest the coalescent runs along.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`network`]  | `TransmissionNetwork` (SoA), `NetworkBuilder`             |
//! | [`loader`]   | `load_network_tsv` and reader variants                    |
//! | [`schedule`] | `TraversalOrder`, `post_order`, `reverse_index_order`     |
//! | [`error`]    | `NetworkError`, `NetworkResult<T>`                        |
//!
//! # Identity invariant
//!
//! Individuals receive ids in order of first appearance as an infectee.
//! An infector must already be known when it infects someone, so every
//! infector's id is strictly smaller than its infectees' ids.  Visiting ids
//! in decreasing order therefore always visits infectees before infectors.

pub mod error;
pub mod loader;
pub mod network;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use loader::{load_network_reader, load_network_tsv, load_samples_reader};
pub use network::{NetworkBuilder, TransmissionNetwork};
pub use schedule::{TraversalOrder, post_order, reverse_index_order, reverse_index_order_all};
