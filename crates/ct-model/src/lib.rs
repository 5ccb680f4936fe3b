//! `ct-model`: population models that decide when lineages coalesce.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`model`]      | `PopulationModel` trait                                   |
//! | [`constant`]   | `ConstantSize`                                            |
//! | [`growth`]     | `ExponentialGrowth`                                       |
//! | [`bound`]      | `TransmissionBound`, `InfectionBound`                     |
//! | [`config`]     | `ModelConfig`: runtime selection of one of the above     |
//! | [`error`]      | `ModelError`, `ModelResult<T>`                            |
//!
//! # Time convention
//!
//! Times are absolute and decrease toward the root.  Every model answers in
//! terms of a non-negative *delta* measured backward from the current time
//! `now`: the next coalescence happens at `now − delta`.

pub mod bound;
pub mod config;
pub mod constant;
pub mod error;
pub mod growth;
pub mod model;

#[cfg(test)]
mod tests;

pub use bound::{InfectionBound, TransmissionBound};
pub use config::ModelConfig;
pub use constant::ConstantSize;
pub use error::{ModelError, ModelResult};
pub use growth::ExponentialGrowth;
pub use model::{PopulationModel, pair_count};
