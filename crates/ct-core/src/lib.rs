//! `ct-core`: foundational types for the `coatran` coalescent simulator.
//!
//! This crate is a dependency of every other `ct-*` crate.  It has no `ct-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`ids`]       | `IndividualId`, `NodeIndex`                               |
//! | [`tolerance`] | `ZERO_RATE`, `ZERO_TIME`, `ZERO_SIZE`                     |
//! | [`sampling`]  | inverse-CDF transforms for (truncated) exponentials       |
//! | [`rng`]       | `SimRng`: the shared, seedable uniform source            |
//! | [`config`]    | `SimConfig`                                               |
//! | [`error`]     | `CtError`, `CtResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and `SimConfig`.     |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod sampling;
pub mod tolerance;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CtError, CtResult};
pub use ids::{IndividualId, NodeIndex};
pub use rng::SimRng;
pub use sampling::{exponential_inverse_cdf, truncated_exponential_inverse_cdf};
