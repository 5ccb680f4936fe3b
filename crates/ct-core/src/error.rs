//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `CtError` as one
//! variant where they surface core failures.

use thiserror::Error;

/// The error type for `ct-core`.
#[derive(Debug, Error)]
pub enum CtError {
    #[error("identifier {0} does not fit in 32 bits")]
    IdOverflow(usize),
}

/// Shorthand result type for `ct-core`.
pub type CtResult<T> = Result<T, CtError>;
