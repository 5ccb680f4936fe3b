//! Error types for ct-output.

use ct_phylo::PhyloError;
use thiserror::Error;

/// Errors that can occur when writing phylogenies.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot render tree: {0}")]
    Phylo(#[from] PhyloError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
