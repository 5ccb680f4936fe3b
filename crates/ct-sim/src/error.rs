use ct_core::IndividualId;
use ct_model::ModelError;
use ct_phylo::PhyloError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{infectee} (infected by {individual}) has samples but was not processed first")]
    OrderViolation {
        individual: IndividualId,
        infectee:   IndividualId,
    },

    #[error("negative current time {time} while merging lineages of {individual}")]
    NegativeTime { individual: IndividualId, time: f64 },

    #[error("population model returned waiting time {delta} for {lineages} lineages of {individual}")]
    InvalidWaitingTime {
        individual: IndividualId,
        lineages:   usize,
        delta:      f64,
    },

    #[error("{0} is not a transmission seed")]
    NotASeed(IndividualId),

    #[error("seed {0} has already been built in this run")]
    SeedAlreadyBuilt(IndividualId),

    #[error("phylogeny error: {0}")]
    Phylo(#[from] PhyloError),

    #[error("population model error: {0}")]
    Model(#[from] ModelError),
}

pub type SimResult<T> = Result<T, SimError>;
