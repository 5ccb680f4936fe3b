use ct_core::CtError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("network parse error: {0}")]
    Parse(String),

    #[error("infection from person not previously infected: {0}")]
    UnknownInfector(String),

    #[error("\"None\" cannot get infected")]
    NoneInfected,

    #[error("reinfection event: {0}")]
    Reinfection(String),

    #[error("\"None\" cannot be sampled")]
    NoneSampled,

    #[error("sample time of person not in transmission network: {0}")]
    UnknownSampled(String),

    #[error("non-finite time {time} for {name}")]
    NonFiniteTime { name: String, time: f64 },

    #[error("{name} was sampled at {sample_time}, before its infection at {infection_time}")]
    SampleBeforeInfection {
        name:           String,
        sample_time:    f64,
        infection_time: f64,
    },

    #[error("{infectee} was infected at {infectee_time}, before its infector {infector} at {infector_time}")]
    InfectedBeforeInfector {
        infector:      String,
        infector_time: f64,
        infectee:      String,
        infectee_time: f64,
    },

    #[error(transparent)]
    Core(#[from] CtError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
