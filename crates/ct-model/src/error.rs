use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("invalid {parameter} {value}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value:     f64,
        reason:    &'static str,
    },
}

pub type ModelResult<T> = Result<T, ModelError>;
