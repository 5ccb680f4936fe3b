//! Runtime model selection.

use crate::{
    ConstantSize, ExponentialGrowth, InfectionBound, ModelError, ModelResult,
    PopulationModel, TransmissionBound,
};

/// Which population model a run uses, with its parameters.
///
/// Exactly one model is chosen per run.  With the `serde` feature the enum
/// reads from JSON as e.g. `{"model": "constant", "size": 1.0}`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "model", rename_all = "snake_case"))]
pub enum ModelConfig {
    /// Constant effective population size `size`.
    Constant { size: f64 },

    /// Effective population size `initial_size` growing at `growth_rate`.
    ExpGrowth { initial_size: f64, growth_rate: f64 },

    /// Coalesce at the latest admissible moment.
    TransmissionBound,

    /// Coalesce at the earliest admissible moment.
    InfectionBound,
}

impl ModelConfig {
    /// Reject parameters no model can use.
    pub fn validate(&self) -> ModelResult<()> {
        match *self {
            ModelConfig::Constant { size } => non_negative("effective population size", size),
            ModelConfig::ExpGrowth { initial_size, growth_rate } => {
                non_negative("initial effective population size", initial_size)?;
                if !growth_rate.is_finite() {
                    return Err(ModelError::InvalidParameter {
                        parameter: "effective population growth rate",
                        value:     growth_rate,
                        reason:    "must be finite",
                    });
                }
                Ok(())
            }
            ModelConfig::TransmissionBound | ModelConfig::InfectionBound => Ok(()),
        }
    }

    /// Validate and construct the strategy object.
    pub fn build(&self) -> ModelResult<Box<dyn PopulationModel>> {
        self.validate()?;
        Ok(match *self {
            ModelConfig::Constant { size } => Box::new(ConstantSize::new(size)),
            ModelConfig::ExpGrowth { initial_size, growth_rate } => {
                Box::new(ExponentialGrowth::new(initial_size, growth_rate))
            }
            ModelConfig::TransmissionBound => Box::new(TransmissionBound),
            ModelConfig::InfectionBound => Box::new(InfectionBound),
        })
    }

    /// Banner text, e.g. `"constant effective population size"`.
    pub fn describe(&self) -> &'static str {
        match self {
            ModelConfig::Constant { .. } => ConstantSize::new(1.0).name(),
            ModelConfig::ExpGrowth { .. } => ExponentialGrowth::new(1.0, 0.0).name(),
            ModelConfig::TransmissionBound => TransmissionBound.name(),
            ModelConfig::InfectionBound => InfectionBound.name(),
        }
    }
}

fn non_negative(parameter: &'static str, value: f64) -> ModelResult<()> {
    if !value.is_finite() {
        return Err(ModelError::InvalidParameter { parameter, value, reason: "must be finite" });
    }
    if value < 0.0 {
        return Err(ModelError::InvalidParameter { parameter, value, reason: "must not be negative" });
    }
    Ok(())
}
