//! JSON run configuration and seed resolution.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use ct_model::ModelConfig;
use serde::{Deserialize, Serialize};

/// Environment variable consulted when `--seed` is absent.
pub const SEED_ENV: &str = "COATRAN_RNG_SEED";

/// Contents of a `--config` file.
///
/// ```json
/// {"model": "exp_growth", "initial_size": 1.0, "growth_rate": 0.5, "seed": 7}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(flatten)]
    pub model: ModelConfig,

    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub independent_streams: Option<bool>,
}

impl RunConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("parsing run configuration {}", path.display()))
    }
}

impl From<ModelConfig> for RunConfig {
    fn from(model: ModelConfig) -> Self {
        Self { model, seed: None, independent_streams: None }
    }
}

/// Pick the run's seed: an explicit seed, else a non-zero integer in
/// `env_value`, else the wall clock in nanoseconds.
pub fn resolve_seed(explicit: Option<u64>, env_value: Option<&str>) -> u64 {
    if let Some(seed) = explicit {
        return seed;
    }
    if let Some(seed) = env_value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|&s| s != 0)
    {
        return seed;
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}
