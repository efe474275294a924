//! Strategy configuration files.
//!
//! ```toml
//! strategy = "ma_rsi_crossover"
//!
//! [params]
//! ma_short = 5
//! ma_long = 20
//! rsi_oversold = 25.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{StrategyError, StrategyParams};

/// Which strategy to run and with which parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Registered strategy name (see `available_strategies`).
    pub strategy: String,
    #[serde(default)]
    pub params: StrategyParams,
}

impl StrategyConfig {
    pub fn new(strategy: impl Into<String>, params: StrategyParams) -> Self {
        Self {
            strategy: strategy.into(),
            params,
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, StrategyError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StrategyError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| StrategyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Deterministic identity of this configuration (BLAKE3 hex digest).
    ///
    /// Canonical serialization: params are a `BTreeMap`, so key order is
    /// stable, and integers are widened to floats so `30` and `30.0` hash
    /// alike.
    pub fn fingerprint(&self) -> Result<String, StrategyError> {
        let canonical = serde_json::to_string(&StrategyConfig {
            strategy: self.strategy.clone(),
            params: self.params.normalized(),
        })?;
        Ok(blake3::hash(canonical.as_bytes()).to_hex().to_string())
    }
}
