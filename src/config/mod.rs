use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::{
    core::utils::{write_atomic, PathResolver},
    engine::price_simulator::{
        PriceAssumptions, DEFAULT_ASSUMED_DAILY_VOLUME, DEFAULT_WORKING_DAYS_PER_YEAR,
    },
    errors::LedgerError,
};

pub const DEFAULT_AVERAGE_UNIT_PRICE: f64 = 35.0;
pub const DEFAULT_RECORD_NAME: &str = "chair_ledger";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for LedgerError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => LedgerError::Io(io),
            other => LedgerError::Config(other.to_string()),
        }
    }
}

/// Pricing assumptions and storage naming.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Reference price of one unit (a cut) used to turn money into units.
    pub average_unit_price: f64,
    pub assumed_daily_volume: f64,
    pub working_days_per_year: f64,
    pub record_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            average_unit_price: DEFAULT_AVERAGE_UNIT_PRICE,
            assumed_daily_volume: DEFAULT_ASSUMED_DAILY_VOLUME,
            working_days_per_year: DEFAULT_WORKING_DAYS_PER_YEAR,
            record_name: DEFAULT_RECORD_NAME.into(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("average_unit_price", self.average_unit_price),
            ("assumed_daily_volume", self.assumed_daily_volume),
            ("working_days_per_year", self.working_days_per_year),
        ];
        for (key, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "`{key}` must be greater than zero (got {value})"
                )));
            }
        }
        if self.record_name.trim().is_empty() {
            return Err(ConfigError::Invalid("`record_name` cannot be empty".into()));
        }
        Ok(())
    }

    pub fn price_assumptions(&self) -> PriceAssumptions {
        PriceAssumptions {
            assumed_daily_volume: self.assumed_daily_volume,
            working_days_per_year: self.working_days_per_year,
        }
    }
}

/// Loads and persists [`Config`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::from_base(&PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self::from_base(&base)
    }

    fn from_base(base: &Path) -> Self {
        Self {
            path: PathResolver::config_file_in(base),
        }
    }

    /// Returns defaults when no file exists yet; a present file must parse and validate.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config =
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
