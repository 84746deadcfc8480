//! Workload configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use workload_core::{Error, Result};

/// Where the raw numeric sample comes from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    /// A named column of a CSV file; blank and non-numeric fields are dropped
    Csv { path: PathBuf, column: String },
    /// Independent uniform draws over `[low, high)`
    Uniform { size: usize, low: f64, high: f64 },
}

/// Optional domain crop applied before resizing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CropBounds {
    pub min: f64,
    pub max: f64,
}

/// Full description of one workload generation run
///
/// Deserializable from TOML, e.g.:
///
/// ```toml
/// name = "uniform-1m"
/// size = 1000000
/// bins = 100
/// selectivities = [0.1, 1.0, 10.0]
///
/// [source]
/// kind = "uniform"
/// size = 100000
/// low = 0.0
/// high = 1000000.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkloadConfig {
    /// Label used in artifact file names
    pub name: String,
    /// Raw sample source
    pub source: SourceConfig,
    /// Target dataset cardinality; `-1` keeps the source cardinality
    #[serde(default = "default_size")]
    pub size: i64,
    /// Histogram bin count for resampling and endpoint placement
    #[serde(default = "default_bins")]
    pub bins: usize,
    /// Optional domain crop applied before resizing
    #[serde(default)]
    pub crop: Option<CropBounds>,
    /// Selectivities as percentages of dataset cardinality
    pub selectivities: Vec<f64>,
    /// Queries per (selectivity, placement mode) batch
    #[serde(default = "default_batch_size")]
    pub queries_per_batch: usize,
    /// Seed for the run's random source
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_size() -> i64 {
    -1
}

fn default_bins() -> usize {
    100
}

fn default_batch_size() -> usize {
    100
}

fn default_seed() -> u64 {
    123_456
}

impl WorkloadConfig {
    /// Load a configuration from a TOML file
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)
            .map_err(|e| Error::InvalidParameter(format!("invalid workload config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Target size with the `-1` sentinel mapped away
    pub fn target_size(&self) -> Option<usize> {
        if self.size < 0 {
            None
        } else {
            Some(self.size as usize)
        }
    }

    /// Check parameter ranges that do not depend on the data
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::InvalidParameter(
                "workload name must not be empty".to_string(),
            ));
        }
        if self.bins == 0 {
            return Err(Error::InvalidParameter(
                "bin count must be at least 1".to_string(),
            ));
        }
        if self.size == 0 {
            return Err(Error::InvalidParameter(
                "target size must be positive, or -1 to keep the source size".to_string(),
            ));
        }
        if self.queries_per_batch == 0 {
            return Err(Error::InvalidParameter(
                "queries per batch must be at least 1".to_string(),
            ));
        }
        if self.selectivities.is_empty() {
            return Err(Error::InvalidParameter(
                "at least one selectivity is required".to_string(),
            ));
        }
        for &s in &self.selectivities {
            if !s.is_finite() || s <= 0.0 || s > 100.0 {
                return Err(Error::invalid_selectivity(s));
            }
        }
        if let Some(crop) = self.crop {
            if crop.min >= crop.max {
                return Err(Error::InvalidParameter(format!(
                    "crop bounds must satisfy min < max, got [{}, {}]",
                    crop.min, crop.max
                )));
            }
        }
        Ok(())
    }
}
