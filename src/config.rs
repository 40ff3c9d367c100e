// Configuration loading and parsing (begbot.toml).

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::model::WeightMap;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// File structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire begbot.toml file.
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    valuation: ValuationSection,
    #[serde(default)]
    ui: UiSection,
}

#[derive(Debug, Clone, Deserialize)]
struct ValuationSection {
    /// Valuation types that are globally enabled as aggregation input.
    enabled_types: Vec<u32>,
    /// Trust weights keyed by valuation type id. TOML keys are strings;
    /// they are parsed to type ids during validation.
    #[serde(default)]
    weights: HashMap<String, f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct UiSection {
    #[serde(default = "default_spinner_delay_ms")]
    spinner_delay_ms: u64,
}

impl Default for UiSection {
    fn default() -> Self {
        UiSection {
            spinner_delay_ms: default_spinner_delay_ms(),
        }
    }
}

fn default_spinner_delay_ms() -> u64 {
    200
}

// ---------------------------------------------------------------------------
// Assembled Config
// ---------------------------------------------------------------------------

/// The public config assembled from the begbot.toml sections.
#[derive(Debug, Clone)]
pub struct Config {
    pub enabled_types: Vec<u32>,
    pub weights: WeightMap,
    pub spinner_delay: Duration,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from the given begbot.toml path.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })?;
    let file: ConfigFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate(&file)?;

    let weights = parse_weights(&file.valuation.weights)?;

    Ok(Config {
        enabled_types: file.valuation.enabled_types,
        weights,
        spinner_delay: Duration::from_millis(file.ui.spinner_delay_ms),
    })
}

/// Parse the string-keyed TOML weight table into a type-id-keyed map.
fn parse_weights(raw: &HashMap<String, f64>) -> Result<WeightMap, ConfigError> {
    let mut weights = WeightMap::new();
    for (key, &value) in raw {
        let type_id: u32 = key.parse().map_err(|_| ConfigError::ValidationError {
            field: format!("valuation.weights.{key}"),
            message: "key must be a valuation type id (non-negative integer)".into(),
        })?;
        weights.insert(type_id, value);
    }
    Ok(weights)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(file: &ConfigFile) -> Result<(), ConfigError> {
    // Enabled types must be unique; a duplicate would double-count a source.
    let mut seen = HashSet::new();
    for &type_id in &file.valuation.enabled_types {
        if !seen.insert(type_id) {
            return Err(ConfigError::ValidationError {
                field: "valuation.enabled_types".into(),
                message: format!("duplicate type id {type_id}"),
            });
        }
    }

    // Weights must be non-negative and finite. Zero is allowed: an
    // all-zero-weight configuration means "no confident estimate".
    for (key, &value) in &file.valuation.weights {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::ValidationError {
                field: format!("valuation.weights.{key}"),
                message: format!("must be a non-negative finite number, got {value}"),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
