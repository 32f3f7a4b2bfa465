//! Top-level Weft configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, EngineConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`WEFT_*`)
/// 2. Project config (`weft.toml` in the project root)
/// 3. User config (`~/.weft/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WeftConfig {
    pub engine: EngineConfig,
    pub analysis: AnalysisConfig,
}

impl WeftConfig {
    /// Load configuration with layered resolution (see type docs).
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Parse errors here are fatal,
        // a missing file is not.
        if let Some(user_config_path) = user_config_path() {
            if user_config_path.exists() {
                merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        // Project config.
        let project_config_path = root.join("weft.toml");
        if project_config_path.exists() {
            merge_toml_file(&mut config, &project_config_path)?;
        }

        // Highest priority: environment variables.
        apply_env_overrides(&mut config);

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(timeout) = self.engine.default_timeout_ms {
            if timeout == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "engine.default_timeout_ms".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(capacity) = self.engine.queue_capacity {
            if capacity == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "engine.queue_capacity".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(multiplier) = self.analysis.hub_multiplier {
            if multiplier <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.hub_multiplier".to_string(),
                    message: "must be greater than 0.0".to_string(),
                });
            }
        }
        if let Some(cap) = self.analysis.node_size_cap {
            if cap <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.node_size_cap".to_string(),
                    message: "must be greater than 0.0".to_string(),
                });
            }
        }
        if let Some(ratio) = self.analysis.bridge_ratio {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.bridge_ratio".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Merge a TOML file into the existing config.
/// Unknown keys are silently ignored (forward-compatible).
fn merge_toml_file(config: &mut WeftConfig, path: &Path) -> Result<(), ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.display().to_string(),
    })?;

    let file_config: WeftConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    merge(config, &file_config);
    Ok(())
}

/// Merge `other` into `base`; `other` wins wherever it has a value.
fn merge(base: &mut WeftConfig, other: &WeftConfig) {
    // Engine
    if other.engine.default_timeout_ms.is_some() {
        base.engine.default_timeout_ms = other.engine.default_timeout_ms;
    }
    if other.engine.queue_capacity.is_some() {
        base.engine.queue_capacity = other.engine.queue_capacity;
    }
    if other.engine.background.is_some() {
        base.engine.background = other.engine.background;
    }

    // Analysis
    if other.analysis.hub_multiplier.is_some() {
        base.analysis.hub_multiplier = other.analysis.hub_multiplier;
    }
    if other.analysis.node_size_cap.is_some() {
        base.analysis.node_size_cap = other.analysis.node_size_cap;
    }
    if other.analysis.bridge_ratio.is_some() {
        base.analysis.bridge_ratio = other.analysis.bridge_ratio;
    }
}

/// Apply environment variable overrides.
/// Pattern: `WEFT_ENGINE_TIMEOUT_MS`, `WEFT_ANALYSIS_HUB_MULTIPLIER`, etc.
fn apply_env_overrides(config: &mut WeftConfig) {
    if let Ok(val) = std::env::var("WEFT_ENGINE_TIMEOUT_MS") {
        if let Ok(v) = val.parse::<u64>() {
            config.engine.default_timeout_ms = Some(v);
        }
    }
    if let Ok(val) = std::env::var("WEFT_ENGINE_QUEUE_CAPACITY") {
        if let Ok(v) = val.parse::<usize>() {
            config.engine.queue_capacity = Some(v);
        }
    }
    if let Ok(val) = std::env::var("WEFT_ENGINE_BACKGROUND") {
        if let Ok(v) = val.parse::<bool>() {
            config.engine.background = Some(v);
        }
    }
    if let Ok(val) = std::env::var("WEFT_ANALYSIS_HUB_MULTIPLIER") {
        if let Ok(v) = val.parse::<f64>() {
            config.analysis.hub_multiplier = Some(v);
        }
    }
    if let Ok(val) = std::env::var("WEFT_ANALYSIS_NODE_SIZE_CAP") {
        if let Ok(v) = val.parse::<f64>() {
            config.analysis.node_size_cap = Some(v);
        }
    }
    if let Ok(val) = std::env::var("WEFT_ANALYSIS_BRIDGE_RATIO") {
        if let Ok(v) = val.parse::<f64>() {
            config.analysis.bridge_ratio = Some(v);
        }
    }
}

/// Returns the user config path: `~/.weft/config.toml`.
fn user_config_path() -> Option<std::path::PathBuf> {
    home_dir().map(|h| h.join(".weft").join("config.toml"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
