//! Analysis configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BRIDGE_RATIO, DEFAULT_HUB_MULTIPLIER, DEFAULT_NODE_SIZE_CAP,
};

/// Configuration for the analysis core.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Hub threshold multiplier over the average connection count.
    /// Default: 2.0.
    pub hub_multiplier: Option<f64>,
    /// Ceiling for node size estimates. Default: 1000.0.
    pub node_size_cap: Option<f64>,
    /// Bridge edge estimate as a fraction of total edges.
    /// Default: 0.10.
    pub bridge_ratio: Option<f64>,
}

impl AnalysisConfig {
    /// Returns the effective hub multiplier, defaulting to 2.0.
    pub fn effective_hub_multiplier(&self) -> f64 {
        self.hub_multiplier.unwrap_or(DEFAULT_HUB_MULTIPLIER)
    }

    /// Returns the effective node size cap, defaulting to 1000.0.
    pub fn effective_node_size_cap(&self) -> f64 {
        self.node_size_cap.unwrap_or(DEFAULT_NODE_SIZE_CAP)
    }

    /// Returns the effective bridge ratio, defaulting to 0.10.
    pub fn effective_bridge_ratio(&self) -> f64 {
        self.bridge_ratio.unwrap_or(DEFAULT_BRIDGE_RATIO)
    }
}
