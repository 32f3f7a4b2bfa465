//! Task scheduler configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_QUEUE_CAPACITY, DEFAULT_TIMEOUT_MS};

/// Configuration for the task scheduler.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Default task timeout in milliseconds. Default: 30_000.
    pub default_timeout_ms: Option<u64>,
    /// Worker queue capacity. Default: 256.
    pub queue_capacity: Option<usize>,
    /// Run tasks on the background worker thread. Default: true.
    /// When false, every submission runs synchronously on the caller's
    /// thread through the same algorithmic core.
    pub background: Option<bool>,
}

impl EngineConfig {
    /// Returns the effective default timeout.
    pub fn effective_timeout(&self) -> Duration {
        Duration::from_millis(self.default_timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS))
    }

    /// Returns the effective queue capacity, defaulting to 256.
    pub fn effective_queue_capacity(&self) -> usize {
        self.queue_capacity.unwrap_or(DEFAULT_QUEUE_CAPACITY)
    }

    /// Returns whether the background worker is enabled, defaulting to
    /// true.
    pub fn effective_background(&self) -> bool {
        self.background.unwrap_or(true)
    }
}
