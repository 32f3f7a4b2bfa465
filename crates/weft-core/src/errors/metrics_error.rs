//! Metrics computation errors.

use super::error_code::{self, WeftErrorCode};

/// Errors from the metrics calculator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    /// A snapshot edge references a node id that is not in the
    /// snapshot. Snapshots derived from a dependency graph cannot
    /// trigger this; caller-supplied snapshots can.
    #[error("snapshot edge references missing node {id}")]
    DanglingEdge { id: String },
}

impl WeftErrorCode for MetricsError {
    fn error_code(&self) -> &'static str {
        error_code::METRICS_ERROR
    }
}
