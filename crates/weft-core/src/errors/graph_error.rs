//! Dependency graph construction errors.

use super::error_code::{self, WeftErrorCode};

/// Errors from the dependency graph builder.
///
/// Duplicate input paths are not an error: the builder resolves them
/// last-write-wins. These variants cover inputs that are structurally
/// inconsistent rather than merely redundant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge claims to originate from a file that is not the record
    /// it was paired with. Indicates a caller-side pairing mistake.
    #[error("edge from {edge_from} paired with record {record_path}")]
    MismatchedSource {
        edge_from: String,
        record_path: String,
    },
}

impl WeftErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        error_code::GRAPH_ERROR
    }
}
