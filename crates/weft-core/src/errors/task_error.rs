//! Task boundary errors and their serializable projection.

use serde::{Deserialize, Serialize};

use super::error_code::{self, WeftErrorCode};
use super::{CycleError, ExtractError, GraphError, MetricsError};

/// Errors surfaced through the task boundary.
/// Aggregates stage errors via `From` conversions; callers only ever
/// see a typed success or one of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TaskError {
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),

    #[error("cycle detection failed: {0}")]
    Cycle(#[from] CycleError),

    #[error("metrics computation failed: {0}")]
    Metrics(#[from] MetricsError),

    #[error("task timed out after {waited_ms}ms")]
    Timeout { waited_ms: u64 },

    #[error("task cancelled")]
    Cancelled,

    #[error("payload does not match task kind {kind}")]
    PayloadMismatch { kind: &'static str },

    #[error("worker queue is full")]
    QueueFull,

    #[error("worker is no longer running")]
    WorkerGone,

    #[error("stage {stage} panicked: {message}")]
    Panicked {
        stage: &'static str,
        message: String,
    },
}

impl TaskError {
    /// The pipeline stage this error is attributed to, when known.
    pub fn stage(&self) -> Option<&'static str> {
        match self {
            Self::Extract(_) => Some("extract"),
            Self::Graph(_) => Some("graph"),
            Self::Cycle(_) => Some("cycles"),
            Self::Metrics(_) => Some("metrics"),
            Self::Panicked { stage, .. } => Some(stage),
            _ => None,
        }
    }
}

impl WeftErrorCode for TaskError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Extract(e) => e.error_code(),
            Self::Graph(e) => e.error_code(),
            Self::Cycle(e) => e.error_code(),
            Self::Metrics(e) => e.error_code(),
            Self::Timeout { .. } => error_code::TASK_TIMEOUT,
            Self::Cancelled => error_code::CANCELLED,
            Self::PayloadMismatch { .. } => error_code::PAYLOAD_MISMATCH,
            Self::QueueFull => error_code::QUEUE_FULL,
            Self::WorkerGone => error_code::WORKER_GONE,
            Self::Panicked { .. } => error_code::TASK_PANICKED,
        }
    }
}

/// Serializable projection of a [`TaskError`] for boundary consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskFailure {
    /// Stable error code (see [`error_code`]).
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Pipeline stage hint, when the failure is attributable to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
}

impl From<&TaskError> for TaskFailure {
    fn from(err: &TaskError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
            stage: err.stage().map(str::to_string),
        }
    }
}
