//! Task contract types for the worker boundary.

use serde::{Deserialize, Serialize};

use super::snapshot::{GraphEdge, GraphNode};
use super::source::FileRecord;

/// Unique task identifier, allocated per engine instance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "task-{}", self.0)
    }
}

/// The kind of work a task performs.
///
/// Adding a kind means adding a variant here and a dispatch arm in the
/// engine; the rest of the lifecycle machinery is kind-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskKind {
    /// Full pipeline over a file set: extract, graph, cycles, metrics.
    AnalyzeDependencies,
    /// Metrics over a caller-supplied node/edge snapshot.
    CalculateMetrics,
    /// Import extraction for a single file.
    AnalyzeFile,
}

impl TaskKind {
    /// Wire name of the kind, as consumers see it.
    pub fn name(&self) -> &'static str {
        match self {
            TaskKind::AnalyzeDependencies => "ANALYZE_DEPENDENCIES",
            TaskKind::CalculateMetrics => "CALCULATE_METRICS",
            TaskKind::AnalyzeFile => "ANALYZE_FILE",
        }
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Input payload of a task. Must match the task kind at submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPayload {
    /// File set for [`TaskKind::AnalyzeDependencies`].
    Files { files: Vec<FileRecord> },
    /// Node/edge snapshot for [`TaskKind::CalculateMetrics`].
    Snapshot {
        nodes: Vec<GraphNode>,
        edges: Vec<GraphEdge>,
    },
    /// Single file for [`TaskKind::AnalyzeFile`].
    File { file: FileRecord },
}

impl TaskPayload {
    /// Whether this payload shape is valid for the given kind.
    pub fn matches(&self, kind: TaskKind) -> bool {
        matches!(
            (kind, self),
            (TaskKind::AnalyzeDependencies, TaskPayload::Files { .. })
                | (TaskKind::CalculateMetrics, TaskPayload::Snapshot { .. })
                | (TaskKind::AnalyzeFile, TaskPayload::File { .. })
        )
    }
}

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Running,
    Completed,
    Error,
    Cancelled,
}

impl TaskStatus {
    /// Terminal states free their registry bookkeeping.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskStatus::Completed | TaskStatus::Error | TaskStatus::Cancelled
        )
    }
}
