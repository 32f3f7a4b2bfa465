//! Event payload types for the Weft task lifecycle.

use crate::types::task::{TaskId, TaskKind};

/// Payload for `on_worker_ready`. Emitted once per engine instance when
/// the background worker starts its loop.
#[derive(Debug, Clone)]
pub struct WorkerReadyEvent {
    pub queue_capacity: usize,
}

/// Payload for `on_task_submitted`.
#[derive(Debug, Clone)]
pub struct TaskSubmittedEvent {
    pub id: TaskId,
    pub kind: TaskKind,
    /// False when the task ran through the synchronous fallback.
    pub queued: bool,
}

/// Payload for `on_task_started`.
#[derive(Debug, Clone)]
pub struct TaskStartedEvent {
    pub id: TaskId,
    pub kind: TaskKind,
}

/// Payload for `on_task_progress`.
#[derive(Debug, Clone)]
pub struct TaskProgressEvent {
    pub id: TaskId,
    /// Name of the stage that just completed.
    pub stage: &'static str,
    pub percentage: u8,
}

/// Payload for `on_task_completed`.
#[derive(Debug, Clone)]
pub struct TaskCompletedEvent {
    pub id: TaskId,
    pub kind: TaskKind,
    pub duration_ms: u64,
}

/// Payload for `on_task_failed`.
#[derive(Debug, Clone)]
pub struct TaskFailedEvent {
    pub id: TaskId,
    pub kind: TaskKind,
    pub error_code: &'static str,
    pub message: String,
}

/// Payload for `on_task_cancelled`.
#[derive(Debug, Clone)]
pub struct TaskCancelledEvent {
    pub id: TaskId,
}

/// Payload for `on_error`: engine-level anomalies that are not tied to
/// a single task outcome (e.g., a late result being discarded).
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub message: String,
    pub error_code: String,
}
