//! Task bookkeeping: registry entries, tickets, and response types.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError};
use serde::Serialize;

use weft_core::errors::{TaskError, TaskFailure};
use weft_core::traits::cancellation::Cancellable;
use weft_core::types::collections::FxHashMap;
use weft_core::types::task::{TaskId, TaskKind, TaskStatus};
use weft_core::CancellationToken;

use weft_analysis::pipeline::{DependencyReport, FileReport, MetricsReport};

/// Typed success payload of a finished task.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TaskOutput {
    Dependencies(DependencyReport),
    Metrics(MetricsReport),
    File(FileReport),
}

impl TaskOutput {
    /// Unwrap a dependency report; `None` for other task kinds.
    pub fn into_dependencies(self) -> Option<DependencyReport> {
        match self {
            TaskOutput::Dependencies(report) => Some(report),
            _ => None,
        }
    }

    /// Unwrap a metrics report; `None` for other task kinds.
    pub fn into_metrics(self) -> Option<MetricsReport> {
        match self {
            TaskOutput::Metrics(report) => Some(report),
            _ => None,
        }
    }

    /// Unwrap a single-file report; `None` for other task kinds.
    pub fn into_file(self) -> Option<FileReport> {
        match self {
            TaskOutput::File(report) => Some(report),
            _ => None,
        }
    }
}

/// Boundary response envelope: `SUCCESS`, `ERROR`, or the one-time
/// unsolicited `READY` the worker emits at startup.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskResponse {
    Success { id: TaskId, data: Box<TaskOutput> },
    Error { id: TaskId, error: TaskFailure },
    Ready,
}

impl TaskResponse {
    /// Project a task outcome into the wire envelope.
    pub fn from_result(id: TaskId, result: &Result<TaskOutput, TaskError>) -> Self {
        match result {
            Ok(output) => TaskResponse::Success {
                id,
                data: Box::new(output.clone()),
            },
            Err(err) => TaskResponse::Error {
                id,
                error: TaskFailure::from(err),
            },
        }
    }
}

/// Last known status and coarse percentage for a live task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaskProgress {
    pub id: TaskId,
    pub kind: TaskKind,
    pub status: TaskStatus,
    pub percentage: u8,
    pub elapsed_ms: u64,
}

/// Registry entry for a live task. Removed on every terminal
/// transition, which is what bounds the registry's memory.
#[derive(Debug)]
pub(crate) struct TaskEntry {
    pub kind: TaskKind,
    pub status: TaskStatus,
    pub percentage: u8,
    pub submitted_at: Instant,
    pub cancel: CancellationToken,
}

/// Shared task registry. The single piece of cross-task mutable state
/// in the engine.
pub(crate) type Registry = Arc<Mutex<FxHashMap<TaskId, TaskEntry>>>;

pub(crate) fn remove_entry(registry: &Registry, id: TaskId) -> Option<TaskEntry> {
    registry.lock().ok().and_then(|mut reg| reg.remove(&id))
}

/// Handle to one submitted task.
///
/// Dropping the ticket without waiting discards the eventual result;
/// the task itself still runs to completion on the worker.
#[derive(Debug)]
pub struct TaskTicket {
    pub id: TaskId,
    pub(crate) receiver: Receiver<Result<TaskOutput, TaskError>>,
    pub(crate) registry: Registry,
    pub(crate) default_timeout: Duration,
}

impl TaskTicket {
    /// Wait for the task using the engine's default timeout.
    pub fn wait(self) -> Result<TaskOutput, TaskError> {
        let timeout = self.default_timeout;
        self.wait_timeout(timeout)
    }

    /// Wait with an explicit deadline.
    ///
    /// On expiry the task resolves as [`TaskError::Timeout`] and its
    /// bookkeeping is freed. The underlying work is not interrupted;
    /// a result arriving after the deadline is discarded with the
    /// ticket.
    pub fn wait_timeout(self, timeout: Duration) -> Result<TaskOutput, TaskError> {
        match self.receiver.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => {
                if let Some(entry) = remove_entry(&self.registry, self.id) {
                    // Make the worker drop the late result instead of
                    // treating it as a delivery.
                    entry.cancel.cancel();
                }
                tracing::warn!(id = %self.id, timeout_ms = timeout.as_millis() as u64, "task timed out");
                Err(TaskError::Timeout {
                    waited_ms: timeout.as_millis() as u64,
                })
            }
            Err(RecvTimeoutError::Disconnected) => Err(TaskError::WorkerGone),
        }
    }

    /// Wire-envelope variant of [`wait_timeout`](Self::wait_timeout).
    pub fn wait_response(self, timeout: Duration) -> TaskResponse {
        let id = self.id;
        let result = self.wait_timeout(timeout);
        TaskResponse::from_result(id, &result)
    }
}
