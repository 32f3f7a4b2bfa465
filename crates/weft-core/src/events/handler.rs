//! WeftEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing the task lifecycle.
///
/// All methods have no-op default implementations, so handlers only
/// need to override the events they care about. `Send + Sync` is
/// required because events fire from the worker thread as well as the
/// caller's thread.
pub trait WeftEventHandler: Send + Sync {
    // ---- Worker ----
    fn on_worker_ready(&self, _event: &WorkerReadyEvent) {}

    // ---- Task Lifecycle ----
    fn on_task_submitted(&self, _event: &TaskSubmittedEvent) {}
    fn on_task_started(&self, _event: &TaskStartedEvent) {}
    fn on_task_progress(&self, _event: &TaskProgressEvent) {}
    fn on_task_completed(&self, _event: &TaskCompletedEvent) {}
    fn on_task_failed(&self, _event: &TaskFailedEvent) {}
    fn on_task_cancelled(&self, _event: &TaskCancelledEvent) {}

    // ---- Errors ----
    fn on_error(&self, _event: &ErrorEvent) {}
}
