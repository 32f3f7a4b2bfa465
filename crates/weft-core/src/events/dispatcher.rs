//! EventDispatcher: synchronous event dispatch with zero overhead when
//! no handlers are registered.

use std::sync::Arc;

use super::handler::WeftEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// When no handlers are registered, `emit` iterates an empty Vec.
/// A handler that panics is caught and logged; later handlers still
/// receive the event.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn WeftEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn WeftEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    fn emit<F: Fn(&dyn WeftEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::error!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    // ---- Worker ----
    pub fn emit_worker_ready(&self, event: &WorkerReadyEvent) {
        self.emit(|h| h.on_worker_ready(event));
    }

    // ---- Task Lifecycle ----
    pub fn emit_task_submitted(&self, event: &TaskSubmittedEvent) {
        self.emit(|h| h.on_task_submitted(event));
    }

    pub fn emit_task_started(&self, event: &TaskStartedEvent) {
        self.emit(|h| h.on_task_started(event));
    }

    pub fn emit_task_progress(&self, event: &TaskProgressEvent) {
        self.emit(|h| h.on_task_progress(event));
    }

    pub fn emit_task_completed(&self, event: &TaskCompletedEvent) {
        self.emit(|h| h.on_task_completed(event));
    }

    pub fn emit_task_failed(&self, event: &TaskFailedEvent) {
        self.emit(|h| h.on_task_failed(event));
    }

    pub fn emit_task_cancelled(&self, event: &TaskCancelledEvent) {
        self.emit(|h| h.on_task_cancelled(event));
    }

    // ---- Errors ----
    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit(|h| h.on_error(event));
    }
}
