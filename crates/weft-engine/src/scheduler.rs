//! AnalysisEngine: the uniform task boundary.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Instant;

use crossbeam_channel::{bounded, Sender, TrySendError};

use weft_core::config::WeftConfig;
use weft_core::constants::PROGRESS_STARTED;
use weft_core::errors::TaskError;
use weft_core::events::types::{TaskCancelledEvent, TaskSubmittedEvent};
use weft_core::traits::cancellation::Cancellable;
use weft_core::types::collections::FxHashMap;
use weft_core::types::task::{TaskId, TaskKind, TaskPayload, TaskStatus};
use weft_core::{CancellationToken, EventDispatcher, WeftEventHandler};

use crate::task::{Registry, TaskEntry, TaskProgress, TaskTicket};
use crate::worker::{self, Command, Job};

/// Options for constructing an engine.
#[derive(Default)]
pub struct EngineOptions {
    /// Resolved configuration. Defaults apply when absent.
    pub config: WeftConfig,
    /// Event handlers, registered before the worker starts.
    pub handlers: Vec<Arc<dyn WeftEventHandler>>,
}

/// The analysis engine: submit, await, observe, cancel.
///
/// One instance owns one background worker and one queue; ordering is
/// guaranteed only within this instance's own queue. When the worker is
/// disabled or cannot start, every submission runs synchronously on
/// the caller's thread through the same algorithmic core.
pub struct AnalysisEngine {
    config: WeftConfig,
    dispatcher: Arc<EventDispatcher>,
    registry: Registry,
    queue: Option<Sender<Command>>,
    worker: Option<JoinHandle<()>>,
    ready: Arc<AtomicBool>,
    next_id: AtomicU64,
}

impl AnalysisEngine {
    /// Engine with default configuration and no event handlers.
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    /// Engine with explicit options.
    pub fn with_options(options: EngineOptions) -> Self {
        let EngineOptions { config, handlers } = options;

        let mut dispatcher = EventDispatcher::new();
        for handler in handlers {
            dispatcher.register(handler);
        }
        let dispatcher = Arc::new(dispatcher);

        let registry: Registry = Arc::new(Mutex::new(FxHashMap::default()));
        let ready = Arc::new(AtomicBool::new(false));

        let mut queue = None;
        let mut worker = None;
        if config.engine.effective_background() {
            let (tx, rx) = bounded(config.engine.effective_queue_capacity());
            match worker::spawn(
                rx,
                registry.clone(),
                dispatcher.clone(),
                config.clone(),
                ready.clone(),
            ) {
                Ok(handle) => {
                    queue = Some(tx);
                    worker = Some(handle);
                }
                Err(err) => {
                    tracing::warn!(%err, "worker thread unavailable, using synchronous fallback");
                }
            }
        }

        Self {
            config,
            dispatcher,
            registry,
            queue,
            worker,
            ready,
            next_id: AtomicU64::new(1),
        }
    }

    /// Whether the background worker has signalled readiness. Tasks
    /// submitted earlier are not lost; they queue until the worker
    /// drains them.
    pub fn is_worker_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    /// Submit a task.
    ///
    /// Non-blocking on the background path; on the synchronous fallback
    /// the work happens right here and the returned ticket resolves
    /// immediately. The payload shape must match the task kind.
    pub fn submit(&self, kind: TaskKind, payload: TaskPayload) -> Result<TaskTicket, TaskError> {
        if !payload.matches(kind) {
            return Err(TaskError::PayloadMismatch { kind: kind.name() });
        }

        let id = TaskId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let cancel = CancellationToken::new();
        let (reply_tx, reply_rx) = bounded(1);

        if let Ok(mut reg) = self.registry.lock() {
            reg.insert(
                id,
                TaskEntry {
                    kind,
                    status: TaskStatus::Pending,
                    percentage: PROGRESS_STARTED,
                    submitted_at: Instant::now(),
                    cancel: cancel.clone(),
                },
            );
        }

        let queued = self.queue.is_some();
        self.dispatcher
            .emit_task_submitted(&TaskSubmittedEvent { id, kind, queued });
        tracing::debug!(%id, %kind, queued, "task submitted");

        let job = Job {
            id,
            kind,
            payload,
            cancel,
            reply: reply_tx,
        };

        match &self.queue {
            Some(queue) => match queue.try_send(Command::Run(Box::new(job))) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    crate::task::remove_entry(&self.registry, id);
                    return Err(TaskError::QueueFull);
                }
                Err(TrySendError::Disconnected(_)) => {
                    crate::task::remove_entry(&self.registry, id);
                    return Err(TaskError::WorkerGone);
                }
            },
            None => {
                // Synchronous fallback: same core, caller's thread.
                worker::run_job(job, &self.registry, &self.dispatcher, &self.config.analysis);
            }
        }

        Ok(TaskTicket {
            id,
            receiver: reply_rx,
            registry: self.registry.clone(),
            default_timeout: self.config.engine.effective_timeout(),
        })
    }

    /// Last known progress for a task: 0 while queued, stage
    /// checkpoints while running. `None` for unknown ids and for tasks
    /// whose bookkeeping has been freed by a terminal transition.
    pub fn progress(&self, id: TaskId) -> Option<TaskProgress> {
        let registry = self.registry.lock().ok()?;
        registry.get(&id).map(|entry| TaskProgress {
            id,
            kind: entry.kind,
            status: entry.status,
            percentage: entry.percentage,
            elapsed_ms: entry.submitted_at.elapsed().as_millis() as u64,
        })
    }

    /// Best-effort cancellation.
    ///
    /// Marks the task cancelled and frees its bookkeeping; the eventual
    /// result is discarded. Returns false for unknown or already
    /// finished ids (a no-op, not an error). Work already running on
    /// the worker is not interrupted, and a synchronous fallback task
    /// has always finished by the time its ticket exists.
    pub fn cancel(&self, id: TaskId) -> bool {
        match crate::task::remove_entry(&self.registry, id) {
            Some(entry) => {
                entry.cancel.cancel();
                self.dispatcher
                    .emit_task_cancelled(&TaskCancelledEvent { id });
                tracing::debug!(%id, "task cancelled");
                true
            }
            None => false,
        }
    }

    /// Number of tasks currently tracked by the registry.
    pub fn live_tasks(&self) -> usize {
        self.registry.lock().map(|reg| reg.len()).unwrap_or(0)
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AnalysisEngine {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.take() {
            let _ = queue.send(Command::Shutdown);
        }
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}
