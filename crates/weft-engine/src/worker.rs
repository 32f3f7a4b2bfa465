//! Background worker: owns the task queue and runs the shared
//! analysis core, one task at a time, in submission order.

use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender};

use weft_core::config::{AnalysisConfig, WeftConfig};
use weft_core::constants::{
    PROGRESS_COMPLETE, PROGRESS_CYCLES_DONE, PROGRESS_EXTRACTED, PROGRESS_GRAPH_BUILT,
    PROGRESS_METRICS_DONE,
};
use weft_core::errors::TaskError;
use weft_core::events::types::*;
use weft_core::traits::cancellation::Cancellable;
use weft_core::types::task::{TaskId, TaskKind, TaskPayload, TaskStatus};
use weft_core::{CancellationToken, EventDispatcher, WeftErrorCode};

use weft_analysis::pipeline::{self, Stage};

use crate::task::{remove_entry, Registry, TaskOutput};

/// One queued unit of work.
pub(crate) struct Job {
    pub id: TaskId,
    pub kind: TaskKind,
    pub payload: TaskPayload,
    pub cancel: CancellationToken,
    pub reply: Sender<Result<TaskOutput, TaskError>>,
}

/// Commands accepted by the worker loop.
pub(crate) enum Command {
    Run(Box<Job>),
    Shutdown,
}

/// Spawn the worker thread. It signals readiness once, unsolicited,
/// before draining the queue, then processes commands until shutdown
/// or queue disconnection.
pub(crate) fn spawn(
    queue: Receiver<Command>,
    registry: Registry,
    dispatcher: Arc<EventDispatcher>,
    config: WeftConfig,
    ready: Arc<AtomicBool>,
) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("weft-worker".to_string())
        .spawn(move || {
            ready.store(true, Ordering::SeqCst);
            dispatcher.emit_worker_ready(&WorkerReadyEvent {
                queue_capacity: config.engine.effective_queue_capacity(),
            });
            tracing::info!("analysis worker ready");

            while let Ok(command) = queue.recv() {
                match command {
                    Command::Shutdown => break,
                    Command::Run(job) => {
                        run_job(*job, &registry, &dispatcher, &config.analysis);
                    }
                }
            }
            tracing::debug!("analysis worker stopped");
        })
}

/// Run one job to completion and deliver its outcome.
///
/// Shared by the worker thread and the synchronous fallback, so both
/// paths have identical lifecycle semantics: cancellation check before
/// dispatch, staged progress, panic isolation, registry cleanup on
/// every terminal transition.
pub(crate) fn run_job(
    job: Job,
    registry: &Registry,
    dispatcher: &EventDispatcher,
    config: &AnalysisConfig,
) {
    let Job {
        id,
        kind,
        payload,
        cancel,
        reply,
    } = job;

    if cancel.is_cancelled() {
        tracing::debug!(%id, "task cancelled before dispatch");
        remove_entry(registry, id);
        let _ = reply.send(Err(TaskError::Cancelled));
        return;
    }

    let started = Instant::now();
    if let Ok(mut reg) = registry.lock() {
        if let Some(entry) = reg.get_mut(&id) {
            entry.status = TaskStatus::Running;
        }
    }
    dispatcher.emit_task_started(&TaskStartedEvent { id, kind });

    let mut observe = |stage: Stage| {
        let percentage = stage_progress(stage);
        if let Ok(mut reg) = registry.lock() {
            if let Some(entry) = reg.get_mut(&id) {
                entry.percentage = percentage;
            }
        }
        dispatcher.emit_task_progress(&TaskProgressEvent {
            id,
            stage: stage.name(),
            percentage,
        });
    };

    // The task boundary: any stage error or panic becomes a typed
    // failure here and never crosses into another task.
    let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
        execute_task(kind, &payload, config, &mut observe)
    }))
    .unwrap_or_else(|panic| {
        Err(TaskError::Panicked {
            stage: "pipeline",
            message: panic_message(panic),
        })
    });

    remove_entry(registry, id);

    if cancel.is_cancelled() {
        // Cancelled (or timed out) mid-flight: discard the computed
        // result instead of delivering it.
        tracing::warn!(%id, "discarding result of cancelled task");
        dispatcher.emit_error(&ErrorEvent {
            message: format!("late result for {id} discarded"),
            error_code: "CANCELLED".to_string(),
        });
        let _ = reply.send(Err(TaskError::Cancelled));
        return;
    }

    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            dispatcher.emit_task_progress(&TaskProgressEvent {
                id,
                stage: "complete",
                percentage: PROGRESS_COMPLETE,
            });
            dispatcher.emit_task_completed(&TaskCompletedEvent {
                id,
                kind,
                duration_ms,
            });
        }
        Err(err) => {
            tracing::error!(%id, %err, "task failed");
            dispatcher.emit_task_failed(&TaskFailedEvent {
                id,
                kind,
                error_code: err.error_code(),
                message: err.to_string(),
            });
        }
    }
    let _ = reply.send(result);
}

/// Map a task kind and payload onto the pure analysis core.
/// Adding a task kind means adding an arm here, nothing else.
fn execute_task(
    kind: TaskKind,
    payload: &TaskPayload,
    config: &AnalysisConfig,
    observe: &mut dyn FnMut(Stage),
) -> Result<TaskOutput, TaskError> {
    match (kind, payload) {
        (TaskKind::AnalyzeDependencies, TaskPayload::Files { files }) => {
            pipeline::analyze_files_observed(files, config, observe)
                .map(TaskOutput::Dependencies)
        }
        (TaskKind::CalculateMetrics, TaskPayload::Snapshot { nodes, edges }) => {
            pipeline::calculate_metrics(nodes, edges, config).map(TaskOutput::Metrics)
        }
        (TaskKind::AnalyzeFile, TaskPayload::File { file }) => {
            Ok(TaskOutput::File(pipeline::analyze_single_file(file)))
        }
        (kind, _) => Err(TaskError::PayloadMismatch { kind: kind.name() }),
    }
}

fn stage_progress(stage: Stage) -> u8 {
    match stage {
        Stage::Extract => PROGRESS_EXTRACTED,
        Stage::Graph => PROGRESS_GRAPH_BUILT,
        Stage::Cycles => PROGRESS_CYCLES_DONE,
        Stage::Metrics => PROGRESS_METRICS_DONE,
    }
}

fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
