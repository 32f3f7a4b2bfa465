//! # weft-engine
//!
//! Task scheduler for the Weft analysis engine: a uniform asynchronous
//! request/response boundary over the pure analysis core, backed by a
//! background worker thread with a synchronous in-process fallback.
//!
//! One [`AnalysisEngine`] instance owns one worker and one queue; tasks
//! submitted to the same engine complete in submission order. The only
//! cross-task shared state is the task registry, and every terminal
//! transition (completion, error, cancel, timeout) removes its entry.

pub mod scheduler;
pub mod task;

mod worker;

pub use scheduler::{AnalysisEngine, EngineOptions};
pub use task::{TaskOutput, TaskProgress, TaskResponse, TaskTicket};
