//! # weft-core
//!
//! Foundation crate for the Weft dependency analysis engine.
//! Defines shared types, the task contract, errors, config, events,
//! cancellation, and tracing setup. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::WeftConfig;
pub use errors::error_code::WeftErrorCode;
pub use errors::TaskError;
pub use events::dispatcher::EventDispatcher;
pub use events::handler::WeftEventHandler;
pub use traits::cancellation::CancellationToken;
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::task::{TaskId, TaskKind, TaskPayload, TaskStatus};
