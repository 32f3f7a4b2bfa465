//! Shared data types for the Weft engine.

pub mod collections;
pub mod snapshot;
pub mod source;
pub mod task;

pub use snapshot::{GraphEdge, GraphNode, NodeKind};
pub use source::{DependencyEdge, EdgeKind, FileRecord};
pub use task::{TaskId, TaskKind, TaskPayload, TaskStatus};
