//! Structural metrics over graph snapshots.
//!
//! Pure functions of `(nodes, edges, cycles)`; nothing here mutates its
//! input or keeps state between calls. Node classification comes from
//! the caller; the engine never infers types.

pub mod graph;
pub mod node;
pub mod types;

pub use graph::compute_graph_metrics;
pub use node::compute_node_metrics;
pub use types::{Connections, GraphMetrics, NodeMetrics};
