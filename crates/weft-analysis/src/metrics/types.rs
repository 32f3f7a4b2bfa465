//! Metric output types.

use serde::{Deserialize, Serialize};

/// Directed connection counts for one node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connections {
    pub incoming: usize,
    pub outgoing: usize,
    pub total: usize,
}

/// Per-node structural metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeMetrics {
    pub id: String,
    /// Estimated render/footprint size: base plus capped weighted
    /// contributions from content length, parameters, and children.
    pub size_estimate: f64,
    /// Kind-weighted complexity, rounded to one decimal.
    pub complexity_score: f64,
    pub connections: Connections,
}

/// Graph-level structural metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphMetrics {
    pub total_files: usize,
    pub total_dependencies: usize,
    pub circular_dependency_count: usize,
    /// Longest dependency chain, counted in nodes.
    pub max_depth: usize,
    pub avg_dependencies_per_file: f64,
    /// Composite score: file count, fan-out, cycles, and depth, each
    /// weighted.
    pub complexity_score: f64,
    /// Edges over possible undirected pairs; 0 for graphs of size <= 1.
    pub density: f64,
    /// Connected components of the undirected view.
    pub connected_components: usize,
    /// Nodes touching no edge in either direction.
    pub isolated_nodes: usize,
    /// Nodes whose connection count exceeds the hub threshold.
    pub hub_nodes: usize,
    /// Coarse bridge estimate (a fixed fraction of the edge count).
    pub bridge_edges: usize,
    /// Fraction of edges joining nodes of the same kind.
    pub cohesion: f64,
    /// Fraction of edges joining nodes of different kinds.
    pub coupling: f64,
}
