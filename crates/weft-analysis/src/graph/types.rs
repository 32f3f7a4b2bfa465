//! Dependency graph types.

use serde::{Deserialize, Serialize};

use weft_core::types::collections::FxHashMap;
use weft_core::types::source::DependencyEdge;

/// Directed dependency graph over canonical file paths.
///
/// `nodes` is the insertion order of the analyzed file list, so every
/// traversal downstream is reproducible for a given input. Only
/// internal edges (target present in the analyzed set) live in the
/// adjacency; external and unresolved references are kept aside in
/// `externals`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencyGraph {
    /// Canonical node paths in first-seen order.
    pub nodes: Vec<String>,
    /// Internal adjacency: canonical path to outgoing edges.
    pub edges: FxHashMap<String, Vec<DependencyEdge>>,
    /// Edges whose target is outside the analyzed set.
    pub externals: Vec<DependencyEdge>,
}

impl DependencyGraph {
    /// Number of analyzed files.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of internal edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Outgoing internal edges of a node; empty for unknown paths.
    pub fn outgoing(&self, path: &str) -> &[DependencyEdge] {
        self.edges.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a canonical path is part of the analyzed set.
    pub fn contains(&self, path: &str) -> bool {
        self.edges.contains_key(path)
    }
}
