//! Dependency graph construction from extracted edges.

use rustc_hash::FxHashMap;

use weft_core::errors::GraphError;
use weft_core::types::source::{DependencyEdge, FileRecord};

use super::types::DependencyGraph;
use crate::extract::canonicalize;

/// Build the dependency graph for an analyzed file set.
///
/// `files` and `extracted` are paired by index (the extractor's output
/// order). Two phases, deterministic for a given input order: register
/// every canonical path, then route each edge either into the internal
/// adjacency or the external side list depending on target membership.
///
/// Duplicate input paths resolve last-write-wins: the later record's
/// edges replace the earlier ones entirely, and the node keeps its
/// original position in the insertion order.
pub fn build_graph(
    files: &[FileRecord],
    extracted: &[Vec<DependencyEdge>],
) -> Result<DependencyGraph, GraphError> {
    let mut graph = DependencyGraph::default();

    // Phase 1: register every node so membership checks in phase 2 see
    // the complete analyzed set regardless of file order.
    for record in files {
        let path = canonicalize(&record.path);
        if !graph.edges.contains_key(&path) {
            graph.edges.insert(path.clone(), Vec::new());
            graph.nodes.push(path);
        }
    }

    // Last-write-wins for duplicate paths: keep only the final pairing
    // of path to extracted edges before routing anything.
    let mut latest: FxHashMap<String, &[DependencyEdge]> = FxHashMap::default();
    for (record, edges) in files.iter().zip(extracted) {
        latest.insert(canonicalize(&record.path), edges.as_slice());
    }

    // Phase 2: route edges in node order.
    for path in &graph.nodes {
        let Some(edges) = latest.get(path) else {
            continue;
        };
        let mut internal = Vec::new();
        for edge in *edges {
            if edge.from != *path {
                return Err(GraphError::MismatchedSource {
                    edge_from: edge.from.clone(),
                    record_path: path.clone(),
                });
            }
            if graph.edges.contains_key(edge.target()) {
                internal.push(edge.clone());
            } else {
                graph.externals.push(edge.clone());
            }
        }
        if let Some(slot) = graph.edges.get_mut(path) {
            *slot = internal;
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        internal_edges = graph.edge_count(),
        external_edges = graph.externals.len(),
        "dependency graph built"
    );

    Ok(graph)
}
