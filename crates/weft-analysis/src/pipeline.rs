//! Full analysis pipeline and result aggregation.
//!
//! The single algorithmic core shared by the background worker and the
//! synchronous fallback: extraction, graph construction, cycle
//! detection, metrics, composed here with a stage observer for coarse
//! progress reporting. Everything is recomputed per call; no state
//! survives between runs.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use weft_core::config::AnalysisConfig;
use weft_core::errors::TaskError;
use weft_core::types::collections::{FxHashMap, FxHashSet};
use weft_core::types::snapshot::{GraphEdge, GraphNode, NodeKind};
use weft_core::types::source::{DependencyEdge, FileRecord};

use crate::cycles::{self, Adjacency, Cycle};
use crate::extract::{self, canonicalize};
use crate::graph::{self, DependencyGraph};
use crate::metrics::{self, GraphMetrics, NodeMetrics};

/// Pipeline stages, reported through the progress observer as each one
/// completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Extract,
    Graph,
    Cycles,
    Metrics,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Extract => "extract",
            Stage::Graph => "graph",
            Stage::Cycles => "cycles",
            Stage::Metrics => "metrics",
        }
    }
}

/// Aggregated result of a dependency analysis task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyReport {
    pub graph: DependencyGraph,
    pub cycles: Vec<Cycle>,
    pub metrics: GraphMetrics,
    pub node_metrics: Vec<NodeMetrics>,
    /// Wall time of the analysis stages in milliseconds.
    pub analysis_ms: u64,
}

/// Result of a metrics-only task over a caller-supplied snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub metrics: GraphMetrics,
    pub node_metrics: Vec<NodeMetrics>,
    pub analysis_ms: u64,
}

/// Result of a single-file extraction task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,
    pub edges: Vec<DependencyEdge>,
    pub analysis_ms: u64,
}

/// Run the full dependency analysis over a file set.
pub fn analyze_files(
    files: &[FileRecord],
    config: &AnalysisConfig,
) -> Result<DependencyReport, TaskError> {
    analyze_files_observed(files, config, &mut |_| {})
}

/// Same as [`analyze_files`], with a stage observer invoked after each
/// stage completes. Both execution paths of the engine go through here,
/// which is what keeps their semantics identical.
pub fn analyze_files_observed(
    files: &[FileRecord],
    config: &AnalysisConfig,
    observe: &mut dyn FnMut(Stage),
) -> Result<DependencyReport, TaskError> {
    let started = Instant::now();

    let extracted = extract::extract_all(files);
    observe(Stage::Extract);

    let graph = graph::build_graph(files, &extracted)?;
    observe(Stage::Graph);

    let cycles = cycles::detect_graph_cycles(&graph)?;
    observe(Stage::Cycles);

    let (nodes, edges) = snapshot_of(&graph, files);
    let node_metrics =
        metrics::compute_node_metrics(&nodes, &edges, config.effective_node_size_cap());
    let graph_metrics = metrics::compute_graph_metrics(&nodes, &edges, &cycles, config)?;
    observe(Stage::Metrics);

    let analysis_ms = started.elapsed().as_millis() as u64;
    tracing::debug!(
        files = graph.node_count(),
        edges = graph.edge_count(),
        cycles = cycles.len(),
        analysis_ms,
        "dependency analysis complete"
    );

    Ok(DependencyReport {
        graph,
        cycles,
        metrics: graph_metrics,
        node_metrics,
        analysis_ms,
    })
}

/// Compute metrics over a caller-supplied snapshot.
///
/// Cycles are detected over the snapshot's own edges so the composite
/// complexity score means the same thing here as it does for a
/// dependency analysis.
pub fn calculate_metrics(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    config: &AnalysisConfig,
) -> Result<MetricsReport, TaskError> {
    let started = Instant::now();

    let cycles = cycles::detect_cycles(&snapshot_adjacency(nodes, edges))?;
    let node_metrics =
        metrics::compute_node_metrics(nodes, edges, config.effective_node_size_cap());
    let graph_metrics = metrics::compute_graph_metrics(nodes, edges, &cycles, config)?;

    Ok(MetricsReport {
        metrics: graph_metrics,
        node_metrics,
        analysis_ms: started.elapsed().as_millis() as u64,
    })
}

/// Extract the imports of a single file. Infallible: extraction never
/// rejects a file.
pub fn analyze_single_file(file: &FileRecord) -> FileReport {
    let started = Instant::now();
    let edges = extract::extract_file(file);
    FileReport {
        path: canonicalize(&file.path),
        edges,
        analysis_ms: started.elapsed().as_millis() as u64,
    }
}

/// Project a dependency graph into a metrics snapshot. Every file is a
/// `File` node; `dependencies` is its internal fan-out.
fn snapshot_of(graph: &DependencyGraph, files: &[FileRecord]) -> (Vec<GraphNode>, Vec<GraphEdge>) {
    let mut content_chars: FxHashMap<String, usize> = FxHashMap::default();
    for record in files {
        // Last record wins for duplicates, same as the graph builder.
        content_chars.insert(canonicalize(&record.path), record.content.chars().count());
    }

    let nodes = graph
        .nodes
        .iter()
        .map(|path| GraphNode {
            id: path.clone(),
            kind: NodeKind::File,
            content_chars: content_chars.get(path).copied().unwrap_or(0),
            parameters: 0,
            methods: 0,
            children: 0,
            dependencies: graph.outgoing(path).len(),
        })
        .collect();

    let edges = graph
        .nodes
        .iter()
        .flat_map(|path| {
            graph
                .outgoing(path)
                .iter()
                .map(|edge| GraphEdge::new(edge.from.clone(), edge.target().to_string()))
        })
        .collect();

    (nodes, edges)
}

/// Adjacency view of a caller snapshot for cycle detection. Edges to
/// unknown ids are skipped; metrics validation rejects them later with
/// a typed error.
fn snapshot_adjacency(nodes: &[GraphNode], edges: &[GraphEdge]) -> Adjacency {
    let known: FxHashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let mut adjacency = Adjacency::default();
    for node in nodes {
        adjacency.order.push(node.id.clone());
        adjacency.targets.insert(node.id.clone(), Default::default());
    }
    for edge in edges {
        if !known.contains(edge.target.as_str()) {
            continue;
        }
        if let Some(targets) = adjacency.targets.get_mut(edge.source.as_str()) {
            targets.push(edge.target.clone());
        }
    }
    adjacency
}
