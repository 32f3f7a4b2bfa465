//! Graph-level structural metrics.

use petgraph::graph::{NodeIndex, UnGraph};

use weft_core::config::AnalysisConfig;
use weft_core::constants::{
    COMPLEXITY_AVG_DEPS_WEIGHT, COMPLEXITY_CYCLE_WEIGHT, COMPLEXITY_DEPTH_WEIGHT,
    COMPLEXITY_FILE_WEIGHT,
};
use weft_core::errors::MetricsError;
use weft_core::types::collections::{FxHashMap, FxHashSet};
use weft_core::types::snapshot::{GraphEdge, GraphNode, NodeKind};

use crate::cycles::Cycle;

use super::types::GraphMetrics;

/// Compute all graph-level metrics for a snapshot.
///
/// Fully recomputed per call; the inputs are never mutated. Fails only
/// on snapshots whose edges reference nodes that are not part of the
/// snapshot.
pub fn compute_graph_metrics(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    cycles: &[Cycle],
    config: &AnalysisConfig,
) -> Result<GraphMetrics, MetricsError> {
    validate_edges(nodes, edges)?;

    let total_files = nodes.len();
    let total_dependencies = edges.len();
    let circular_dependency_count = cycles.len();

    // Undirected pair count; guard n <= 1 against dividing by zero.
    let density = if total_files > 1 {
        let pairs = (total_files * (total_files - 1)) / 2;
        total_dependencies as f64 / pairs as f64
    } else {
        0.0
    };

    let avg_dependencies_per_file = if total_files > 0 {
        total_dependencies as f64 / total_files as f64
    } else {
        0.0
    };

    let max_depth = longest_chain(nodes, edges);

    let complexity_score = COMPLEXITY_FILE_WEIGHT * total_files as f64
        + COMPLEXITY_AVG_DEPS_WEIGHT * avg_dependencies_per_file
        + COMPLEXITY_CYCLE_WEIGHT * circular_dependency_count as f64
        + COMPLEXITY_DEPTH_WEIGHT * max_depth as f64;

    let connected_components = component_count(nodes, edges);

    // Total degree per node, edges counted in both directions.
    let mut degree: FxHashMap<&str, usize> =
        nodes.iter().map(|n| (n.id.as_str(), 0)).collect();
    for edge in edges {
        if let Some(d) = degree.get_mut(edge.source.as_str()) {
            *d += 1;
        }
        if let Some(d) = degree.get_mut(edge.target.as_str()) {
            *d += 1;
        }
    }

    let isolated_nodes = degree.values().filter(|&&d| d == 0).count();

    let avg_connections = if total_files > 0 {
        degree.values().sum::<usize>() as f64 / total_files as f64
    } else {
        0.0
    };
    let hub_threshold = avg_connections * config.effective_hub_multiplier();
    let hub_nodes = degree
        .values()
        .filter(|&&d| d as f64 > hub_threshold)
        .count();

    let bridge_edges =
        (total_dependencies as f64 * config.effective_bridge_ratio()).floor() as usize;

    let (cohesion, coupling) = cohesion_coupling(nodes, edges);

    Ok(GraphMetrics {
        total_files,
        total_dependencies,
        circular_dependency_count,
        max_depth,
        avg_dependencies_per_file,
        complexity_score,
        density,
        connected_components,
        isolated_nodes,
        hub_nodes,
        bridge_edges,
        cohesion,
        coupling,
    })
}

fn validate_edges(nodes: &[GraphNode], edges: &[GraphEdge]) -> Result<(), MetricsError> {
    let known: FxHashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    for edge in edges {
        for id in [edge.source.as_str(), edge.target.as_str()] {
            if !known.contains(id) {
                return Err(MetricsError::DanglingEdge { id: id.to_string() });
            }
        }
    }
    Ok(())
}

/// Longest dependency chain, counted in nodes, via memoized DFS.
///
/// A node already on the current path contributes 0 on revisit, so the
/// recursion terminates on cyclic graphs and every chain stays simple.
fn longest_chain(nodes: &[GraphNode], edges: &[GraphEdge]) -> usize {
    let mut adjacency: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    for edge in edges {
        adjacency
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let mut memo: FxHashMap<&str, usize> = FxHashMap::default();
    let mut on_path: FxHashSet<&str> = FxHashSet::default();

    nodes
        .iter()
        .map(|n| chain_depth(n.id.as_str(), &adjacency, &mut memo, &mut on_path))
        .max()
        .unwrap_or(0)
}

fn chain_depth<'a>(
    node: &'a str,
    adjacency: &FxHashMap<&'a str, Vec<&'a str>>,
    memo: &mut FxHashMap<&'a str, usize>,
    on_path: &mut FxHashSet<&'a str>,
) -> usize {
    if on_path.contains(node) {
        return 0;
    }
    if let Some(&depth) = memo.get(node) {
        return depth;
    }

    on_path.insert(node);
    let deepest_child = adjacency
        .get(node)
        .into_iter()
        .flatten()
        .map(|&next| chain_depth(next, adjacency, memo, on_path))
        .max()
        .unwrap_or(0);
    on_path.remove(node);

    let depth = deepest_child + 1;
    memo.insert(node, depth);
    depth
}

/// Connected components of the undirected view. Edges are treated
/// bidirectionally for this computation only.
fn component_count(nodes: &[GraphNode], edges: &[GraphEdge]) -> usize {
    let mut graph: UnGraph<(), ()> = UnGraph::new_undirected();
    let mut index: FxHashMap<&str, NodeIndex> = FxHashMap::default();

    for node in nodes {
        index.insert(node.id.as_str(), graph.add_node(()));
    }
    for edge in edges {
        if let (Some(&a), Some(&b)) = (
            index.get(edge.source.as_str()),
            index.get(edge.target.as_str()),
        ) {
            graph.add_edge(a, b, ());
        }
    }

    petgraph::algo::connected_components(&graph)
}

/// Fraction of edges joining same-kind vs different-kind nodes.
/// Both are 0 for an edgeless snapshot.
fn cohesion_coupling(nodes: &[GraphNode], edges: &[GraphEdge]) -> (f64, f64) {
    if edges.is_empty() {
        return (0.0, 0.0);
    }

    let kind_of: FxHashMap<&str, NodeKind> =
        nodes.iter().map(|n| (n.id.as_str(), n.kind)).collect();

    let mut same = 0usize;
    for edge in edges {
        if let (Some(source), Some(target)) = (
            kind_of.get(edge.source.as_str()),
            kind_of.get(edge.target.as_str()),
        ) {
            if source == target {
                same += 1;
            }
        }
    }

    let total = edges.len() as f64;
    let cohesion = same as f64 / total;
    let coupling = (edges.len() - same) as f64 / total;
    (cohesion, coupling)
}
