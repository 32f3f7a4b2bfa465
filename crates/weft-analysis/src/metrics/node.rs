//! Per-node size and complexity estimates.

use weft_core::constants::NODE_SIZE_BASE;
use weft_core::types::collections::{FxHashMap, FxHashSet};
use weft_core::types::snapshot::{GraphEdge, GraphNode, NodeKind};

use super::types::{Connections, NodeMetrics};

/// Base complexity multiplier per node kind.
fn kind_weight(kind: NodeKind) -> f64 {
    match kind {
        NodeKind::Api => 3.0,
        NodeKind::Function => 4.0,
        NodeKind::Component => 3.0,
        NodeKind::Service => 5.0,
        NodeKind::Database => 4.0,
        NodeKind::File => 1.0,
        NodeKind::Constant => 1.0,
        NodeKind::Other => 2.0,
    }
}

/// Size estimate: base 100, plus 0.1 per content character, 10 per
/// parameter, and 20 per child, capped at `cap`.
pub fn size_estimate(node: &GraphNode, cap: f64) -> f64 {
    let size = NODE_SIZE_BASE
        + node.content_chars as f64 * 0.1
        + node.parameters as f64 * 10.0
        + node.children as f64 * 20.0;
    size.min(cap)
}

/// Complexity score: kind-weighted base adjusted by 0.5 per parameter,
/// 1 per method, and 0.3 per dependency, rounded to one decimal.
pub fn complexity_score(node: &GraphNode) -> f64 {
    let complexity = kind_weight(node.kind)
        + node.parameters as f64 * 0.5
        + node.methods as f64
        + node.dependencies as f64 * 0.3;
    (complexity * 10.0).round() / 10.0
}

/// Compute node metrics for every snapshot node, with connection
/// counts taken from the edge list. Edges referencing ids outside the
/// snapshot do not contribute.
pub fn compute_node_metrics(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    size_cap: f64,
) -> Vec<NodeMetrics> {
    let known: FxHashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let mut incoming: FxHashMap<&str, usize> = FxHashMap::default();
    let mut outgoing: FxHashMap<&str, usize> = FxHashMap::default();

    for edge in edges {
        if known.contains(edge.source.as_str()) && known.contains(edge.target.as_str()) {
            *outgoing.entry(edge.source.as_str()).or_default() += 1;
            *incoming.entry(edge.target.as_str()).or_default() += 1;
        }
    }

    nodes
        .iter()
        .map(|node| {
            let inbound = incoming.get(node.id.as_str()).copied().unwrap_or(0);
            let outbound = outgoing.get(node.id.as_str()).copied().unwrap_or(0);
            NodeMetrics {
                id: node.id.clone(),
                size_estimate: size_estimate(node, size_cap),
                complexity_score: complexity_score(node),
                connections: Connections {
                    incoming: inbound,
                    outgoing: outbound,
                    total: inbound + outbound,
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, kind: NodeKind) -> GraphNode {
        GraphNode::new(id, kind)
    }

    #[test]
    fn bare_node_has_base_size() {
        let n = node("a", NodeKind::File);
        assert_eq!(size_estimate(&n, 1000.0), 100.0);
    }

    #[test]
    fn size_contributions_are_weighted() {
        let mut n = node("a", NodeKind::Function);
        n.content_chars = 200; // +20
        n.parameters = 3; // +30
        n.children = 2; // +40
        assert_eq!(size_estimate(&n, 1000.0), 190.0);
    }

    #[test]
    fn size_is_capped() {
        let mut n = node("a", NodeKind::File);
        n.content_chars = 1_000_000;
        assert_eq!(size_estimate(&n, 1000.0), 1000.0);
    }

    #[test]
    fn complexity_uses_kind_weight() {
        assert_eq!(complexity_score(&node("a", NodeKind::Service)), 5.0);
        assert_eq!(complexity_score(&node("a", NodeKind::Constant)), 1.0);
        assert_eq!(complexity_score(&node("a", NodeKind::Other)), 2.0);
    }

    #[test]
    fn complexity_is_rounded_to_one_decimal() {
        let mut n = node("a", NodeKind::File);
        n.dependencies = 2; // 1.0 + 0.6
        assert_eq!(complexity_score(&n), 1.6);

        let mut n = node("b", NodeKind::File);
        n.dependencies = 1; // 1.0 + 0.3, exact only because of the rounding step
        assert_eq!(complexity_score(&n), 1.3);
    }

    #[test]
    fn connection_counts_come_from_edges() {
        let nodes = vec![node("a", NodeKind::File), node("b", NodeKind::File)];
        let edges = vec![GraphEdge::new("a", "b"), GraphEdge::new("a", "b")];
        let metrics = compute_node_metrics(&nodes, &edges, 1000.0);

        assert_eq!(metrics[0].connections.outgoing, 2);
        assert_eq!(metrics[0].connections.incoming, 0);
        assert_eq!(metrics[1].connections.incoming, 2);
        assert_eq!(metrics[1].connections.total, 2);
    }

    #[test]
    fn edges_to_unknown_ids_do_not_count() {
        let nodes = vec![node("a", NodeKind::File)];
        let edges = vec![GraphEdge::new("a", "ghost")];
        let metrics = compute_node_metrics(&nodes, &edges, 1000.0);
        assert_eq!(metrics[0].connections.total, 0);
    }
}
