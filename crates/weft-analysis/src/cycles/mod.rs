//! Circular dependency detection.
//!
//! Three-state DFS: unvisited, in-progress (on the current path), and
//! done. A node reached while in-progress closes a cycle; done nodes
//! are never re-explored, keeping the scan O(V + E). Rotations of one
//! loop collapse to a single cycle via node-set deduplication.

pub mod types;

use weft_core::errors::CycleError;
use weft_core::types::collections::{FxHashMap, FxHashSet, SmallVec8};

use crate::graph::DependencyGraph;

pub use types::Cycle;

/// Ordered adjacency view the detector walks.
///
/// Scan order is `order`; `targets` maps each node to its outgoing
/// neighbors. Built from a [`DependencyGraph`] or from a caller
/// snapshot, so the traversal itself stays a pure function.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    pub order: Vec<String>,
    pub targets: FxHashMap<String, SmallVec8<String>>,
}

impl Adjacency {
    fn neighbors(&self, node: &str) -> &[String] {
        self.targets.get(node).map(|t| t.as_slice()).unwrap_or(&[])
    }
}

impl From<&DependencyGraph> for Adjacency {
    fn from(graph: &DependencyGraph) -> Self {
        let mut targets: FxHashMap<String, SmallVec8<String>> = FxHashMap::default();
        for node in &graph.nodes {
            let out = graph
                .outgoing(node)
                .iter()
                .map(|edge| edge.target().to_string())
                .collect();
            targets.insert(node.clone(), out);
        }
        Self {
            order: graph.nodes.clone(),
            targets,
        }
    }
}

/// Detect all circular dependency chains in a dependency graph.
pub fn detect_graph_cycles(graph: &DependencyGraph) -> Result<Vec<Cycle>, CycleError> {
    detect_cycles(&Adjacency::from(graph))
}

/// Detect all cycles over an explicit adjacency view.
///
/// Nodes are scanned in `order`, so results are reproducible for a
/// given input. Each loop is reported once regardless of where the
/// scan entered it; the reported path is the slice of the active DFS
/// path from the repeated node's first occurrence, closed with the
/// repeated node.
pub fn detect_cycles(adjacency: &Adjacency) -> Result<Vec<Cycle>, CycleError> {
    let mut state = DetectState::default();

    for node in &adjacency.order {
        if !state.done.contains(node.as_str()) {
            visit(adjacency, node, &mut state);
        }
    }

    // Every emitted cycle must close on itself. The traversal above
    // guarantees it; a mismatch means the detector is broken.
    for cycle in &state.cycles {
        if let (Some(first), Some(last)) = (cycle.path.first(), cycle.path.last()) {
            if first != last {
                return Err(CycleError::InvariantViolated {
                    first: first.clone(),
                    last: last.clone(),
                });
            }
        }
    }

    Ok(state.cycles)
}

#[derive(Default)]
struct DetectState {
    /// Fully explored nodes, never re-entered.
    done: FxHashSet<String>,
    /// Nodes on the active DFS path.
    in_progress: FxHashSet<String>,
    /// The active DFS path, in order.
    path: Vec<String>,
    /// Node-set keys of cycles reported so far.
    seen: FxHashSet<Vec<String>>,
    cycles: Vec<Cycle>,
}

fn visit(adjacency: &Adjacency, node: &str, state: &mut DetectState) {
    if state.in_progress.contains(node) {
        // Back edge: the loop is the path slice from the node's first
        // occurrence, closed with the node itself.
        if let Some(start) = state.path.iter().position(|p| p == node) {
            let mut path: Vec<String> = state.path[start..].to_vec();
            path.push(node.to_string());
            let cycle = Cycle { path };
            if state.seen.insert(cycle.node_set()) {
                tracing::debug!(nodes = cycle.len(), "cycle detected");
                state.cycles.push(cycle);
            }
        }
        return;
    }
    if state.done.contains(node) {
        return;
    }

    state.in_progress.insert(node.to_string());
    state.path.push(node.to_string());

    for next in adjacency.neighbors(node) {
        visit(adjacency, next, state);
    }

    state.in_progress.remove(node);
    state.path.pop();
    state.done.insert(node.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjacency(edges: &[(&str, &[&str])]) -> Adjacency {
        let mut adj = Adjacency::default();
        for (node, targets) in edges {
            adj.order.push(node.to_string());
            adj.targets.insert(
                node.to_string(),
                targets.iter().map(|t| t.to_string()).collect(),
            );
        }
        adj
    }

    #[test]
    fn acyclic_graph_reports_nothing() {
        let adj = adjacency(&[("a", &["b", "c"]), ("b", &["c"]), ("c", &[])]);
        assert!(detect_cycles(&adj).unwrap().is_empty());
    }

    #[test]
    fn two_node_cycle() {
        let adj = adjacency(&[("a", &["b"]), ("b", &["a"])]);
        let cycles = detect_cycles(&adj).unwrap();
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].path, vec!["a", "b", "a"]);
        assert_eq!(cycles[0].len(), 2);
    }

    #[test]
    fn three_node_cycle_reported_once_regardless_of_entry() {
        let forward = adjacency(&[("a", &["b"]), ("b", &["c"]), ("c", &["a"])]);
        let cycles = detect_cycles(&forward).unwrap();
        assert_eq!(cycles.len(), 1);

        // Same loop, scanned from a different entry point.
        let rotated = adjacency(&[("c", &["a"]), ("a", &["b"]), ("b", &["c"])]);
        let rotated_cycles = detect_cycles(&rotated).unwrap();
        assert_eq!(rotated_cycles.len(), 1);
        assert_eq!(cycles[0].node_set(), rotated_cycles[0].node_set());
    }

    #[test]
    fn self_import_is_a_one_node_cycle() {
        let adj = adjacency(&[("a", &["a"])]);
        let cycles = detect_cycles(&adj).unwrap();
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].path, vec!["a", "a"]);
        assert_eq!(cycles[0].len(), 1);
    }

    #[test]
    fn diamond_is_not_a_cycle() {
        // a -> b -> d, a -> c -> d: d is reached twice but never while
        // in progress.
        let adj = adjacency(&[
            ("a", &["b", "c"]),
            ("b", &["d"]),
            ("c", &["d"]),
            ("d", &[]),
        ]);
        assert!(detect_cycles(&adj).unwrap().is_empty());
    }

    #[test]
    fn two_disjoint_cycles_are_both_found() {
        let adj = adjacency(&[
            ("a", &["b"]),
            ("b", &["a"]),
            ("x", &["y"]),
            ("y", &["x"]),
        ]);
        let cycles = detect_cycles(&adj).unwrap();
        assert_eq!(cycles.len(), 2);
    }

    #[test]
    fn overlapping_cycles_dedupe_by_node_set() {
        // a -> b -> a and b -> a -> b are one loop; a -> b -> c -> a is
        // a different node set and counts separately.
        let adj = adjacency(&[("a", &["b"]), ("b", &["a", "c"]), ("c", &["a"])]);
        let cycles = detect_cycles(&adj).unwrap();
        let mut sets: Vec<Vec<String>> = cycles.iter().map(|c| c.node_set()).collect();
        sets.sort();
        assert_eq!(cycles.len(), 2);
        assert_eq!(sets[0], vec!["a", "b"]);
        assert_eq!(sets[1], vec!["a", "b", "c"]);
    }
}
