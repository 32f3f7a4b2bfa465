//! Cycle types.

use serde::{Deserialize, Serialize};

/// One circular dependency chain.
///
/// `path` starts and ends with the same node, e.g. `[a, b, a]`. Two
/// chains over the same node set are the same cycle no matter where
/// the traversal entered the loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    pub path: Vec<String>,
}

impl Cycle {
    /// Number of distinct nodes on the loop.
    pub fn len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorted node list, the deduplication key for this cycle.
    pub(crate) fn node_set(&self) -> Vec<String> {
        let mut nodes: Vec<String> = self.path[..self.path.len().saturating_sub(1)].to_vec();
        nodes.sort_unstable();
        nodes
    }
}
