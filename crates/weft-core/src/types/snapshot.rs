//! Caller-supplied graph snapshots for metrics tasks.
//!
//! The metrics calculator is a pure function of these inputs. Node
//! classification is whatever the caller says it is; the engine never
//! infers types.

use serde::{Deserialize, Serialize};

/// Node classification supplied by the caller. Unknown kinds fold to
/// [`NodeKind::Other`] on deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Api,
    Function,
    Component,
    Service,
    Database,
    File,
    Constant,
    #[default]
    #[serde(other)]
    Other,
}

/// One node of a graph snapshot.
///
/// The count fields describe whatever structure the caller attributes
/// to the node (parameters of a function, children of a tree node,
/// declared dependencies). Absent fields default to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique node id within the snapshot.
    pub id: String,
    #[serde(default)]
    pub kind: NodeKind,
    /// Content length in characters, when the node carries content.
    #[serde(default)]
    pub content_chars: usize,
    #[serde(default)]
    pub parameters: usize,
    #[serde(default)]
    pub methods: usize,
    #[serde(default)]
    pub children: usize,
    #[serde(default)]
    pub dependencies: usize,
}

impl GraphNode {
    /// A bare node with a kind and no structural counts.
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            content_chars: 0,
            parameters: 0,
            methods: 0,
            children: 0,
            dependencies: 0,
        }
    }
}

/// One directed edge of a graph snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

impl GraphEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}
