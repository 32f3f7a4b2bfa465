//! Source file records and extracted dependency edges.

use serde::{Deserialize, Serialize};

/// A single source file supplied by the Source Collector.
///
/// Read-only to the engine. Binary detection and exclusion filtering
/// happen upstream; `size` is whatever the collector measured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path used as the unique key. Canonicalized again before graph
    /// insertion, so `./` and `../` segments are tolerated here.
    pub path: String,
    /// Full file content.
    pub content: String,
    /// Size in bytes as reported by the collector.
    #[serde(default)]
    pub size: u64,
}

impl FileRecord {
    /// Build an in-memory record, deriving `size` from the content.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let size = content.len() as u64;
        Self {
            path: path.into(),
            content,
            size,
        }
    }
}

/// How an import site was written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Static ES import: `import x from "./y"`.
    Import,
    /// CommonJS require call: `require("./y")`.
    Require,
    /// Dynamic import expression: `import("./y")`.
    Dynamic,
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeKind::Import => f.write_str("import"),
            EdgeKind::Require => f.write_str("require"),
            EdgeKind::Dynamic => f.write_str("dynamic"),
        }
    }
}

/// One extracted import relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// Import form at the call site.
    pub kind: EdgeKind,
    /// Canonical path of the importing file.
    pub from: String,
    /// The specifier exactly as written in the source.
    pub specifier: String,
    /// Resolved canonical path for relative specifiers. `None` for
    /// bare/absolute specifiers, which pass through unresolved.
    pub resolved: Option<String>,
    /// 1-based line of the import site.
    pub line: usize,
}

impl DependencyEdge {
    /// The path this edge points at: the resolved canonical path when
    /// resolution succeeded, otherwise the raw specifier.
    pub fn target(&self) -> &str {
        self.resolved.as_deref().unwrap_or(&self.specifier)
    }
}
