//! Shared constants for the Weft analysis engine.

/// Weft version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default task timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default worker queue capacity.
pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// Base size estimate for a graph node.
pub const NODE_SIZE_BASE: f64 = 100.0;

/// Default ceiling for a node size estimate.
pub const DEFAULT_NODE_SIZE_CAP: f64 = 1000.0;

/// Default hub threshold multiplier: a node is a hub when its total
/// connection count exceeds `multiplier * average`.
pub const DEFAULT_HUB_MULTIPLIER: f64 = 2.0;

/// Default bridge edge estimate as a fraction of total edges.
pub const DEFAULT_BRIDGE_RATIO: f64 = 0.10;

// ---- Composite complexity weights ----

/// Weight per analyzed file.
pub const COMPLEXITY_FILE_WEIGHT: f64 = 0.1;

/// Weight applied to the average dependencies per file.
pub const COMPLEXITY_AVG_DEPS_WEIGHT: f64 = 2.0;

/// Weight per circular dependency.
pub const COMPLEXITY_CYCLE_WEIGHT: f64 = 10.0;

/// Weight per level of dependency depth.
pub const COMPLEXITY_DEPTH_WEIGHT: f64 = 1.5;

// ---- Task progress checkpoints ----

/// Progress once a task leaves the queue.
pub const PROGRESS_STARTED: u8 = 0;

/// Progress after import extraction completes.
pub const PROGRESS_EXTRACTED: u8 = 40;

/// Progress after graph construction.
pub const PROGRESS_GRAPH_BUILT: u8 = 55;

/// Progress after cycle detection.
pub const PROGRESS_CYCLES_DONE: u8 = 75;

/// Progress after metrics computation.
pub const PROGRESS_METRICS_DONE: u8 = 95;

/// Progress at completion.
pub const PROGRESS_COMPLETE: u8 = 100;
