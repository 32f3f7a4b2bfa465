//! # weft-analysis
//!
//! Pure algorithmic core of the Weft engine: import extraction,
//! dependency graph construction, cycle detection, and structural
//! metrics. Every entry point is a pure function over plain data, so
//! the background worker and the synchronous fallback share one core
//! with identical semantics.

pub mod cycles;
pub mod extract;
pub mod graph;
pub mod metrics;
pub mod pipeline;

pub use cycles::Cycle;
pub use graph::DependencyGraph;
pub use metrics::{GraphMetrics, NodeMetrics};
pub use pipeline::{
    analyze_files, analyze_single_file, calculate_metrics, DependencyReport, FileReport,
    MetricsReport, Stage,
};
