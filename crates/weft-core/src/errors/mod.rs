//! Error handling for Weft.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod cycle_error;
pub mod error_code;
pub mod extract_error;
pub mod graph_error;
pub mod metrics_error;
pub mod task_error;

pub use config_error::ConfigError;
pub use cycle_error::CycleError;
pub use error_code::WeftErrorCode;
pub use extract_error::ExtractError;
pub use graph_error::GraphError;
pub use metrics_error::MetricsError;
pub use task_error::{TaskError, TaskFailure};
