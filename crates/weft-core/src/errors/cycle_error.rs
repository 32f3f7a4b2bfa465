//! Cycle detection errors.

use super::error_code::{self, WeftErrorCode};

/// Errors from the cycle detector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CycleError {
    /// An emitted cycle does not close on itself. The three-state DFS
    /// makes this structurally impossible, so seeing it means the
    /// traversal itself is defective, not the input.
    #[error("detector invariant violated: cycle opens at {first} but closes at {last}")]
    InvariantViolated { first: String, last: String },
}

impl WeftErrorCode for CycleError {
    fn error_code(&self) -> &'static str {
        error_code::CYCLE_ERROR
    }
}
