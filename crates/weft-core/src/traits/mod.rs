//! Cross-cutting traits and their default implementations.

pub mod cancellation;

pub use cancellation::{Cancellable, CancellationToken};
