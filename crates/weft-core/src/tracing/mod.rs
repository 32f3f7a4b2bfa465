//! Tracing and logging for Weft.

pub mod setup;

pub use setup::init_tracing;
