//! Event system for the task lifecycle.
//! Synchronous dispatch; handlers are isolated from each other's panics.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::WeftEventHandler;
