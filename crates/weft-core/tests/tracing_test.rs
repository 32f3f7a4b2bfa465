//! Tests for tracing initialization.

use weft_core::tracing::init_tracing;

#[test]
fn init_is_idempotent() {
    // Double initialization must not panic; the Once guard absorbs the
    // second call.
    init_tracing();
    init_tracing();
}

#[test]
fn logging_after_init_does_not_panic() {
    init_tracing();
    tracing::info!(component = "test", "tracing smoke check");
    tracing::debug!("debug level message");
}
