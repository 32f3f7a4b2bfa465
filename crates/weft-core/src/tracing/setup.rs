//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Weft tracing/logging system.
///
/// Reads the `WEFT_LOG` environment variable for per-subsystem log
/// levels, e.g. `WEFT_LOG=weft_analysis=debug,weft_engine=info`.
/// Falls back to `weft=info` when `WEFT_LOG` is not set or is invalid.
///
/// Idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("WEFT_LOG")
            .unwrap_or_else(|_| EnvFilter::new("weft=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
