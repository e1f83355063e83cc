//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the Stride tracing/logging system.
///
/// Reads the `STRIDE_LOG` environment variable for per-module log levels.
/// Format: `STRIDE_LOG=stride_engine::orchestrator=debug,stride_core=warn`
///
/// Falls back to `stride=info` if `STRIDE_LOG` is not set or is invalid.
///
/// Idempotent. If another subscriber is already installed globally it is
/// left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("stride=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
