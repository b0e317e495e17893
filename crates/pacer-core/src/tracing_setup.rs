//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the pacer tracing/logging system with default settings.
///
/// Reads the `PACER_LOG` environment variable for per-module log levels.
/// Format: `PACER_LOG=pacer_decay=debug,pacer_retry=info`
///
/// Falls back to `pacer=info` if `PACER_LOG` is not set or is invalid.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Like [`init_tracing`], falling back to `pacer=<log_level>` from `config`.
///
/// Only the first call of either function installs a subscriber.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(config.fallback_filter()));

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

/// Initialize tracing with a custom filter string (for testing or embedding).
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    let filter = EnvFilter::new(filter);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}
