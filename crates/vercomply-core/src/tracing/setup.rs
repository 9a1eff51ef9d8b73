//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "VERCOMPLY_LOG";

/// Directives used when `VERCOMPLY_LOG` is unset or unparseable.
pub const DEFAULT_LOG_FILTER: &str = "vercomply=info";

/// Resolve the filter `init_tracing` installs from the current environment.
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Initialize the vercomply tracing/logging system.
///
/// Reads `VERCOMPLY_LOG` for filter directives, e.g.
/// `VERCOMPLY_LOG=vercomply_analysis=debug`.
///
/// Falls back to `vercomply=info` if `VERCOMPLY_LOG` is not set or is invalid.
///
/// This function is idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = log_filter();

        // A harness may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
