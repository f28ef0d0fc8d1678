//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants;

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads the `SDT_LOG` environment variable for per-crate log levels, e.g.
/// `SDT_LOG=sdt_simulation=debug`. Falls back to `info` when unset or invalid.
/// Logs go to stderr so stdout stays free for results.
///
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(constants::LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("info"));

        // Leaves an already-installed global subscriber in place.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
