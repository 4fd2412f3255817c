//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

pub const LOG_ENV_VAR: &str = "FORGE_LOG";
const DEFAULT_FILTER: &str = "forge=info";

/// Initialize the Forge tracing/logging system.
///
/// Reads `FORGE_LOG` for per-module log levels, for example
/// `FORGE_LOG=forge_transform=debug,forge_registry=warn`.
/// Falls back to `forge=info` if `FORGE_LOG` is not set or is invalid.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = log_filter(std::env::var(LOG_ENV_VAR).ok().as_deref());

        // Another subscriber may already be installed by the host process.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}

/// Parse `directives` in `FORGE_LOG` syntax, falling back to `forge=info`
/// when they are absent or invalid.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
