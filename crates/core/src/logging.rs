//! Structured logging infrastructure for meater-cloud.
//!
//! This module provides centralized logging initialization with support
//! for structured JSON output and environment-based configuration. All
//! output goes to stderr so command output on stdout stays machine-readable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when neither `RUST_LOG` nor a level is given.
pub const DEFAULT_LEVEL: &str = "warn";

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Map a repeat count of `-v` flags to a filter directive.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_LEVEL,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the logging system with human-readable output.
///
/// `RUST_LOG` takes precedence over `level` when it is set.
///
/// # Example
/// ```no_run
/// use meater_core::logging;
///
/// logging::init("info");
/// tracing::info!("Application started");
/// ```
pub fn init(level: &str) {
    tracing_subscriber::registry()
        .with(filter(level))
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

/// Initialize the logging system with JSON output.
///
/// Suitable for log aggregation when the CLI runs unattended.
///
/// # Example
/// ```no_run
/// use meater_core::logging;
///
/// logging::init_json("info");
/// tracing::info!(command = "cooks", "Fetching cooks");
/// ```
pub fn init_json(level: &str) {
    tracing_subscriber::registry()
        .with(filter(level))
        .with(
            fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
