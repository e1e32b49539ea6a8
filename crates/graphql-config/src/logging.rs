//! Tracing subscriber setup for tools that embed the loader.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize a tracing subscriber with default configuration.
///
/// Uses the `RUST_LOG` environment variable to determine the log level,
/// defaulting to [`DEFAULT_FILTER`] if not set.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;
    install(filter)
}

/// Initialize a tracing subscriber with an explicit filter directive,
/// e.g. `"graphql_config=debug"`.
pub fn init_with_filter(directive: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    install(EnvFilter::try_new(directive)?)
}

fn install(filter: EnvFilter) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
