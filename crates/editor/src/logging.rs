// Chunk: docs/chunks/edit_cli - Edit script loading and command-line front end

//! Tracing subscriber setup for the `lineedit` binary.
//!
//! Logs go to stderr so stdout stays clean for `--dry-run` and `translate`
//! output. `RUST_LOG` wins over the configured level.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Builds the filter: `RUST_LOG` if set and valid, otherwise `default_level`,
/// otherwise `warn`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Builds the stderr subscriber shared by the binary and tests.
pub fn build_subscriber(default_level: &str) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter(default_level))
}

/// Installs the global subscriber. Returns false if one was already set.
pub fn init_global(default_level: &str) -> bool {
    tracing::subscriber::set_global_default(build_subscriber(default_level)).is_ok()
}
