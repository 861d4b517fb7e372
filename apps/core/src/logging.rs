//! Tracing subscriber setup for the binary.

use std::env;
use tracing_subscriber::EnvFilter;

/// Set to `1` or `true` to emit JSON log lines instead of human-readable ones.
pub const ENV_LOG_JSON: &str = "STORYMETRICS_LOG_JSON";

/// Installs the global subscriber. `RUST_LOG` filters, defaulting to `info`.
///
/// Logs go to stderr so a report written to stdout stays parseable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = env::var(ENV_LOG_JSON)
        .map(|v| matches!(v.trim(), "1" | "true"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // A second initialization (tests, embedding) keeps the first subscriber.
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
