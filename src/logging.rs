//! Tracing subscriber setup shared by the binaries.
//!
//! Logs go to stderr so stdout stays free for the RPC channel. The filter is
//! read from `COZYTAB_LOG`, then `RUST_LOG`, then defaults to `info`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "COZYTAB_LOG";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
