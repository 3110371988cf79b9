use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Builds the active filter. An explicit level wins over `RUST_LOG`, which
/// wins over the `info` default. Accepts a bare level or a full directive.
pub fn make_filter(level: Option<&str>) -> Result<EnvFilter, String> {
    match level {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| format!("invalid log level '{level}': {e}")),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Initializes logging to stderr. Call once at startup.
///
/// Stdout is left to command output so `--json` stays machine-readable.
/// Colored when stderr is a terminal. Repeat calls are ignored.
pub fn init_logging(level: Option<&str>) -> Result<(), String> {
    let filter = make_filter(level)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
    Ok(())
}
