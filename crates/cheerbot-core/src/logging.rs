//! Log setup.
//!
//! Logs go to a file so the chat window keeps the terminal to itself.
//! The filter is read from `CHEERBOT_LOG` (same syntax as `RUST_LOG`).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
pub use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CHEERBOT_LOG";

/// Filter used when `CHEERBOT_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Log file name inside the logs directory.
pub const LOG_FILE: &str = "cheerbot.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber writing to `<dir>/cheerbot.log`.
///
/// Keep the returned guard alive for the whole run; dropping it flushes
/// buffered lines.
///
/// # Errors
/// Returns an error if the directory cannot be created or a global
/// subscriber is already installed.
pub fn init(dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install log subscriber: {err}"))?;

    Ok(guard)
}
