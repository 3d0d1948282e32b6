//! File logging for the terminal front-end.
//!
//! Logs go to `<config dir>/logs/tripview.log.YYYY-MM-DD` so they never
//! interleave with the REPL output. `RUST_LOG` overrides the default `info`.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tripview_infrastructure::paths::TripviewPaths;

const LOG_FILE_PREFIX: &str = "tripview.log";

/// Installs the global subscriber. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn init(paths: &TripviewPaths) -> Result<WorkerGuard> {
    let logs_dir = paths
        .logs_dir()
        .map_err(|e| anyhow::anyhow!("Failed to resolve logs dir: {}", e))?;
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create logs dir {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::info!("[Logging] Writing logs to {:?}", logs_dir);
    Ok(guard)
}
