//! Logging configuration using tracing
//!
//! The TUI owns stdout, so logs go to a rolling file instead.

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `<data-dir>/logs/`, defaulting to
/// `~/.local/share/coinflip/logs/` when no data dir override is given.
/// Log level is controlled by the `COINFLIP_LOG` environment variable.
///
/// # Examples
/// ```bash
/// COINFLIP_LOG=debug cargo run
/// COINFLIP_LOG=trace cargo run
/// ```
pub fn init(data_dir: Option<&Path>) -> Result<()> {
    let log_dir = log_directory(data_dir);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "coinflip.log");

    // Default to info, allow override via COINFLIP_LOG
    let env_filter = EnvFilter::try_from_env("COINFLIP_LOG")
        .unwrap_or_else(|_| EnvFilter::new("coinflip=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("Coinflip starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Resolve the log directory, honoring an explicit data dir override
fn log_directory(data_dir: Option<&Path>) -> PathBuf {
    match data_dir {
        Some(dir) => dir.join("logs"),
        None => default_data_dir().join("logs"),
    }
}

/// Default data directory: `~/.local/share/coinflip`
pub fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("coinflip")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_with_override() {
        let dir = log_directory(Some(Path::new("/tmp/cf-data")));
        assert_eq!(dir, PathBuf::from("/tmp/cf-data/logs"));
    }

    #[test]
    fn test_log_directory_default_ends_with_coinflip_logs() {
        let dir = log_directory(None);
        assert!(dir.ends_with("coinflip/logs"));
    }
}
