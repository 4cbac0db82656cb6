//! Structured Logger
//!
//! Wraps `tracing` with a console layer for interactive runs and a daily
//! rolling NDJSON file for anything that needs to be grepped later.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "lensbot.log";

/// Initialize the global logger. `level` is the fallback filter when
/// RUST_LOG is not set. Safe to call more than once (later calls no-op).
pub fn init_logger<P: AsRef<Path>>(log_dir: P, level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_ansi(true);

    // `logs/lensbot.log.YYYY-MM-DD`, one JSON object per line
    let file_layer = fmt::layer()
        .json()
        .with_writer(RollingFileAppender::new(
            Rotation::DAILY,
            log_dir,
            LOG_FILE_PREFIX,
        ))
        .with_ansi(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();
}
