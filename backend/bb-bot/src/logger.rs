//! Bot logging: console plus a daily rotated file.

use crate::{BotError, BotErrorResult, LOG_FILE_PREFIX};

use bb_config::LoggingConfig;

use std::path::Path;

use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

/// Installs the global subscriber. `RUST_LOG` overrides the configured level.
///
/// Console output goes to stderr; stdout carries chat responses.
pub fn initialize(logging: &LoggingConfig, log_dir: &Path) -> BotErrorResult<()> {
    std::fs::create_dir_all(log_dir).map_err(|e| BotError::log_dir(log_dir, e))?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(logging.colored)
        .with_writer(std::io::stderr);

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(logging.retention)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(log_dir)
        .map_err(BotError::logger)?;

    let file_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_directive()));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer);

    // Route `log` records (bb-config) into tracing
    tracing_log::LogTracer::init().map_err(BotError::logger)?;
    tracing::subscriber::set_global_default(subscriber).map_err(BotError::logger)?;

    info!(
        "Logger initialized: level={}, dir={}",
        logging.level.as_directive(),
        log_dir.display()
    );

    Ok(())
}
