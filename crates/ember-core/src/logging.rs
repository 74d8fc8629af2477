//! Diagnostic logging.
//!
//! The TUI owns stdout/stderr, so logs go to a daily rolling file under
//! `paths::logs_dir()`. Sign-in failure details land here instead of on screen.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Environment variable holding filter directives; wins over the config file.
pub const LOG_ENV_VAR: &str = "EMBER_LOG";

/// File name prefix for the rolling log.
pub const LOG_FILE_PREFIX: &str = "ember.log";

/// Installs the global subscriber writing to `dir`.
///
/// Keep the returned guard alive for the whole process; dropping it flushes
/// and stops the background writer.
///
/// # Errors
/// Returns an error if the directory cannot be created, the filter is
/// invalid, or a global subscriber is already installed.
pub fn init(config: &LoggingConfig, dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let directives = filter_directives(std::env::var(LOG_ENV_VAR).ok(), &config.level);
    let env_filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid log filter '{directives}'"))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(guard)
}

/// Picks the filter directives: a non-blank env value, else the configured level.
fn filter_directives(env_value: Option<String>, configured: &str) -> String {
    match env_value {
        Some(value) if !value.trim().is_empty() => value,
        _ => configured.to_string(),
    }
}
