use std::env;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{MediatorError, Result, config::LogLevel};

const LOG_FORMAT_VAR: &str = "LISTEN_TOGETHER_LOG_FORMAT";
const DAYS_TO_KEEP: usize = 7;

fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()))
}

fn wants_json() -> bool {
    env::var(LOG_FORMAT_VAR).is_ok_and(|format| format == "json")
}

/// Initialize tracing for the mediator.
///
/// Uses `RUST_LOG` if set, otherwise the configured level. Output is pretty
/// by default, or JSON when `LISTEN_TOGETHER_LOG_FORMAT=json`.
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init(level: LogLevel) -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(level));

    let result = if wants_json() {
        registry
            .with(fmt::layer().json().with_target(true).with_level(true))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(true)
                    .with_thread_names(true),
            )
            .try_init()
    };

    result.map_err(|e| MediatorError::Logging(e.to_string()))
}

/// Initialize tracing with an additional daily-rotated log file.
///
/// Files are written to [`ConfigPaths::log_dir`](crate::config::ConfigPaths::log_dir)
/// and the last week is kept.
///
/// # Errors
/// Returns error if the log directory or appender cannot be created, or a
/// global subscriber is already installed
pub fn init_with_file(level: LogLevel) -> Result<()> {
    let log_dir = crate::config::ConfigPaths::log_dir()?;

    let file_appender = tracing_appender::rolling::Builder::new()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .max_log_files(DAYS_TO_KEEP)
        .filename_prefix("listen-together")
        .filename_suffix("log")
        .build(&log_dir)
        .map_err(|e| MediatorError::Logging(e.to_string()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let registry = tracing_subscriber::registry().with(env_filter(level));

    let result = if wants_json() {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .try_init()
    };

    result.map_err(|e| MediatorError::Logging(e.to_string()))?;

    // The writer thread must outlive every log call.
    std::mem::forget(guard);

    Ok(())
}
