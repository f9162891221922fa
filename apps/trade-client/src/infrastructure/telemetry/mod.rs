//! Tracing Subscriber Setup
//!
//! Logs go to the configured file so they never interleave with the
//! operator console. Without a file they go to stderr.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Additional filter directives

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::infrastructure::config::LoggingConfig;

/// Crate target the configured level applies to.
const CRATE_TARGET: &str = "trade_client";

/// Telemetry setup errors.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Log file could not be opened.
    #[error("Failed to open log file '{path}': {source}")]
    LogFile {
        /// Log file path.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Configured level is not a valid filter directive.
    #[error("Invalid log level '{level}': {source}")]
    InvalidLevel {
        /// Configured level.
        level: String,
        /// Parse failure.
        source: ParseError,
    },

    /// A global subscriber is already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Build the filter: `RUST_LOG` plus `trade_client=<level>`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidLevel`] when `level` does not parse.
pub fn env_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    let directive = format!("{CRATE_TARGET}={level}")
        .parse()
        .map_err(|source| TelemetryError::InvalidLevel {
            level: level.to_string(),
            source,
        })?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns a `TelemetryError` if the log file cannot be opened, the level
/// is invalid, or a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let env_filter = env_filter(&config.level)?;

    let file_layer = match &config.file {
        Some(path) => {
            let file = open_log_file(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    let stderr_layer = config.file.is_none().then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(())
}

fn open_log_file(path: &Path) -> Result<File, TelemetryError> {
    let to_error = |source| TelemetryError::LogFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)
}

// =============================================================================
// Tests
// =============================================================================
