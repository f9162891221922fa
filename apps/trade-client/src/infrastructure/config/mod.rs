//! Configuration Module
//!
//! Loads the YAML settings file with environment variable interpolation
//! and validates every session before the client starts.
//!
//! # Usage
//!
//! ```rust,ignore
//! use trade_client::infrastructure::config::load_config;
//!
//! let config = load_config("config/tradeclient.yaml")?;
//! for session in config.session_ids() {
//!     println!("{session}");
//! }
//! ```

mod settings;

use std::path::Path;

use thiserror::Error;

use crate::domain::fix::ProtocolVersion;

pub use settings::{BEGIN_STRING_KEY, LoggingConfig, SettingsSection, TradeClientConfig};

/// Default settings file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/tradeclient.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: impl AsRef<Path>) -> Result<TradeClientConfig, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string.
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<TradeClientConfig, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: TradeClientConfig = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match cap.get(1).map(|m| std::env::var(m.as_str())) {
            Some(Ok(value)) if !value.is_empty() => value,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate sessions: at least one, each with a known BeginString and both
/// CompIDs once merged over the global section.
fn validate_config(config: &TradeClientConfig) -> Result<(), ConfigError> {
    if config.sessions.is_empty() {
        return Err(ConfigError::ValidationError(
            "at least one session must be configured".to_string(),
        ));
    }

    for index in 0..config.sessions.len() {
        let Some(section) = config.merged_session(index) else {
            continue;
        };

        let begin_string = section.get(BEGIN_STRING_KEY).ok_or_else(|| {
            ConfigError::ValidationError(format!("sessions[{index}]: BeginString is required"))
        })?;
        if ProtocolVersion::from_begin_string(begin_string).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "sessions[{index}]: unsupported BeginString '{begin_string}'"
            )));
        }

        for key in ["SenderCompID", "TargetCompID"] {
            if section.get(key).is_none_or(String::is_empty) {
                return Err(ConfigError::ValidationError(format!(
                    "sessions[{index}]: {key} is required"
                )));
            }
        }
    }

    Ok(())
}
