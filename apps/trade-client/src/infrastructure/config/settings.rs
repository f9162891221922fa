//! Trade Client Settings
//!
//! Session settings in the shape of an initiator settings file: a global
//! `default` section merged under each entry of `sessions`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

use crate::application::ports::SettingsLookup;
use crate::domain::fix::SessionId;

/// Settings key for the session BeginString.
pub const BEGIN_STRING_KEY: &str = "BeginString";

/// A settings section: key to scalar value.
pub type SettingsSection = BTreeMap<String, String>;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeClientConfig {
    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Global settings shared by every session.
    #[serde(default, deserialize_with = "scalar_section")]
    pub default: SettingsSection,
    /// Per-session overrides.
    #[serde(default, deserialize_with = "scalar_sections")]
    pub sessions: Vec<SettingsSection>,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level for the `trade_client` target.
    #[serde(default = "default_level")]
    pub level: String,
    /// Log file. Logs go to stderr when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

impl TradeClientConfig {
    /// Session settings merged over the global section.
    #[must_use]
    pub fn merged_session(&self, index: usize) -> Option<SettingsSection> {
        let overrides = self.sessions.get(index)?;
        let mut merged = self.default.clone();
        merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        Some(merged)
    }

    /// Identities of the configured sessions.
    ///
    /// Sessions missing BeginString, SenderCompID or TargetCompID are
    /// skipped; validation rejects them at load time.
    #[must_use]
    pub fn session_ids(&self) -> Vec<SessionId> {
        (0..self.sessions.len())
            .filter_map(|index| self.merged_session(index))
            .filter_map(|section| {
                Some(SessionId::new(
                    section.get(BEGIN_STRING_KEY)?,
                    section.get("SenderCompID")?,
                    section.get("TargetCompID")?,
                ))
            })
            .collect()
    }
}

impl SettingsLookup for TradeClientConfig {
    fn global_setting(&self, key: &str) -> Option<&str> {
        self.default.get(key).map(String::as_str)
    }
}

/// YAML scalars accepted as setting values.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(s) => s,
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => String::from(if b { "Y" } else { "N" }),
        }
    }
}

fn scalar_section<'de, D>(deserializer: D) -> Result<SettingsSection, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, Scalar> = BTreeMap::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(k, v)| (k, v.into())).collect())
}

fn scalar_sections<'de, D>(deserializer: D) -> Result<Vec<SettingsSection>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<BTreeMap<String, Scalar>> = Vec::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|section| section.into_iter().map(|(k, v)| (k, v.into())).collect())
        .collect())
}
