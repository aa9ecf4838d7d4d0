//! Host configuration types

use crate::{LogLevel, PluginError, PluginResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration document handed to plugins during initialization
///
/// The host owns the document; each plugin reads its own section, keyed by
/// the plugin name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Plugin sections keyed by plugin name
    #[serde(default)]
    pub sections: serde_json::Value,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Timeout granted to plugins on graceful shutdown, in milliseconds
    #[serde(default = "default_graceful_timeout")]
    pub graceful_timeout_ms: u64,

    /// Version of the running host, if it reports one
    #[serde(default)]
    pub host_version: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_graceful_timeout() -> u64 {
    30_000
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            sections: serde_json::Value::Null,
            log_level: default_log_level(),
            graceful_timeout_ms: default_graceful_timeout(),
            host_version: None,
        }
    }
}

impl PluginConfig {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    /// Check whether a section exists
    pub fn has(&self, section: &str) -> bool {
        self.sections.get(section).is_some()
    }

    /// Deserialize a single section into a typed value
    ///
    /// A missing section and a section of the wrong shape are both
    /// configuration errors.
    pub fn unmarshal_key<T: DeserializeOwned>(&self, section: &str) -> PluginResult<T> {
        let value = self
            .sections
            .get(section)
            .ok_or_else(|| PluginError::ConfigError(format!("missing section: {section}")))?;
        T::deserialize(value)
            .map_err(|e| PluginError::ConfigError(format!("section {section}: {e}")))
    }

    /// Set a section value
    pub fn set<T: Serialize>(&mut self, section: &str, value: T) -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(value)?;
        match self.sections.as_object_mut() {
            Some(obj) => {
                obj.insert(section.to_string(), value);
            }
            None => {
                let mut obj = serde_json::Map::new();
                obj.insert(section.to_string(), value);
                self.sections = serde_json::Value::Object(obj);
            }
        }
        Ok(())
    }

    /// Parsed log level
    pub fn level(&self) -> PluginResult<LogLevel> {
        self.log_level.parse()
    }

    /// Graceful shutdown timeout as a [`Duration`]
    pub fn graceful_timeout(&self) -> Duration {
        Duration::from_millis(self.graceful_timeout_ms)
    }
}

/// Plugin metadata reported to the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginMetadata {
    /// Plugin name
    pub name: String,

    /// Plugin version (semver)
    pub version: String,

    /// Plugin description
    #[serde(default)]
    pub description: Option<String>,
}

impl PluginMetadata {
    /// Create new plugin metadata
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
