//! Error types for data converter plugins

use thiserror::Error;

/// Result type alias for plugin operations
pub type PluginResult<T> = Result<T, PluginError>;

/// Error type for plugin operations
#[derive(Error, Debug)]
pub enum PluginError {
    /// Plugin has no configuration section and should be skipped by the host
    #[error("plugin disabled")]
    Disabled,

    /// Failed to initialize the plugin
    #[error("initialization failed: {0}")]
    InitializationFailed(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl PluginError {
    /// Returns true when the host should disable the plugin instead of aborting startup
    pub fn is_disabled(&self) -> bool {
        matches!(self, PluginError::Disabled)
    }
}

impl From<serde_json::Error> for PluginError {
    fn from(err: serde_json::Error) -> Self {
        PluginError::SerializationError(err.to_string())
    }
}
