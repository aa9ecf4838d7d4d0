//! dataconverter-core - Host plugin contract, configuration, and errors
//!
//! This crate provides the foundational types shared by data converter plugins:
//! - [`Plugin`] trait implemented by plugins the host initializes at startup
//! - [`PluginConfig`] for the host configuration document
//! - [`PluginError`] for error handling
//! - [`LogLevel`] for log filtering

mod config;
mod error;
mod plugin;

pub use config::{PluginConfig, PluginMetadata};
pub use error::{PluginError, PluginResult};
pub use plugin::Plugin;

use std::str::FromStr;

/// Log levels understood by the host
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(PluginError::ConfigError(format!(
                "invalid log level: {other}"
            ))),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, Plugin, PluginConfig, PluginError, PluginMetadata, PluginResult};
}
