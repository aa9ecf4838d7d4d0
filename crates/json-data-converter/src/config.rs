//! Plugin configuration section

use dataconverter_core::{PluginError, PluginResult};
use serde::{Deserialize, Serialize};

/// Configuration read from the plugin's section of the host document
///
/// The key is required at startup but plays no part in conversion. Only an
/// absent or empty key is rejected; its content is not inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    #[serde(default)]
    pub key: String,
}

impl ConverterConfig {
    /// Fill defaults and validate required fields
    pub fn init_defaults(&mut self) -> PluginResult<()> {
        if self.key.is_empty() {
            return Err(PluginError::ConfigError("key is required".to_string()));
        }
        Ok(())
    }
}
