//! Plugin trait

use crate::{PluginConfig, PluginMetadata, PluginResult};

/// Trait implemented by plugins the host loads at startup
///
/// The host calls [`Plugin::init`] exactly once with its configuration
/// document, then asks the plugin for whatever capabilities it provides.
/// Returning [`PluginError::Disabled`](crate::PluginError::Disabled) from
/// `init` tells the host to skip the plugin rather than abort.
///
/// # Example
///
/// ```ignore
/// use dataconverter_core::prelude::*;
///
/// struct MyPlugin;
///
/// impl Plugin for MyPlugin {
///     fn name(&self) -> &'static str {
///         "my-plugin"
///     }
///
///     fn init(&mut self, config: &PluginConfig) -> PluginResult<()> {
///         if !config.has(self.name()) {
///             return Err(PluginError::Disabled);
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync + 'static {
    /// Plugin name, also the key of its configuration section
    fn name(&self) -> &'static str;

    /// Initialize the plugin from the host configuration
    fn init(&mut self, config: &PluginConfig) -> PluginResult<()>;

    /// Get plugin metadata
    ///
    /// Override this to provide plugin information
    fn metadata(&self) -> Option<PluginMetadata> {
        None
    }
}
