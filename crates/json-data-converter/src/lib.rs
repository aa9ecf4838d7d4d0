//! json-data-converter - Plain JSON payload converter plugin
//!
//! The plugin reads its section from the host configuration, then supplies a
//! [`JsonPayloadConverter`] that the host registers at startup:
//!
//! ```ignore
//! use dataconverter_core::PluginConfig;
//! use dataconverter_transport::ConverterRegistry;
//! use json_data_converter::{JsonDataConverterPlugin, register_plugin};
//!
//! let config = PluginConfig::from_json(br#"{"sections": {"json-data-converter": {"key": "k"}}}"#)?;
//! let mut plugin = JsonDataConverterPlugin::new();
//! register_plugin(&mut plugin, &config, ConverterRegistry::global())?;
//! ```
//!
//! Hosts that also want plugin logs routed to their own logger call [`start`]
//! after installing a sink on [`dataconverter_logging::LogSinkManager`]:
//!
//! ```ignore
//! let plugin = json_data_converter::start(&config, ConverterRegistry::global())?;
//! ```

use dataconverter_core::{Plugin, PluginConfig, PluginError, PluginMetadata, PluginResult};
use dataconverter_logging::init_logging;
use dataconverter_transport::{
    ConverterProvider, ConverterRegistry, JsonPayloadConverter, PayloadConverter,
};
use std::sync::Arc;

mod config;

pub use config::ConverterConfig;
pub use dataconverter_transport::{METADATA_ENCODING, METADATA_ENCODING_JSON};

/// Plugin name, also the key of its configuration section
pub const PLUGIN_NAME: &str = "json-data-converter";

const INIT_OP: &str = "json-data-converter-init";

/// Plugin supplying the plain JSON payload converter
#[derive(Debug, Default)]
pub struct JsonDataConverterPlugin {
    config: Option<ConverterConfig>,
}

impl JsonDataConverterPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validated configuration, once initialized
    pub fn config(&self) -> Option<&ConverterConfig> {
        self.config.as_ref()
    }
}

impl Plugin for JsonDataConverterPlugin {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn init(&mut self, config: &PluginConfig) -> PluginResult<()> {
        if !config.has(PLUGIN_NAME) {
            tracing::debug!(plugin = PLUGIN_NAME, "configuration section absent, plugin disabled");
            return Err(PluginError::Disabled);
        }

        let mut cfg: ConverterConfig = config.unmarshal_key(PLUGIN_NAME).map_err(with_op)?;
        cfg.init_defaults().map_err(with_op)?;

        self.config = Some(cfg);
        tracing::info!(
            plugin = PLUGIN_NAME,
            encoding = METADATA_ENCODING_JSON,
            host_version = config.host_version.as_deref().unwrap_or("unknown"),
            graceful_timeout = ?config.graceful_timeout(),
            "plugin initialized"
        );
        Ok(())
    }

    fn metadata(&self) -> Option<PluginMetadata> {
        Some(
            PluginMetadata::new(PLUGIN_NAME, env!("CARGO_PKG_VERSION"))
                .with_description("Plain JSON payload converter"),
        )
    }
}

impl ConverterProvider for JsonDataConverterPlugin {
    fn payload_converter(&self) -> Arc<dyn PayloadConverter> {
        Arc::new(JsonPayloadConverter::new())
    }
}

/// Prefix configuration errors with the init operation
fn with_op(err: PluginError) -> PluginError {
    match err {
        PluginError::ConfigError(msg) => PluginError::ConfigError(format!("{INIT_OP}: {msg}")),
        other => other,
    }
}

/// Initialize a plugin and register the converter it provides
///
/// Returns `Ok(false)` when the plugin disabled itself, `Ok(true)` once its
/// converter is registered. Any other init failure aborts startup.
pub fn register_plugin<P>(
    plugin: &mut P,
    config: &PluginConfig,
    registry: &ConverterRegistry,
) -> PluginResult<bool>
where
    P: Plugin + ConverterProvider,
{
    match plugin.init(config) {
        Ok(()) => {}
        Err(PluginError::Disabled) => {
            tracing::info!(plugin = plugin.name(), "plugin disabled, skipping registration");
            return Ok(false);
        }
        Err(e) => {
            tracing::error!(plugin = plugin.name(), error = %e, "plugin initialization failed");
            return Err(e);
        }
    }

    plugin
        .provide(registry)
        .map_err(|e| PluginError::InitializationFailed(e.to_string()))?;
    tracing::info!(
        plugin = plugin.name(),
        converters = registry.len(),
        "payload converter registered"
    );
    Ok(true)
}

/// Host startup entry point
///
/// Installs logging at the configured level, then initializes and registers
/// the plugin. Returns the plugin when it registered, `None` when disabled.
pub fn start(
    config: &PluginConfig,
    registry: &ConverterRegistry,
) -> PluginResult<Option<JsonDataConverterPlugin>> {
    let level = config.level()?;
    if let Err(e) = init_logging(level) {
        tracing::warn!(level = %level, error = %e, "host logging not installed");
    }

    let mut plugin = JsonDataConverterPlugin::new();
    if register_plugin(&mut plugin, config, registry)? {
        Ok(Some(plugin))
    } else {
        Ok(None)
    }
}
