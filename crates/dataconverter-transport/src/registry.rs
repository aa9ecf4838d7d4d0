//! Converter registry keyed by encoding identifier

use crate::converter::{ConverterError, PayloadConverter};
use crate::payload::Payload;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Global converter registry
static REGISTRY: OnceCell<ConverterRegistry> = OnceCell::new();

/// Routes payloads to the converter matching their `encoding` metadata
pub struct ConverterRegistry {
    converters: DashMap<String, Arc<dyn PayloadConverter>>,
}

impl ConverterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            converters: DashMap::new(),
        }
    }

    /// Get the process-wide registry
    pub fn global() -> &'static ConverterRegistry {
        REGISTRY.get_or_init(ConverterRegistry::new)
    }

    /// Register a converter under its encoding identifier
    pub fn register(&self, converter: Arc<dyn PayloadConverter>) -> Result<(), ConverterError> {
        let encoding = converter.encoding();
        match self.converters.entry(encoding.to_string()) {
            Entry::Occupied(_) => Err(ConverterError::DuplicateEncoding(encoding.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(converter);
                Ok(())
            }
        }
    }

    /// Look up a converter by encoding identifier
    pub fn get(&self, encoding: &str) -> Option<Arc<dyn PayloadConverter>> {
        self.converters.get(encoding).map(|r| r.clone())
    }

    /// Find the converter for a payload from its `encoding` metadata
    pub fn route(&self, payload: &Payload) -> Result<Arc<dyn PayloadConverter>, ConverterError> {
        let encoding = payload
            .encoding()
            .ok_or_else(|| ConverterError::UnknownEncoding("<missing>".to_string()))?;
        self.get(encoding)
            .ok_or_else(|| ConverterError::UnknownEncoding(encoding.to_string()))
    }

    /// Decode a payload with the converter matching its encoding tag
    pub fn from_payload<T: DeserializeOwned>(&self, payload: &Payload) -> Result<T, ConverterError> {
        let value = self.route(payload)?.decode_value(payload)?;
        T::deserialize(value).map_err(ConverterError::Decode)
    }

    /// Render a payload with its own converter, or as raw text if none matches
    pub fn to_display_string(&self, payload: &Payload) -> String {
        match self.route(payload) {
            Ok(converter) => converter.to_display_string(payload),
            Err(_) => payload.data_lossy().into_owned(),
        }
    }

    /// Registered encoding identifiers, sorted
    pub fn encodings(&self) -> Vec<String> {
        let mut encodings: Vec<String> = self.converters.iter().map(|r| r.key().clone()).collect();
        encodings.sort();
        encodings
    }

    /// Number of registered converters
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// Whether no converter is registered
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Capability of plugins that supply a payload converter
pub trait ConverterProvider {
    /// Converter supplied to the host
    fn payload_converter(&self) -> Arc<dyn PayloadConverter>;

    /// Register the supplied converter with a registry
    fn provide(&self, registry: &ConverterRegistry) -> Result<(), ConverterError> {
        registry.register(self.payload_converter())
    }
}
