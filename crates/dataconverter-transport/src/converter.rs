//! Payload converter trait and JSON implementation

use crate::payload::{METADATA_ENCODING_JSON, Payload};
use dataconverter_core::PluginError;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Errors that can occur while converting payloads
#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("unable to encode: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("unable to decode: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("no converter registered for encoding: {0}")]
    UnknownEncoding(String),

    #[error("converter already registered for encoding: {0}")]
    DuplicateEncoding(String),
}

impl ConverterError {
    /// Returns true for value-to-payload failures
    pub fn is_encode(&self) -> bool {
        matches!(self, ConverterError::Encode(_))
    }

    /// Returns true for payload-to-value failures
    pub fn is_decode(&self) -> bool {
        matches!(self, ConverterError::Decode(_))
    }
}

impl From<ConverterError> for PluginError {
    fn from(err: ConverterError) -> Self {
        PluginError::SerializationError(err.to_string())
    }
}

/// Converts values to and from [`Payload`]s for one encoding
///
/// `decode_value`, `to_display_string` and `encoding` are object safe, so
/// converters can be stored as `dyn PayloadConverter` and routed by their
/// encoding tag. The typed methods need a concrete converter.
pub trait PayloadConverter: Send + Sync {
    /// Encode a value into a payload tagged with [`PayloadConverter::encoding`]
    fn to_payload<T: Serialize + ?Sized>(&self, value: &T) -> Result<Payload, ConverterError>
    where
        Self: Sized;

    /// Decode a payload's data into a value
    fn from_payload<T: DeserializeOwned>(&self, payload: &Payload) -> Result<T, ConverterError>
    where
        Self: Sized;

    /// Decode a payload's data into a generic JSON value
    fn decode_value(&self, payload: &Payload) -> Result<serde_json::Value, ConverterError>;

    /// Render a payload for diagnostics; never fails
    fn to_display_string(&self, payload: &Payload) -> String;

    /// Encoding identifier written to the payload metadata
    fn encoding(&self) -> &'static str;
}

/// Plain JSON converter backed by serde_json
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPayloadConverter;

impl JsonPayloadConverter {
    /// Create a new JSON converter
    pub fn new() -> Self {
        Self
    }
}

impl PayloadConverter for JsonPayloadConverter {
    fn to_payload<T: Serialize + ?Sized>(&self, value: &T) -> Result<Payload, ConverterError> {
        let data = serde_json::to_vec(value).map_err(ConverterError::Encode)?;
        Ok(Payload::with_encoding(self.encoding(), data))
    }

    fn from_payload<T: DeserializeOwned>(&self, payload: &Payload) -> Result<T, ConverterError> {
        serde_json::from_slice(payload.data()).map_err(ConverterError::Decode)
    }

    fn decode_value(&self, payload: &Payload) -> Result<serde_json::Value, ConverterError> {
        self.from_payload(payload)
    }

    fn to_display_string(&self, payload: &Payload) -> String {
        payload.data_lossy().into_owned()
    }

    fn encoding(&self) -> &'static str {
        METADATA_ENCODING_JSON
    }
}
