//! dataconverter-transport - JSON payload conversion
//!
//! This crate provides:
//! - [`Payload`] envelope carrying metadata and encoded bytes
//! - [`PayloadConverter`] trait and the [`JsonPayloadConverter`] implementation
//! - [`ConverterRegistry`] for routing payloads by their encoding tag

mod converter;
mod payload;
mod registry;

pub use converter::{ConverterError, JsonPayloadConverter, PayloadConverter};
pub use payload::{METADATA_ENCODING, METADATA_ENCODING_JSON, Payload};
pub use registry::{ConverterProvider, ConverterRegistry};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ConverterError, ConverterProvider, ConverterRegistry, JsonPayloadConverter, Payload,
        PayloadConverter,
    };
}
