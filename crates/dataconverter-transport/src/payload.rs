//! Payload envelope exchanged with the workflow client

use std::borrow::Cow;
use std::collections::BTreeMap;

/// Metadata key holding the encoding identifier
pub const METADATA_ENCODING: &str = "encoding";

/// Encoding identifier for plain JSON payloads
pub const METADATA_ENCODING_JSON: &str = "json/plain";

/// Encoded value plus the metadata describing how it was encoded
///
/// Payloads are immutable once built; the fields are only reachable through
/// borrowing accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    metadata: BTreeMap<String, Vec<u8>>,
    data: Vec<u8>,
}

impl Payload {
    /// Create a payload from raw metadata and data
    pub fn new(metadata: BTreeMap<String, Vec<u8>>, data: Vec<u8>) -> Self {
        Self { metadata, data }
    }

    /// Create a payload tagged with a single encoding entry
    pub fn with_encoding(encoding: &str, data: Vec<u8>) -> Self {
        let mut metadata = BTreeMap::new();
        metadata.insert(METADATA_ENCODING.to_string(), encoding.as_bytes().to_vec());
        Self { metadata, data }
    }

    /// Metadata entries
    pub fn metadata(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.metadata
    }

    /// Encoded bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Encoding identifier, if present and valid UTF-8
    pub fn encoding(&self) -> Option<&str> {
        self.metadata
            .get(METADATA_ENCODING)
            .and_then(|v| std::str::from_utf8(v).ok())
    }

    /// Data as text, replacing invalid UTF-8 sequences
    pub fn data_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    /// Consume the payload, returning its metadata and data
    pub fn into_parts(self) -> (BTreeMap<String, Vec<u8>>, Vec<u8>) {
        (self.metadata, self.data)
    }
}
