//! Property-based tests for the JSON payload converter
//!
//! Tests that any JSON-representable value survives an encode/decode cycle
//! and that every encoded payload carries the same encoding tag.

use dataconverter_transport::{
    JsonPayloadConverter, METADATA_ENCODING, METADATA_ENCODING_JSON, Payload, PayloadConverter,
};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ActivityResult {
    id: u64,
    name: String,
    retries: Vec<u32>,
    note: Option<String>,
}

// Strategy: Generate nested JSON values (float-free so equality is exact)
fn arb_json_value() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::Bool),
        any::<i64>().prop_map(|i| serde_json::Value::Number(i.into())),
        ".*".prop_map(serde_json::Value::String),
    ];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(serde_json::Value::Array),
            prop::collection::btree_map("[a-z]{1,8}", inner, 0..4)
                .prop_map(|m| serde_json::Value::Object(m.into_iter().collect())),
        ]
    })
}

fn arb_activity_result() -> impl Strategy<Value = ActivityResult> {
    (
        any::<u64>(),
        ".*",
        prop::collection::vec(any::<u32>(), 0..8),
        proptest::option::of(".*"),
    )
        .prop_map(|(id, name, retries, note)| ActivityResult {
            id,
            name,
            retries,
            note,
        })
}

proptest! {
    /// Property: decoding an encoded JSON value reproduces it
    #[test]
    fn proptest_json_value_roundtrip(value in arb_json_value()) {
        let converter = JsonPayloadConverter::new();

        let payload = converter.to_payload(&value).expect("JSON values always encode");
        let decoded: serde_json::Value = converter
            .from_payload(&payload)
            .expect("encoded payload should decode");

        prop_assert_eq!(decoded, value);
    }

    /// Property: typed records roundtrip through the converter
    #[test]
    fn proptest_typed_record_roundtrip(record in arb_activity_result()) {
        let converter = JsonPayloadConverter::new();

        let payload = converter.to_payload(&record).expect("record should encode");
        let decoded: ActivityResult = converter
            .from_payload(&payload)
            .expect("record should decode");

        prop_assert_eq!(decoded, record);
    }

    /// Property: metadata is exactly the json/plain encoding tag
    #[test]
    fn proptest_metadata_is_single_encoding_entry(value in arb_json_value()) {
        let converter = JsonPayloadConverter::new();

        let payload = converter.to_payload(&value).expect("JSON values always encode");

        let mut expected = BTreeMap::new();
        expected.insert(METADATA_ENCODING.to_string(), METADATA_ENCODING_JSON.as_bytes().to_vec());
        prop_assert_eq!(payload.metadata(), &expected);
        prop_assert_eq!(converter.encoding(), METADATA_ENCODING_JSON);
    }

    /// Property: display never fails and mirrors UTF-8 data exactly
    #[test]
    fn proptest_display_mirrors_utf8_data(text in ".*") {
        let converter = JsonPayloadConverter::new();
        let payload = Payload::with_encoding(METADATA_ENCODING_JSON, text.clone().into_bytes());

        prop_assert_eq!(converter.to_display_string(&payload), text);
    }

    /// Property: arbitrary bytes never panic the decoder
    #[test]
    fn proptest_arbitrary_bytes_decode_without_panic(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let converter = JsonPayloadConverter::new();
        let payload = Payload::with_encoding(METADATA_ENCODING_JSON, data);

        let result = converter.from_payload::<serde_json::Value>(&payload);

        if let Err(err) = result {
            prop_assert!(err.is_decode());
        }
        let _ = converter.to_display_string(&payload);
    }
}

#[test]
fn test_example_object_payload() {
    let converter = JsonPayloadConverter::new();

    let payload = converter
        .to_payload(&serde_json::json!({"x": 1}))
        .expect("Should encode");

    assert_eq!(payload.encoding(), Some("json/plain"));
    assert_eq!(payload.data(), br#"{"x":1}"#);
    let decoded: serde_json::Value = converter.from_payload(&payload).expect("Should decode");
    assert_eq!(decoded, serde_json::json!({"x": 1}));
}

#[test]
fn test_display_of_non_json_data() {
    let converter = JsonPayloadConverter::new();
    let payload = Payload::with_encoding(METADATA_ENCODING_JSON, b"hello".to_vec());

    assert_eq!(converter.to_display_string(&payload), "hello");
}
