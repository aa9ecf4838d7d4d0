//! JSON Payload Converter Benchmarks
//!
//! Measures encode (value to payload) and decode (payload to value) cost of
//! the JSON converter for typical workflow argument sizes.
//!
//! # Payload Sizes
//!
//! - **Small**: ~100 bytes (signal argument, feature flag)
//! - **Medium**: ~1KB (activity input record)
//! - **Large**: ~100KB (batch activity result)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dataconverter_transport::{JsonPayloadConverter, PayloadConverter};
use serde::{Deserialize, Serialize};
use std::hint::black_box;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SmallArg {
    key: String,
    flags: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MediumArg {
    customer_id: u64,
    email: String,
    display_name: String,
    attributes: Vec<KeyValue>,
    permissions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct KeyValue {
    key: String,
    value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LargeArg {
    batch_id: u64,
    rows: Vec<MediumArg>,
}

fn small() -> SmallArg {
    SmallArg {
        key: "feature.payments.enabled".to_string(),
        flags: 0b1011,
    }
}

fn medium(id: u64) -> MediumArg {
    MediumArg {
        customer_id: id,
        email: format!("customer{id}@example.com"),
        display_name: format!("Customer {id}"),
        attributes: (0..10)
            .map(|i| KeyValue {
                key: format!("attr_{i}"),
                value: format!("value_{i}_for_{id}"),
            })
            .collect(),
        permissions: vec!["read".into(), "write".into(), "admin".into()],
    }
}

fn large() -> LargeArg {
    LargeArg {
        batch_id: 7,
        rows: (0..100).map(medium).collect(),
    }
}

fn bench_size<T>(c: &mut Criterion, name: &str, value: &T)
where
    T: Serialize + for<'de> Deserialize<'de>,
{
    let converter = JsonPayloadConverter::new();
    let payload = match converter.to_payload(value) {
        Ok(payload) => payload,
        Err(e) => panic!("benchmark value must encode: {e}"),
    };

    let mut group = c.benchmark_group("json_converter");
    group.throughput(Throughput::Bytes(payload.data().len() as u64));

    group.bench_with_input(BenchmarkId::new("encode", name), value, |b, v| {
        b.iter(|| converter.to_payload(black_box(v)))
    });

    group.bench_with_input(BenchmarkId::new("decode", name), &payload, |b, p| {
        b.iter(|| converter.from_payload::<T>(black_box(p)))
    });

    group.finish();
}

fn bench_converter(c: &mut Criterion) {
    bench_size(c, "small", &small());
    bench_size(c, "medium", &medium(42));
    bench_size(c, "large", &large());
}

criterion_group!(benches, bench_converter);
criterion_main!(benches);
