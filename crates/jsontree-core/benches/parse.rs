//! Criterion benchmarks for the streaming tree builder.
//!
//! Measures full-pipeline throughput (tokenize + build) over three shapes:
//! a wide flat object, a deep nesting chain, and a realistic mixed
//! document repeated as concatenated roots.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use jsontree_core::parse;

/// A flat object with `n` numeric properties.
fn wide_object(n: usize) -> String {
    let mut out = String::from("{");
    for i in 0..n {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&format!("\"key{i}\":{i}"));
    }
    out.push('}');
    out
}

/// `n` levels of arrays around a single scalar.
fn deep_array(n: usize) -> String {
    format!("{}0{}", "[".repeat(n), "]".repeat(n))
}

/// A small realistic record, concatenated `n` times as separate roots.
fn concatenated_records(n: usize) -> String {
    let record = r#"{"id":17,"name":"sensor-a","online":true,"readings":[1.5,2.25,null],"meta":{"site":"north","tags":["a","b"]}}"#;
    std::iter::repeat(record)
        .take(n)
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_parse(c: &mut Criterion) {
    let wide = wide_object(1000);
    c.bench_function("parse_wide_object_1000", |b| {
        b.iter(|| parse(black_box(&wide)).unwrap())
    });

    let deep = deep_array(256);
    c.bench_function("parse_deep_array_256", |b| {
        b.iter(|| parse(black_box(&deep)).unwrap())
    });

    let records = concatenated_records(200);
    c.bench_function("parse_concatenated_records_200", |b| {
        b.iter(|| parse(black_box(&records)).unwrap())
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
