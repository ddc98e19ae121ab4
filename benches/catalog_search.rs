// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for catalog loading and Explore queries.
//!
//! Measures the performance of:
//! - Loading and validating the bundled dataset
//! - Text, type and tag search over all sources
//! - Resolving an exhibition part in declared order

use cabinet::catalog::{Catalog, EmbeddedData, SourceQuery};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");

    group.bench_function("load_bundled", |b| {
        b.iter(|| black_box(Catalog::load(EmbeddedData)));
    });

    group.finish();
}

/// Each query shape the Explore screen can produce.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_search");
    let Ok(catalog) = Catalog::load(EmbeddedData) else {
        return;
    };

    let queries = [
        ("empty", SourceQuery::default()),
        ("text", SourceQuery::new("print", None, None)),
        ("type", SourceQuery::new("", Some("Object"), None)),
        ("text_type_tag", SourceQuery::new("a", Some("Object"), Some("science"))),
    ];

    for (name, query) in &queries {
        group.bench_function(*name, |b| {
            b.iter(|| black_box(catalog.search(black_box(query))));
        });
    }

    group.finish();
}

fn bench_part(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");
    let Ok(catalog) = Catalog::load(EmbeddedData) else {
        return;
    };

    group.bench_function("objects_by_part", |b| {
        b.iter(|| {
            black_box(catalog.exhibition_objects_by_part(
                black_box("soviet-central-asia"),
                black_box("everyday-life"),
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_load, bench_search, bench_part);
criterion_main!(benches);
