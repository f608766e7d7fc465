//! Criterion benchmarks for fragment parsing and serialization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use matrix_link::{IdentifierKind, Link};

/// Benchmark: Link::parse_fragment with varying fragment shapes
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let test_cases = [
        ("user", "#/@alice:example.com"),
        ("alias", "#/#rust:matrix.org"),
        ("room_id", "#/!qporfwt:matrix.org"),
        ("permalink", "#/!qporfwt:matrix.org/$event:matrix.org"),
        (
            "with_vias",
            "#/!qporfwt:matrix.org/$event:matrix.org?via=a.org&via=b.org&via=c.org",
        ),
        (
            "full",
            "#/#room:example.org?via=a.org&client=element.io&sharer=%40a%3Ab.org&web-instance[element.io]=chat.example.org",
        ),
    ];

    for (name, fragment) in test_cases {
        group.throughput(Throughput::Bytes(fragment.len() as u64));
        group.bench_with_input(BenchmarkId::new("fragment", name), &fragment, |b, f| {
            b.iter(|| Link::parse_fragment(black_box(f)));
        });
    }

    group.finish();
}

/// Benchmark: grammar classification without full link assembly
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let test_cases = [
        ("user", "@alice:example.com"),
        ("alias", "#rust:matrix.org"),
        ("permalink", "!qporfwt:matrix.org/$event:matrix.org"),
        ("rejected", "not an identifier"),
    ];

    for (name, identifier) in test_cases {
        group.bench_with_input(BenchmarkId::new("identifier", name), &identifier, |b, id| {
            b.iter(|| IdentifierKind::classify(black_box(id)));
        });
    }

    group.finish();
}

/// Benchmark: serialization of a parsed link
fn bench_serialize(c: &mut Criterion) {
    let link = Link::parse_fragment(
        "#/!qporfwt:matrix.org/$event:matrix.org?via=a.org&via=b.org&client=element.io",
    )
    .unwrap();

    c.bench_function("serialize", |b| {
        b.iter(|| black_box(&link).to_string());
    });
}

criterion_group!(benches, bench_parse, bench_classify, bench_serialize);
criterion_main!(benches);
