//! Criterion benchmarks for link resolution.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use matrix_link::Link;
use matrix_link_resolve::{resolve, ClientRegistry, Platform, Preferences};

fn bench_resolve(c: &mut Criterion) {
    let registry = ClientRegistry::default();
    let prefs = Preferences::new();

    let mut group = c.benchmark_group("resolve");

    let test_cases = [
        ("alias", "#/#rust:matrix.org"),
        ("user", "#/@alice:example.com"),
        (
            "permalink_with_vias",
            "#/!qporfwt:matrix.org/$event:matrix.org?via=a.org&via=b.org",
        ),
        (
            "with_instance",
            "#/#rust:matrix.org?web-instance[element.io]=develop.element.io",
        ),
    ];

    for (name, fragment) in test_cases {
        let link = Link::parse_fragment(fragment).unwrap();
        let candidates = [Platform::Linux, Platform::DesktopWeb];
        group.bench_with_input(BenchmarkId::new("link", name), &link, |b, link| {
            b.iter(|| resolve(black_box(link), &candidates, &prefs, &registry));
        });
    }

    group.finish();
}

fn bench_detect(c: &mut Criterion) {
    const UA: &str =
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/112.0 Safari/537.36";

    c.bench_function("detect", |b| {
        b.iter(|| Platform::detect(black_box(UA), None));
    });
}

criterion_group!(benches, bench_resolve, bench_detect);
criterion_main!(benches);
