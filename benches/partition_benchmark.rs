//! Benchmarks for IP list partitioning and pattern compilation.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use geolist::pattern::compile_patterns;
use geolist::{AddressSet, Diagnostics};

struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}

/// Generate IP list lines: networks, hosts, full-width CIDRs and junk.
fn generate_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let a = (i >> 8) as u8;
            let b = i as u8;
            match i % 4 {
                0 => format!("10.{}.{}.0/24", a, b),
                1 => format!("172.{}.{}.1", a, b),
                2 => format!("192.168.{}.{}/32", a, b),
                _ => format!("host-{}", i),
            }
        })
        .collect()
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");

    for size in [1_000, 10_000, 100_000] {
        let lines = generate_lines(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &lines, |b, lines| {
            b.iter(|| AddressSet::partition(black_box(lines), &NullDiagnostics))
        });
    }

    group.finish();
}

fn bench_patterns(c: &mut Criterion) {
    let lines: Vec<String> = (0..500)
        .map(|i| format!(r"(^|\.)ads{}\.example\.(com|net)$", i))
        .collect();

    c.bench_function("compile_500_patterns", |b| {
        b.iter(|| compile_patterns(black_box(&lines), &NullDiagnostics))
    });
}

criterion_group!(benches, bench_partition, bench_patterns);
criterion_main!(benches);
