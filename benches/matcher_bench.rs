use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use aliasmatch::{AliasMatcher, matches, partition};

mod common;
use common::{generate_aliases, sample_records};

/// Free function: partitions the aliases on every call.
fn bench_matches_per_call(c: &mut Criterion) {
    let mut group = c.benchmark_group("matches_per_call");
    let records = sample_records();

    for size in [4usize, 64, 1024] {
        let aliases = generate_aliases(size);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &aliases, |b, aliases| {
            b.iter(|| {
                for record in &records {
                    black_box(matches(black_box(aliases.as_slice()), black_box(*record)));
                }
            })
        });
    }

    group.finish();
}

/// Prepared matcher: partitions once, reused across records.
fn bench_prepared_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepared_matcher");
    let records = sample_records();

    for size in [4usize, 64, 1024] {
        let prepared = AliasMatcher::new(generate_aliases(size));
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &prepared, |b, prepared| {
            b.iter(|| {
                for record in &records {
                    black_box(prepared.matches(black_box(*record)));
                }
            })
        });
    }

    group.finish();
}

fn bench_partition(c: &mut Criterion) {
    let aliases = generate_aliases(1024);
    c.bench_function("partition_1024", |b| {
        b.iter(|| black_box(partition(black_box(aliases.as_slice()))))
    });
}

criterion_group!(
    benches,
    bench_matches_per_call,
    bench_prepared_matcher,
    bench_partition
);
criterion_main!(benches);
