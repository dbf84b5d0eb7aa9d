//! Component benchmarks: single-value and batch classification.

#[path = "../../common/mod.rs"]
mod common;

use common::criterion_config::default_criterion;

use ordered_bins::testing::{random_values, uniform_boundaries};
use ordered_bins::{Edge, OrderedBins, Parallelism};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_classify_n_bins(c: &mut Criterion) {
    let mut group = c.benchmark_group("component/classify/n_bins");
    let values = random_values(1_000, 42, -0.5, 100.5);

    for n_bins in [4usize, 64, 1_024, 65_536] {
        let bins = OrderedBins::builder()
            .boundaries(uniform_boundaries(n_bins, 0.0, 100.0))
            .halo_below(1.0)
            .error_below(false)
            .halo_above(1.0)
            .error_above(false)
            .build()
            .expect("valid bins");

        group.throughput(Throughput::Elements(values.len() as u64));
        group.bench_with_input(BenchmarkId::new("right", n_bins), &values, |b, values| {
            b.iter(|| {
                for &x in values {
                    black_box(bins.classify(black_box(x)).ok());
                }
            });
        });
    }

    group.finish();
}

fn bench_classify_edge(c: &mut Criterion) {
    let mut group = c.benchmark_group("component/classify/edge");
    let boundaries: Vec<f64> = (0..=256).map(f64::from).collect();
    let values: Vec<f64> = (0..1_000).map(|i| f64::from(i % 257)).collect();

    for edge in [Edge::Left, Edge::Right] {
        let bins = OrderedBins::builder()
            .boundaries(boundaries.clone())
            .edge(edge)
            .build()
            .expect("valid bins");

        group.throughput(Throughput::Elements(values.len() as u64));
        let id = BenchmarkId::new(edge.to_string(), "on_boundaries");
        group.bench_with_input(id, &values, |b, values| {
            b.iter(|| {
                for &x in values {
                    black_box(bins.classify(black_box(x)).ok());
                }
            });
        });
    }

    group.finish();
}

fn bench_classify_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("component/classify/batch");
    let bins = OrderedBins::new(uniform_boundaries(256, 0.0, 1.0)).expect("valid bins");

    for batch_size in [100usize, 10_000, 1_000_000] {
        let values = random_values(batch_size, 7, 0.0, 1.0);
        group.throughput(Throughput::Elements(batch_size as u64));
        let modes = [("sequential", Parallelism::Sequential), ("parallel", Parallelism::Parallel)];
        for (label, par) in modes {
            group.bench_with_input(BenchmarkId::new(label, batch_size), &values, |b, values| {
                b.iter(|| black_box(bins.classify_slice(black_box(values), par)));
            });
        }
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = default_criterion();
    targets = bench_classify_n_bins, bench_classify_edge, bench_classify_batch
}
criterion_main!(benches);
