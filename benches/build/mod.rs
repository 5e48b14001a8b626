use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput};
use ordtree::build_balanced;

use crate::Lfsr;

/// Measure the time needed to build a minimal-height tree from an unsorted set
/// of keys.
pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("build_balanced");

    for n_values in [100, 1_000, 10_000] {
        let keys = Lfsr::default().next_keys(n_values);

        g.throughput(Throughput::Elements(n_values as _)); // Keys per second
        g.bench_function(BenchmarkId::new("n_values", n_values), |b| {
            b.iter(|| black_box(build_balanced(keys.iter().copied())))
        });
    }
}
