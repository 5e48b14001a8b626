use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use ordtree::{stats, AvlTree, TreeView};

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    n_values: usize,
    bench_name: &'static str,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(v.bench_name, v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("stats");

    for n_values in [100, 1_000, 10_000] {
        let t = Lfsr::default()
            .next_keys(n_values)
            .into_iter()
            .collect::<AvlTree<_>>();

        bench_count_nodes(n_values, &mut g, &t);
        bench_count_leaves(n_values, &mut g, &t);
        bench_height(n_values, &mut g, &t);
        bench_degree(n_values, &mut g, &t);
        bench_in_order(n_values, &mut g, &t);
    }
}

/// Measure a full in-order walk of the keys.
fn bench_in_order<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &AvlTree<u16>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "in_order",
    };

    g.throughput(Throughput::Elements(n_values as _));
    // Values per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            for v in t.iter() {
                black_box(v);
            }
        })
    });
}

macro_rules! stats_bench {
    (
        $name:ident
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &AvlTree<u16>)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                g.throughput(Throughput::Elements(n_values as _));
                // Nodes visited per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| black_box(stats::$name(t.root())))
                });
            }
        }
    }
}

stats_bench!(count_nodes);
stats_bench!(count_leaves);
stats_bench!(height);
stats_bench!(degree);
