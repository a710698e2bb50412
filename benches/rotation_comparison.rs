use core::hint::black_box;

use criterion::{
    criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rotate::workload::Workload;
use rotate::Algorithm;

const SIZES: [usize; 4] = [100, 1000, 10_000, 100_000];

// Splits spread across the region, including lopsided and near-equal ones
fn splits(size: usize) -> impl Iterator<Item = usize> {
    [1, 16, size / 3, size / 2 - 5, size / 2, size / 2 + 5, size - 16, size - 1]
        .into_iter()
}

pub fn all_algorithms(c: &mut Criterion) {
    for size in SIZES {
        let mut g = c.benchmark_group(format!("rotate {size}"));
        g.throughput(Throughput::Elements(size as u64));

        let mut buffer = Workload::Random { seed: 0 }.generate(size);

        for algorithm in Algorithm::ALL {
            g.bench_with_input(
                BenchmarkId::from_parameter(algorithm),
                &size,
                |bench, &size| {
                    bench.iter(|| {
                        for na in splits(size) {
                            algorithm.rotate(
                                black_box(&mut buffer[..]),
                                na,
                                size - na,
                            );
                        }
                    })
                },
            );
        }

        g.finish();
    }
}

pub fn triple_shift_paths(c: &mut Criterion) {
    let mut g = c.benchmark_group("triple shift paths");
    let size = 10_000;
    let mut buffer = Workload::Sequential.generate(size);

    let cases = [
        ("small", 8),
        ("remainder", 1000),
        ("overflow", 4500),
        ("overlap", 4995),
        ("equal", 5000),
    ];

    for (name, na) in cases {
        for algorithm in [Algorithm::TripleShift, Algorithm::TripleShiftV2] {
            g.bench_function(format!("{algorithm} {name}"), |bench| {
                bench.iter(|| {
                    algorithm.rotate(black_box(&mut buffer[..]), na, size - na)
                })
            });
        }
    }

    g.finish();
}

criterion_group!(rotation_comparison, all_algorithms, triple_shift_paths);
criterion_main!(rotation_comparison);
