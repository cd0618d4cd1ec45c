//! Benchmarks for the rank tests

use catchment_significance::{mann_whitney, rank_sum, TwoSampleTest};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};

fn generate_sample(rng: &mut rand::rngs::StdRng, size: usize, shift: f64) -> Vec<f64> {
    (0..size).map(|_| shift + rng.gen::<f64>() * 100.0).collect()
}

fn bench_rank_tests(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_tests");
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);

    for &size in &[10, 100, 1000] {
        let first = generate_sample(&mut rng, size, 0.0);
        let second = generate_sample(&mut rng, size, 5.0);

        group.bench_with_input(BenchmarkId::new("rank_sum", size), &size, |b, _| {
            b.iter(|| rank_sum().test(black_box(&first), black_box(&second)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("mann_whitney", size), &size, |b, _| {
            b.iter(|| mann_whitney().test(black_box(&first), black_box(&second)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rank_tests);
criterion_main!(benches);
