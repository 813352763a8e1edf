use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use passwordgen::{analyze, generate_with, GenerationPolicy};

fn criterion_benchmark_generate(c: &mut Criterion) {
    let policy = GenerationPolicy {
        length: 32,
        ..GenerationPolicy::default()
    };
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("generate 32 characters", |b| {
        b.iter(|| generate_with(black_box(&policy), &mut rng))
    });
}

fn criterion_benchmark_analyze(c: &mut Criterion) {
    c.bench_function("analyze strong password", |b| {
        b.iter(|| analyze(black_box("Tr0ub4dor&3xyzLongEnough")))
    });
    c.bench_function("analyze common password", |b| {
        b.iter(|| analyze(black_box("password123")))
    });
}

criterion_group!(
    benches,
    criterion_benchmark_generate,
    criterion_benchmark_analyze
);
criterion_main!(benches);
