use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gqem_core::{CountMatrix, Gqem, Trials, compute_predictions, log_likelihood, sample};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn bench_predictions(c: &mut Criterion) {
    let model = Gqem::from_angles(-0.12, -1.54, -0.71, -0.86, 1.26).unwrap();
    let data = CountMatrix::from([[70, 63, 6], [49, 48, 10], [64, 49, 5], [46, 63, 91]]);
    let n = Trials::Uniform(100);
    let mut rng = SmallRng::seed_from_u64(42);

    c.bench_function("compute_predictions", |b| {
        b.iter(|| compute_predictions(black_box(&model)))
    });

    c.bench_function("log_likelihood_n100", |b| {
        b.iter(|| log_likelihood(black_box(&model), &n, black_box(&data)))
    });

    c.bench_function("sample_n100", |b| b.iter(|| sample(&model, &n, &mut rng)));
}

criterion_group!(benches, bench_predictions);
criterion_main!(benches);
