use criterion::{criterion_group, criterion_main};

fn interpolation_benchmarks(c: &mut criterion::Criterion) {
    resample::bench::interpolation::benchmarks(c);
}

criterion_group!(benches, interpolation_benchmarks);
criterion_main!(benches);
