//! Per-pixel evaluation cost of the interpolators.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput};

use crate::image::NdImage;
use crate::interpolator::InterpolateImageFunction;
use crate::kernel::ProlateKernel;
use crate::{
    BSplineInterpolator, BcoInterpolator, HammingInterpolator, LanczosInterpolator,
    LinearInterpolator, ProlateInterpolator,
};

const SIZE: usize = 256;
const SAMPLES: usize = 4096;

/// Register interpolation benchmarks with Criterion.
pub fn benchmarks(c: &mut Criterion) {
    benchmark_interpolators(c);
    benchmark_radius(c);
    benchmark_table_build(c);
    benchmark_prolate_energy(c);
}

/// Smooth test image with a Gaussian spot in the middle.
fn generate_test_image(size: usize) -> NdImage<f32, 2> {
    let center = size as f32 / 2.0;
    let sigma = size as f32 / 8.0;
    NdImage::from_fn([size, size], |[x, y]| {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        (-(dx * dx + dy * dy) / (2.0 * sigma * sigma)).exp()
    })
}

/// Deterministic sub-pixel sample positions away from the border.
fn sample_points(size: usize, count: usize) -> Vec<[f64; 2]> {
    let span = (size - 16) as f64;
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            [8.0 + span * t, 8.0 + span * ((t * 7.31).fract())]
        })
        .collect()
}

fn run<F: InterpolateImageFunction<2>>(
    interpolator: &mut F,
    image: &NdImage<f32, 2>,
    points: &[[f64; 2]],
) -> f64 {
    points
        .iter()
        .map(|p| interpolator.evaluate_at_continuous_index(image, p)[0])
        .sum()
}

fn benchmark_interpolators(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolators");
    let image = generate_test_image(SIZE);
    let points = sample_points(SIZE, SAMPLES);
    group.throughput(Throughput::Elements(SAMPLES as u64));

    let mut linear = LinearInterpolator::<2>::new();
    group.bench_function("linear", |b| {
        b.iter(|| black_box(run(&mut linear, black_box(&image), &points)))
    });

    let mut bspline = BSplineInterpolator::<2>::new();
    bspline.set_input_image(&image);
    group.bench_function("bspline3", |b| {
        b.iter(|| black_box(run(&mut bspline, black_box(&image), &points)))
    });

    let mut bco = BcoInterpolator::<2>::new();
    group.bench_function("bco_r2", |b| {
        b.iter(|| black_box(run(&mut bco, black_box(&image), &points)))
    });

    if let Ok(mut hamming) = HammingInterpolator::<2>::with_radius(2) {
        hamming.initialize();
        group.bench_function("hamming_r2", |b| {
            b.iter(|| black_box(run(&mut hamming, black_box(&image), &points)))
        });
    }

    let mut prolate = ProlateInterpolator::<2>::new();
    prolate.set_kernel(ProlateKernel::new(2));
    prolate.initialize();
    group.bench_function("prolate_r2", |b| {
        b.iter(|| black_box(run(&mut prolate, black_box(&image), &points)))
    });

    group.finish();
}

fn benchmark_radius(c: &mut Criterion) {
    let mut group = c.benchmark_group("lanczos_radius");
    let image = generate_test_image(SIZE);
    let points = sample_points(SIZE, SAMPLES);
    group.throughput(Throughput::Elements(SAMPLES as u64));

    for radius in [1u32, 2, 3, 4, 6] {
        let Ok(mut lanczos) = LanczosInterpolator::<2>::with_radius(radius) else {
            continue;
        };
        lanczos.initialize();
        group.bench_function(BenchmarkId::new("evaluate", radius), |b| {
            b.iter(|| black_box(run(&mut lanczos, black_box(&image), &points)))
        });
    }

    group.finish();
}

fn benchmark_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_build");

    for radius in [2u32, 4, 8] {
        let Ok(mut hamming) = HammingInterpolator::<2>::with_radius(radius) else {
            continue;
        };
        group.bench_function(BenchmarkId::new("hamming", radius), |b| {
            b.iter(|| {
                hamming.modified();
                hamming.initialize();
                black_box(hamming.table().tap_count())
            })
        });
    }

    group.finish();
}

fn benchmark_prolate_energy(c: &mut Criterion) {
    let prolate = ProlateKernel::new(4);
    c.bench_function("prolate_compute_energy", |b| {
        b.iter(|| black_box(prolate.compute_energy(black_box(2.0))))
    });
}
