//! Test images and helpers shared by the unit tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::image::{Index, NdImage};

/// Initialize tracing subscriber for tests.
/// Safe to call multiple times - will only initialize once.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Scalar image of uniform noise in `[0, 1)`, reproducible from `seed`.
pub fn random_image<const D: usize>(size: [usize; D], seed: u64) -> NdImage<f64, D> {
    let mut rng = StdRng::seed_from_u64(seed);
    NdImage::from_fn(size, |_| rng.random::<f64>())
}

/// Vector image with `components` channels of noise in `[-1, 1)`.
pub fn random_vector_image<const D: usize>(
    size: [usize; D],
    components: usize,
    seed: u64,
) -> NdImage<f64, D> {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = size.iter().product::<usize>() * components;
    let data = (0..len).map(|_| rng.random_range(-1.0..1.0)).collect();
    NdImage::new(size, components, data)
}

/// Scalar image whose value is `offset + sum(slope[d] * index[d])`.
pub fn gradient_image<const D: usize>(
    size: [usize; D],
    slope: [f64; D],
    offset: f64,
) -> NdImage<f64, D> {
    NdImage::from_fn(size, |index: Index<D>| {
        offset + (0..D).map(|d| slope[d] * index[d] as f64).sum::<f64>()
    })
}

/// Indices at least `margin` pixels away from every edge.
pub fn interior_indices<const D: usize>(size: [usize; D], margin: usize) -> Vec<Index<D>> {
    let inner = crate::image::Region::new(
        [margin as i64; D],
        std::array::from_fn(|d| size[d].saturating_sub(2 * margin)),
    );
    inner.indices().collect()
}
