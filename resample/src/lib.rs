//! Resample - continuous-index image interpolation.
//!
//! Evaluates N-dimensional images at real-valued indices with separable
//! kernels, and tells tiled pipelines how much border each interpolator
//! needs:
//! - Windowed-sinc kernels (Gaussian, Hamming, Cosine, Welch, Lanczos,
//!   Blackman) and the empirical prolate profile
//! - A cached generic separable interpolator over any of them
//! - The bicubic-optimized (BCO) interpolator
//! - Nearest-neighbour, linear and B-spline interpolators
//! - Halo advice for streaming and run-time selection from YAML
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use resample::{HammingInterpolator, NdImage, calculate_needed_radius_for_interpolator};
//!
//! let image = NdImage::filled([64, 64], 1, 0.5f32);
//! let mut interpolator = HammingInterpolator::<2>::with_radius(3)?;
//! interpolator.set_normalize_weight(true);
//! interpolator.initialize();
//!
//! let value = interpolator.evaluate_at_continuous_index(&image, &[10.25, 7.5]);
//! let halo = calculate_needed_radius_for_interpolator(&interpolator);
//! ```

pub mod basic;
pub mod bco;
pub mod boundary;
pub mod bspline;
pub mod config;
pub mod error;
pub mod image;
pub mod interpolator;
pub mod kernel;
pub mod radius;
pub mod resampling;
pub mod separable;

#[cfg(test)]
pub(crate) mod testing;

#[cfg(feature = "bench")]
pub mod bench;

// ============================================================================
// Images and boundaries
// ============================================================================

pub use boundary::BoundaryCondition;
pub use image::{ContinuousIndex, Image, Index, NdImage, PixelValue, Region};

// ============================================================================
// Kernels
// ============================================================================

pub use kernel::{
    BlackmanKernel, CosineKernel, GaussianKernel, HammingKernel, LanczosKernel, ProlateKernel,
    WelchKernel, WindowFunction,
};

// ============================================================================
// Interpolators
// ============================================================================

pub use basic::{LinearInterpolator, NearestNeighborInterpolator};
pub use bco::BcoInterpolator;
pub use bspline::BSplineInterpolator;
pub use interpolator::{AnyInterpolator, InterpolateImageFunction};
pub use separable::{
    BlackmanInterpolator, CosineInterpolator, GaussianInterpolator, GenericInterpolator,
    HammingInterpolator, LanczosInterpolator, ProlateInterpolator, WelchInterpolator,
};

// ============================================================================
// Halo advice, configuration, resampling
// ============================================================================

pub use config::{InterpolatorConfig, InterpolatorKind};
pub use error::{Error, Result};
pub use radius::{calculate_needed_radius_for_interpolator, pad_region_for_interpolator};
pub use resampling::resample_image;
