//! One-dimensional weighting kernels.
//!
//! Every kernel maps a signed distance (in pixels) to a weight, given its
//! configured integer radius. Evaluation is always done in `f64`, whatever
//! the pixel type of the image being interpolated.
//!
//! - Windowed sinc: `K(x) = w(x) * sinc(pi x)` with Gaussian, Hamming,
//!   Cosine, Welch, Lanczos and Blackman windows ([`windowed_sinc`]).
//! - Prolate: an empirical 721-sample profile resampled to the radius
//!   ([`prolate`]).
//!
//! The bicubic-optimized (BCO) coefficients are not a [`WindowFunction`];
//! they live with their interpolator in [`crate::bco`].

pub mod prolate;
pub mod windowed_sinc;

#[cfg(test)]
mod tests;

use std::f64::consts::PI;
use std::fmt;

use crate::error::Result;

pub use prolate::ProlateKernel;
pub use windowed_sinc::{
    Blackman, BlackmanKernel, Cosine, CosineKernel, Gaussian, GaussianKernel, Hamming,
    HammingKernel, Lanczos, LanczosKernel, SincWindow, Welch, WelchKernel, WindowedSincKernel,
};

/// A radius-parametrized 1-D kernel usable by the separable interpolator.
pub trait WindowFunction: Clone + Default + fmt::Debug + Send + Sync + 'static {
    /// Human readable kernel name, used in errors and logs.
    const NAME: &'static str;

    /// Reconfigures the kernel. Derived factors are recomputed immediately;
    /// on error the previous configuration is kept.
    fn set_radius(&mut self, radius: u32) -> Result<()>;

    fn radius(&self) -> u32;

    /// Weight at signed distance `x`.
    fn evaluate(&self, x: f64) -> f64;

    /// Number of taps per axis the separable interpolator visits.
    #[inline]
    fn window_size(&self) -> usize {
        2 * self.radius() as usize + 1
    }
}

/// Normalized sinc, `sin(pi x) / (pi x)`, with its limit 1 at `x = 0`.
#[inline]
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        return 1.0;
    }
    let px = PI * x;
    px.sin() / px
}
