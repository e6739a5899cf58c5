//! Error types for kernel configuration and interpolation setup.

use thiserror::Error;

/// Errors raised while configuring kernels and interpolators.
///
/// Evaluation itself never fails: every error is a configuration error
/// reported at `set_*`/`initialize` time.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid radius {radius} for {kernel}: must be at least {min}")]
    InvalidRadius {
        kernel: &'static str,
        radius: u32,
        min: u32,
    },

    #[error("Invalid resample ratio {0}: must be finite and strictly positive")]
    InvalidResampleRatio(f64),

    #[error("Unsupported B-spline order {0}: supported orders are 0..=3")]
    InvalidSplineOrder(u32),

    #[error("Invalid interpolator configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse interpolator configuration")]
    ConfigParse(#[from] serde_yml::Error),

    #[error("Failed to read interpolator configuration: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
