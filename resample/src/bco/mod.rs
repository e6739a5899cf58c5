//! Bicubic-optimized (BCO) interpolator.
//!
//! A self-contained separable interpolator that derives one coefficient
//! vector of `2r + 1` taps per axis on every call, from the cubic
//! convolution kernel with shape constant `alpha` stretched over the radius:
//!
//! ```text
//! W(d) = (a+2)|d|^3 - (a+3)|d|^2 + 1          for |d| <= 1
//! W(d) = a|d|^3 - 5a|d|^2 + 8a|d| - 4a        for 1 < |d| <= 2
//! W(d) = 0                                    otherwise
//! ```
//!
//! with `d` measured in units of `r / 2` pixels. Each vector is divided by
//! its own sum. Nothing is cached.
//!
//! Unlike [`crate::separable::GenericInterpolator`], neighbours are always
//! clamped into the image region here; no boundary condition is consulted.
//! With `ZeroFluxNeumann` the two agree, with other policies edge pixels
//! differ.


use smallvec::SmallVec;
use tracing::debug;

use crate::error::{Error, Result};
use crate::image::{ContinuousIndex, Image, PixelValue, zero_pixel};
use crate::interpolator::InterpolateImageFunction;
use crate::separable::{Tap, for_each_tap};

/// Smallest radius the piecewise cubic needs (a 5-tap window).
pub const MIN_BCO_RADIUS: u32 = 2;

/// Catmull-Rom shape constant.
pub const DEFAULT_ALPHA: f64 = -0.5;

/// Per-axis coefficient vector, `2r + 1` entries.
pub type BcoCoefficients = SmallVec<[f64; 8]>;

#[derive(Debug, Clone)]
pub struct BcoInterpolator<const D: usize> {
    radius: u32,
    alpha: f64,
}

impl<const D: usize> Default for BcoInterpolator<D> {
    fn default() -> Self {
        Self {
            radius: MIN_BCO_RADIUS,
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl<const D: usize> BcoInterpolator<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_radius(radius: u32) -> Result<Self> {
        let mut interpolator = Self::new();
        interpolator.set_radius(radius)?;
        Ok(interpolator)
    }

    /// Fails for `radius < 2`, leaving the previous radius in place.
    pub fn set_radius(&mut self, radius: u32) -> Result<()> {
        if radius < MIN_BCO_RADIUS {
            return Err(Error::InvalidRadius {
                kernel: "BCO",
                radius,
                min: MIN_BCO_RADIUS,
            });
        }
        self.radius = radius;
        Ok(())
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[inline]
    pub fn window_size(&self) -> usize {
        2 * self.radius as usize + 1
    }

    /// Nothing to precompute; kept for symmetry with the cached interpolators.
    pub fn initialize(&mut self) {
        debug!(
            radius = self.radius,
            alpha = self.alpha,
            dimension = D,
            "BCO interpolator configured"
        );
    }

    /// Normalized coefficients for one axis at continuous coordinate `index_value`.
    ///
    /// Entry `i` weights the neighbour `floor(index_value + 0.5) + i - r`.
    pub fn evaluate_coef(&self, index_value: f64) -> BcoCoefficients {
        let radius = self.radius as i64;
        let alpha = self.alpha;
        let offset = index_value - (index_value + 0.5).floor();
        let step = 4.0 / (2 * radius) as f64;

        let mut coef: BcoCoefficients = (-radius..=radius)
            .map(|i| {
                let dist = (i as f64 * step - offset * step).abs();
                if dist <= 1.0 {
                    (alpha + 2.0) * dist * dist * dist - (alpha + 3.0) * dist * dist + 1.0
                } else if dist <= 2.0 {
                    alpha * dist * dist * dist - 5.0 * alpha * dist * dist + 8.0 * alpha * dist
                        - 4.0 * alpha
                } else {
                    0.0
                }
            })
            .collect();

        let sum: f64 = coef.iter().sum();
        if sum != 0.0 {
            coef.iter_mut().for_each(|c| *c /= sum);
        }
        coef
    }

    /// Interpolated value at `index`, neighbours clamped to the image region.
    pub fn evaluate_at_continuous_index<I: Image<D>>(
        &self,
        image: &I,
        index: &ContinuousIndex<D>,
    ) -> PixelValue {
        let region = image.region();
        let components = image.components();
        let mut value = zero_pixel(components);
        if region.is_empty() {
            return value;
        }

        let radius = self.radius as i64;
        let mut base = [0i64; D];
        let axis_taps: [SmallVec<[Tap; 8]>; D] = std::array::from_fn(|d| {
            base[d] = (index[d] + 0.5).floor() as i64;
            self.evaluate_coef(index[d])
                .iter()
                .enumerate()
                .map(|(i, &weight)| Tap {
                    offset: i as i64 - radius,
                    weight,
                })
                .collect()
        });
        let axes: [&[Tap]; D] = std::array::from_fn(|d| axis_taps[d].as_slice());

        let mut pixel = zero_pixel(components);
        for_each_tap(&axes, |offset, weight| {
            let neighbor: [i64; D] = std::array::from_fn(|d| base[d] + offset[d]);
            image.read_pixel(&region.clamp(&neighbor), &mut pixel);
            for (acc, &v) in value.iter_mut().zip(pixel.iter()) {
                *acc += weight * v;
            }
        });

        value
    }
}

impl<const D: usize> InterpolateImageFunction<D> for BcoInterpolator<D> {
    fn name(&self) -> &'static str {
        "BCO"
    }

    fn initialize(&mut self) {
        BcoInterpolator::initialize(self);
    }

    fn evaluate_at_continuous_index<I: Image<D>>(
        &mut self,
        image: &I,
        index: &ContinuousIndex<D>,
    ) -> PixelValue {
        BcoInterpolator::evaluate_at_continuous_index(self, image, index)
    }
}
