//! B-spline interpolation of order 0 to 3.
//!
//! For orders 2 and 3 the image is first converted to B-spline coefficients
//! by recursive causal/anticausal filtering along every axis with mirror
//! boundaries (Unser, 1993), so the spline passes through the samples.
//! Coefficients are computed by [`BSplineInterpolator::set_input_image`]
//! and stay bound to that image. An evaluation recomputes them only when
//! none are cached or the image geometry differs, so a caller switching to
//! another image of the same geometry must call `set_input_image` or
//! [`InterpolateImageFunction::initialize`] first. [`crate::resample_image`]
//! initializes before every pass.


use tracing::debug;

use crate::error::{Error, Result};
use crate::image::{ContinuousIndex, Image, NdImage, PixelValue, Region, zero_pixel};
use crate::interpolator::InterpolateImageFunction;
use crate::separable::{Tap, for_each_tap};

pub const DEFAULT_SPLINE_ORDER: u32 = 3;
pub const MAX_SPLINE_ORDER: u32 = 3;

/// Truncation tolerance of the causal initialization sum.
const PREFILTER_TOLERANCE: f64 = 1e-10;

#[derive(Debug, Clone)]
pub struct BSplineInterpolator<const D: usize> {
    spline_order: u32,
    coefficients: Option<NdImage<f64, D>>,
}

impl<const D: usize> Default for BSplineInterpolator<D> {
    fn default() -> Self {
        Self {
            spline_order: DEFAULT_SPLINE_ORDER,
            coefficients: None,
        }
    }
}

impl<const D: usize> BSplineInterpolator<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(spline_order: u32) -> Result<Self> {
        let mut interpolator = Self::new();
        interpolator.set_spline_order(spline_order)?;
        Ok(interpolator)
    }

    /// Changing the order drops cached coefficients.
    pub fn set_spline_order(&mut self, spline_order: u32) -> Result<()> {
        if spline_order > MAX_SPLINE_ORDER {
            return Err(Error::InvalidSplineOrder(spline_order));
        }
        if spline_order != self.spline_order {
            self.coefficients = None;
        }
        self.spline_order = spline_order;
        Ok(())
    }

    #[inline]
    pub fn spline_order(&self) -> u32 {
        self.spline_order
    }

    /// Computes and caches the spline coefficients of `image`.
    ///
    /// Must be called again whenever the pixel data changes without a change
    /// of region or component count.
    pub fn set_input_image<I: Image<D>>(&mut self, image: &I) {
        let region = image.region();
        let components = image.components();

        let mut data = vec![0.0f64; region.pixel_count() * components];
        for (i, index) in region.indices().enumerate() {
            image.read_pixel(&index, &mut data[i * components..(i + 1) * components]);
        }
        let mut coefficients = NdImage::new(region.size, components, data).with_start(region.start);

        if let Some(pole) = pole(self.spline_order) {
            for axis in 0..D {
                prefilter_axis(&mut coefficients, axis, pole);
            }
        }

        debug!(
            order = self.spline_order,
            dimension = D,
            pixels = region.pixel_count(),
            "Computed B-spline coefficients"
        );
        self.coefficients = Some(coefficients);
    }

    fn coefficients_match<I: Image<D>>(&self, image: &I) -> bool {
        self.coefficients.as_ref().is_some_and(|c| {
            Image::region(c) == image.region() && Image::components(c) == image.components()
        })
    }

    /// Drops cached coefficients; the next evaluation recomputes them.
    pub fn clear_input_image(&mut self) {
        self.coefficients = None;
    }

    pub fn evaluate_at_continuous_index<I: Image<D>>(
        &mut self,
        image: &I,
        index: &ContinuousIndex<D>,
    ) -> PixelValue {
        if !self.coefficients_match(image) {
            self.set_input_image(image);
        }
        let Some(coefficients) = self.coefficients.as_ref() else {
            return zero_pixel(image.components());
        };

        let region = Image::region(coefficients);
        let components = Image::components(coefficients);
        let mut value = zero_pixel(components);
        if region.is_empty() {
            return value;
        }

        let mut base = [0i64; D];
        let axis_taps: [[Tap; 4]; D] = std::array::from_fn(|d| {
            let (first, taps) = basis(self.spline_order, index[d]);
            base[d] = first;
            taps
        });
        let used = self.spline_order as usize + 1;
        let axes: [&[Tap]; D] = std::array::from_fn(|d| &axis_taps[d][..used]);

        let mut pixel = zero_pixel(components);
        for_each_tap(&axes, |offset, weight| {
            let at: [i64; D] = std::array::from_fn(|d| mirror(base[d] + offset[d], &region, d));
            coefficients.read_pixel(&at, &mut pixel);
            for (acc, &v) in value.iter_mut().zip(pixel.iter()) {
                *acc += weight * v;
            }
        });
        value
    }
}

impl<const D: usize> InterpolateImageFunction<D> for BSplineInterpolator<D> {
    fn name(&self) -> &'static str {
        "BSpline"
    }

    fn initialize(&mut self) {
        self.clear_input_image();
    }

    fn evaluate_at_continuous_index<I: Image<D>>(
        &mut self,
        image: &I,
        index: &ContinuousIndex<D>,
    ) -> PixelValue {
        BSplineInterpolator::evaluate_at_continuous_index(self, image, index)
    }
}

fn pole(spline_order: u32) -> Option<f64> {
    match spline_order {
        2 => Some(8.0f64.sqrt() - 3.0),
        3 => Some(3.0f64.sqrt() - 2.0),
        _ => None,
    }
}

/// First tap index and basis weights (offsets relative to it) at `x`.
fn basis(spline_order: u32, x: f64) -> (i64, [Tap; 4]) {
    let tap = |offset: i64, weight: f64| Tap { offset, weight };
    let zero = tap(0, 0.0);
    match spline_order {
        0 => ((x + 0.5).floor() as i64, [tap(0, 1.0), zero, zero, zero]),
        1 => {
            let base = x.floor();
            let t = x - base;
            (base as i64, [tap(0, 1.0 - t), tap(1, t), zero, zero])
        }
        2 => {
            let center = (x + 0.5).floor();
            let t = x - center;
            (
                center as i64 - 1,
                [
                    tap(0, 0.5 * (0.5 - t) * (0.5 - t)),
                    tap(1, 0.75 - t * t),
                    tap(2, 0.5 * (0.5 + t) * (0.5 + t)),
                    zero,
                ],
            )
        }
        _ => {
            let base = x.floor();
            let t = x - base;
            let t2 = t * t;
            let t3 = t2 * t;
            (
                base as i64 - 1,
                [
                    tap(0, (1.0 - t) * (1.0 - t) * (1.0 - t) / 6.0),
                    tap(1, (4.0 - 6.0 * t2 + 3.0 * t3) / 6.0),
                    tap(2, (1.0 + 3.0 * t + 3.0 * t2 - 3.0 * t3) / 6.0),
                    tap(3, t3 / 6.0),
                ],
            )
        }
    }
}

/// Mirror-boundary index along `axis` (whole-sample symmetric, no edge repeat).
fn mirror<const D: usize>(index: i64, region: &Region<D>, axis: usize) -> i64 {
    let start = region.start[axis];
    let len = region.size[axis] as i64;
    if len == 1 {
        return start;
    }
    let period = 2 * (len - 1);
    let mut local = (index - start).rem_euclid(period);
    if local >= len {
        local = period - local;
    }
    start + local
}

fn prefilter_axis<const D: usize>(coefficients: &mut NdImage<f64, D>, axis: usize, pole: f64) {
    let size = coefficients.size();
    let len = size[axis];
    if len < 2 {
        return;
    }

    let components = Image::components(coefficients);
    let stride = size[..axis].iter().product::<usize>() * components;
    let outer: usize = size[axis + 1..].iter().product();
    let inner = stride;
    let gain = (1.0 - pole) * (1.0 - 1.0 / pole);

    let data = coefficients.data_mut();
    let mut line = vec![0.0f64; len];
    for o in 0..outer {
        let block = o * inner * len;
        for i in 0..inner {
            let first = block + i;
            for (k, v) in line.iter_mut().enumerate() {
                *v = data[first + k * stride] * gain;
            }
            filter_line(&mut line, pole);
            for (k, v) in line.iter().enumerate() {
                data[first + k * stride] = *v;
            }
        }
    }
}

/// In-place causal then anticausal single-pole recursion.
fn filter_line(c: &mut [f64], z: f64) {
    let n = c.len();
    c[0] = initial_causal(c, z);
    for k in 1..n {
        c[k] += z * c[k - 1];
    }
    c[n - 1] = (z / (z * z - 1.0)) * (z * c[n - 2] + c[n - 1]);
    for k in (0..n - 1).rev() {
        c[k] = z * (c[k + 1] - c[k]);
    }
}

fn initial_causal(c: &[f64], z: f64) -> f64 {
    let n = c.len();
    let horizon = (PREFILTER_TOLERANCE.ln() / z.abs().ln()).ceil() as usize;

    if horizon < n {
        let mut zn = z;
        let mut sum = c[0];
        for &v in &c[1..horizon] {
            sum += zn * v;
            zn *= z;
        }
        sum
    } else {
        let iz = 1.0 / z;
        let mut zn = z;
        let mut z2n = z.powi(n as i32 - 1);
        let mut sum = c[0] + z2n * c[n - 1];
        z2n *= z2n * iz;
        for &v in &c[1..n - 1] {
            sum += (zn + z2n) * v;
            zn *= z;
            z2n *= iz;
        }
        sum / (1.0 - zn * zn)
    }
}
