//! Nearest-neighbour and multilinear interpolation.
//!
//! Both read neighbours clamped into the image region. For in-range indices
//! clamping only affects taps whose weight is zero, so results are unchanged.

use std::marker::PhantomData;

use crate::image::{ContinuousIndex, Image, PixelValue, zero_pixel};
use crate::interpolator::InterpolateImageFunction;

/// Value of the pixel nearest to the continuous index (halves round up).
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighborInterpolator<const D: usize> {
    _dimension: PhantomData<[(); D]>,
}

impl<const D: usize> NearestNeighborInterpolator<D> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<const D: usize> InterpolateImageFunction<D> for NearestNeighborInterpolator<D> {
    fn name(&self) -> &'static str {
        "NearestNeighbor"
    }

    fn evaluate_at_continuous_index<I: Image<D>>(
        &mut self,
        image: &I,
        index: &ContinuousIndex<D>,
    ) -> PixelValue {
        let region = image.region();
        let mut value = zero_pixel(image.components());
        if region.is_empty() {
            return value;
        }
        let nearest: [i64; D] = std::array::from_fn(|d| (index[d] + 0.5).floor() as i64);
        image.read_pixel(&region.clamp(&nearest), &mut value);
        value
    }
}

/// Multilinear interpolation over the `2^D` surrounding pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearInterpolator<const D: usize> {
    _dimension: PhantomData<[(); D]>,
}

impl<const D: usize> LinearInterpolator<D> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<const D: usize> InterpolateImageFunction<D> for LinearInterpolator<D> {
    fn name(&self) -> &'static str {
        "Linear"
    }

    fn evaluate_at_continuous_index<I: Image<D>>(
        &mut self,
        image: &I,
        index: &ContinuousIndex<D>,
    ) -> PixelValue {
        let region = image.region();
        let components = image.components();
        let mut value = zero_pixel(components);
        if region.is_empty() {
            return value;
        }

        let base: [i64; D] = std::array::from_fn(|d| index[d].floor() as i64);
        let fraction: [f64; D] = std::array::from_fn(|d| index[d] - base[d] as f64);

        let mut pixel = zero_pixel(components);
        for corner in 0..(1usize << D) {
            let mut weight = 1.0;
            let mut neighbor = base;
            for d in 0..D {
                if corner & (1 << d) != 0 {
                    weight *= fraction[d];
                    neighbor[d] += 1;
                } else {
                    weight *= 1.0 - fraction[d];
                }
            }
            if weight == 0.0 {
                continue;
            }
            image.read_pixel(&region.clamp(&neighbor), &mut pixel);
            for (acc, &v) in value.iter_mut().zip(pixel.iter()) {
                *acc += weight * v;
            }
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::NdImage;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_nearest_rounds_half_up() {
        let image = NdImage::from_fn([4, 4], |[x, y]| (x + 10 * y) as f32);
        let mut nearest = NearestNeighborInterpolator::<2>::new();

        assert_eq!(nearest.evaluate_at_continuous_index(&image, &[0.4, 0.4])[0], 0.0);
        assert_eq!(nearest.evaluate_at_continuous_index(&image, &[0.5, 0.4])[0], 1.0);
        assert_eq!(nearest.evaluate_at_continuous_index(&image, &[1.6, 2.5])[0], 32.0);
    }

    #[test]
    fn test_nearest_clamps_outside() {
        let image = NdImage::from_fn([3], |[x]| x as f32);
        let mut nearest = NearestNeighborInterpolator::<1>::new();
        assert_eq!(nearest.evaluate_at_continuous_index(&image, &[-4.0])[0], 0.0);
        assert_eq!(nearest.evaluate_at_continuous_index(&image, &[9.0])[0], 2.0);
    }

    #[test]
    fn test_bilinear_center() {
        let image = NdImage::new([2, 2], 1, vec![0.0f32, 2.0, 2.0, 4.0]);
        let mut linear = LinearInterpolator::<2>::new();

        assert!((linear.evaluate_at_continuous_index(&image, &[0.0, 0.0])[0]).abs() < EPSILON);
        assert!((linear.evaluate_at_continuous_index(&image, &[1.0, 0.0])[0] - 2.0).abs() < EPSILON);
        // average of all four
        assert!((linear.evaluate_at_continuous_index(&image, &[0.5, 0.5])[0] - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_linear_reproduces_plane_in_3d() {
        let image = NdImage::from_fn([4, 5, 6], |[x, y, z]| (2 * x + 3 * y - z) as f64);
        let mut linear = LinearInterpolator::<3>::new();
        let at = [1.25, 2.5, 3.75];
        let expected = 2.0 * 1.25 + 3.0 * 2.5 - 3.75;
        let value = linear.evaluate_at_continuous_index(&image, &at)[0];
        assert!((value - expected).abs() < EPSILON, "{} vs {}", value, expected);
    }

    #[test]
    fn test_linear_at_last_pixel_does_not_read_past_edge() {
        let image = NdImage::from_fn([3, 3], |[x, y]| (x * y) as u8);
        let mut linear = LinearInterpolator::<2>::new();
        let value = linear.evaluate_at_continuous_index(&image, &[2.0, 2.0])[0];
        assert!((value - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_vector_pixels() {
        let image = NdImage::new([2], 2, vec![0.0f32, 10.0, 1.0, 20.0]);
        let mut linear = LinearInterpolator::<1>::new();
        let value = linear.evaluate_at_continuous_index(&image, &[0.5]);
        assert_eq!(value.len(), 2);
        assert!((value[0] - 0.5).abs() < EPSILON);
        assert!((value[1] - 15.0).abs() < EPSILON);
    }
}
