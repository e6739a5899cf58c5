//! Resampling an image onto a scaled grid.

use tracing::debug;

use crate::image::{Image, NdImage, Region};
use crate::interpolator::InterpolateImageFunction;

/// Resamples `image` to `output_size` pixels per axis.
///
/// Output pixel `o` samples the input at `start + (o + 0.5) * scale - 0.5`
/// with `scale = input_size / output_size`, so pixel centres line up and an
/// identity size reproduces integer indices exactly.
pub fn resample_image<I, F, const D: usize>(
    image: &I,
    output_size: [usize; D],
    interpolator: &mut F,
) -> NdImage<f64, D>
where
    I: Image<D>,
    F: InterpolateImageFunction<D>,
{
    let region = image.region();
    let components = image.components();
    let scale: [f64; D] = std::array::from_fn(|d| {
        if output_size[d] == 0 {
            1.0
        } else {
            region.size[d] as f64 / output_size[d] as f64
        }
    });

    debug!(
        interpolator = interpolator.name(),
        input = ?region.size,
        output = ?output_size,
        "Resampling image"
    );
    interpolator.initialize();

    let mut output = NdImage::filled(output_size, components, 0.0f64);
    for o in Region::from_size(output_size).indices() {
        let at: [f64; D] =
            std::array::from_fn(|d| region.start[d] as f64 + (o[d] as f64 + 0.5) * scale[d] - 0.5);
        let value = interpolator.evaluate_at_continuous_index(image, &at);
        output.set_pixel(&o, &value);
    }
    output
}

#[cfg(test)]
mod tests {
    use common::float_ext::FloatExt;

    use super::*;
    use crate::basic::LinearInterpolator;
    use crate::bco::BcoInterpolator;
    use crate::separable::LanczosInterpolator;

    #[test]
    fn test_identity_size_reproduces_image() {
        let image = NdImage::from_fn([7, 6], |[x, y]| ((x * 5 + y * 11) % 9) as f32);
        let mut lanczos = LanczosInterpolator::<2>::with_radius(3).unwrap();
        let output = resample_image(&image, [7, 6], &mut lanczos);

        for (a, b) in output.data().iter().zip(image.data()) {
            assert!(a.approx_eq_eps(*b as f64, 1e-9), "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_downsample_by_two_averages_pairs() {
        let image = NdImage::from_fn([8], |[x]| x as f64);
        let mut linear = LinearInterpolator::<1>::new();
        let output = resample_image(&image, [4], &mut linear);
        // centres at 0.5, 2.5, 4.5, 6.5
        assert_eq!(output.data(), &[0.5, 2.5, 4.5, 6.5]);
    }

    #[test]
    fn test_upsample_keeps_constant_and_components() {
        let image = NdImage::filled([3, 3], 2, 4.0f32);
        let mut bco = BcoInterpolator::<2>::new();
        let output = resample_image(&image, [9, 5], &mut bco);
        assert_eq!(output.size(), [9, 5]);
        assert!(output.data().iter().all(|v| (v - 4.0).abs() < 1e-12));
        assert_eq!(output.data().len(), 9 * 5 * 2);
    }

    #[test]
    fn test_shifted_input_region() {
        let image = NdImage::from_fn([4], |[x]| x as f64 * 2.0).with_start([100]);
        let mut linear = LinearInterpolator::<1>::new();
        let output = resample_image(&image, [4], &mut linear);
        assert_eq!(output.data(), &[0.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_empty_output() {
        let image = NdImage::filled([4, 4], 1, 1.0f64);
        let mut linear = LinearInterpolator::<2>::new();
        let output = resample_image(&image, [0, 3], &mut linear);
        assert!(output.data().is_empty());
    }
}
