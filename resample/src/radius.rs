//! Halo advice for tiled and streamed pipelines.
//!
//! Before an output tile is interpolated, the input region it reads from has
//! to be grown by the interpolator's reach so every tap lands in a buffered
//! pixel. [`calculate_needed_radius_for_interpolator`] returns that reach for
//! every interpolator this crate knows; [`pad_region_for_interpolator`]
//! applies it.

use std::any::{Any, type_name};

use tracing::warn;

use crate::basic::{LinearInterpolator, NearestNeighborInterpolator};
use crate::bco::BcoInterpolator;
use crate::bspline::BSplineInterpolator;
use crate::image::Region;
use crate::interpolator::{AnyInterpolator, InterpolateImageFunction};
use crate::separable::{
    BlackmanInterpolator, CosineInterpolator, GaussianInterpolator, HammingInterpolator,
    LanczosInterpolator, ProlateInterpolator, WelchInterpolator,
};

/// Halo of nearest-neighbour and linear interpolation.
pub const NEIGHBOR_HALO: u32 = 1;

/// Halo of B-spline interpolation, whatever the order.
pub const BSPLINE_HALO: u32 = 2;

/// Border, in pixels, that must surround a region so `interpolator` can be
/// evaluated anywhere inside it.
///
/// Returns 0 and logs a warning for interpolator types it does not know.
pub fn calculate_needed_radius_for_interpolator<T, const D: usize>(interpolator: &T) -> u32
where
    T: InterpolateImageFunction<D>,
{
    needed_radius::<D>(interpolator as &dyn Any).unwrap_or_else(|| {
        warn!(
            interpolator = type_name::<T>(),
            "Unknown interpolator type, no halo added"
        );
        0
    })
}

fn needed_radius<const D: usize>(interpolator: &dyn Any) -> Option<u32> {
    if interpolator.is::<NearestNeighborInterpolator<D>>()
        || interpolator.is::<LinearInterpolator<D>>()
    {
        return Some(NEIGHBOR_HALO);
    }
    if interpolator.is::<BSplineInterpolator<D>>() {
        return Some(BSPLINE_HALO);
    }

    macro_rules! radius_of {
        ($($ty:ident),+ $(,)?) => {
            $(
                if let Some(known) = interpolator.downcast_ref::<$ty<D>>() {
                    return Some(known.radius());
                }
            )+
        };
    }
    radius_of!(
        GaussianInterpolator,
        HammingInterpolator,
        CosineInterpolator,
        WelchInterpolator,
        LanczosInterpolator,
        BlackmanInterpolator,
        ProlateInterpolator,
        BcoInterpolator,
    );

    interpolator
        .downcast_ref::<AnyInterpolator<D>>()
        .and_then(|any| needed_radius::<D>(any.inner_any()))
}

/// `region` grown by the interpolator's halo on every side, cropped to
/// `largest`. `None` when the padded region misses `largest` entirely.
pub fn pad_region_for_interpolator<T, const D: usize>(
    region: &Region<D>,
    interpolator: &T,
    largest: &Region<D>,
) -> Option<Region<D>>
where
    T: InterpolateImageFunction<D>,
{
    let halo = calculate_needed_radius_for_interpolator(interpolator);
    region.padded(halo).cropped_by(largest)
}
