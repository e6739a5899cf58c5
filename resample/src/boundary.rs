//! Boundary-condition policies for neighbour reads outside the image region.
//!
//! Only the generic separable interpolator consults these. The BCO
//! interpolator always clamps into the region on its own, so the two paths
//! can disagree on edge pixels when a non-clamping policy is selected.

use serde::{Deserialize, Serialize};

use crate::image::{Index, Region};

/// How a neighbour index outside the buffered region is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryCondition {
    /// Replicate the nearest edge pixel.
    #[default]
    ZeroFluxNeumann,
    /// Substitute a fixed value for every component.
    Constant(f64),
    /// Wrap around the region.
    Periodic,
    /// Drop the tap: it contributes neither a value nor a weight.
    Clip,
}

/// Result of resolving one neighbour index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<const D: usize> {
    /// Read the image at this in-region index.
    Pixel(Index<D>),
    /// Use this value for every component.
    Value(f64),
    /// Skip the tap.
    Skip,
}

impl BoundaryCondition {
    #[inline]
    pub fn resolve<const D: usize>(&self, index: &Index<D>, region: &Region<D>) -> Resolved<D> {
        if region.contains(index) {
            return Resolved::Pixel(*index);
        }
        if region.is_empty() {
            return match self {
                BoundaryCondition::Constant(value) => Resolved::Value(*value),
                _ => Resolved::Skip,
            };
        }

        match self {
            BoundaryCondition::ZeroFluxNeumann => Resolved::Pixel(region.clamp(index)),
            BoundaryCondition::Constant(value) => Resolved::Value(*value),
            BoundaryCondition::Periodic => Resolved::Pixel(std::array::from_fn(|d| {
                let size = region.size[d] as i64;
                region.start[d] + (index[d] - region.start[d]).rem_euclid(size)
            })),
            BoundaryCondition::Clip => Resolved::Skip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> Region<2> {
        Region::new([2, 3], [4, 5])
    }

    #[test]
    fn test_inside_is_passed_through() {
        for bc in [
            BoundaryCondition::ZeroFluxNeumann,
            BoundaryCondition::Constant(7.0),
            BoundaryCondition::Periodic,
            BoundaryCondition::Clip,
        ] {
            assert_eq!(bc.resolve(&[3, 4], &region()), Resolved::Pixel([3, 4]));
        }
    }

    #[test]
    fn test_neumann_clamps_each_axis() {
        let bc = BoundaryCondition::ZeroFluxNeumann;
        assert_eq!(bc.resolve(&[0, 100], &region()), Resolved::Pixel([2, 7]));
        assert_eq!(bc.resolve(&[6, 2], &region()), Resolved::Pixel([5, 3]));
    }

    #[test]
    fn test_constant_substitutes_value() {
        let bc = BoundaryCondition::Constant(-1.5);
        assert_eq!(bc.resolve(&[1, 3], &region()), Resolved::Value(-1.5));
    }

    #[test]
    fn test_periodic_wraps() {
        let bc = BoundaryCondition::Periodic;
        // x: start 2, size 4 -> 6 wraps to 2, 1 wraps to 5
        assert_eq!(bc.resolve(&[6, 3], &region()), Resolved::Pixel([2, 3]));
        assert_eq!(bc.resolve(&[1, 3], &region()), Resolved::Pixel([5, 3]));
        // y: start 3, size 5 -> 2 wraps to 7, 13 wraps to 3
        assert_eq!(bc.resolve(&[2, 2], &region()), Resolved::Pixel([2, 7]));
        assert_eq!(bc.resolve(&[2, 13], &region()), Resolved::Pixel([2, 3]));
    }

    #[test]
    fn test_clip_skips() {
        assert_eq!(
            BoundaryCondition::Clip.resolve(&[-10, 0], &region()),
            Resolved::Skip
        );
    }

    #[test]
    fn test_empty_region_never_reads() {
        let empty = Region::new([0, 0], [0, 3]);
        assert_eq!(
            BoundaryCondition::ZeroFluxNeumann.resolve(&[0, 0], &empty),
            Resolved::Skip
        );
        assert_eq!(
            BoundaryCondition::Constant(2.0).resolve(&[0, 0], &empty),
            Resolved::Value(2.0)
        );
    }
}
