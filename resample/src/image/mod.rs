//! Image abstraction consumed by the interpolators.
//!
//! Interpolators never own an image; each evaluation borrows one through the
//! [`Image`] trait. [`NdImage`] is the owned row-major container used by the
//! rest of the crate and by callers without their own storage.

mod region;

#[cfg(test)]
mod tests;

use num_traits::ToPrimitive;
use smallvec::SmallVec;

pub use region::{ContinuousIndex, Index, Region, RegionIndices};

/// Interpolated pixel value, one `f64` per component.
pub type PixelValue = SmallVec<[f64; 4]>;

/// N-dimensional grid of scalar or fixed-length vector pixels.
pub trait Image<const D: usize> {
    /// Buffered region: every index inside it can be read.
    fn region(&self) -> Region<D>;

    /// Components per pixel (1 for scalar images).
    fn components(&self) -> usize;

    /// Writes the components of the pixel at `index` into `out`.
    ///
    /// `index` must lie inside [`Image::region`] and `out` must hold
    /// [`Image::components`] values.
    fn read_pixel(&self, index: &Index<D>, out: &mut [f64]);
}

/// Owned N-dimensional image, axis 0 fastest, components interleaved.
#[derive(Debug, Clone, PartialEq)]
pub struct NdImage<T, const D: usize> {
    data: Vec<T>,
    region: Region<D>,
    components: usize,
}

impl<T: Copy, const D: usize> NdImage<T, D> {
    pub fn new(size: [usize; D], components: usize, data: Vec<T>) -> Self {
        assert!(components > 0, "image must have at least one component");
        assert_eq!(
            data.len(),
            size.iter().product::<usize>() * components,
            "data length must equal pixel count * components"
        );
        Self {
            data,
            region: Region::from_size(size),
            components,
        }
    }

    pub fn filled(size: [usize; D], components: usize, value: T) -> Self {
        let len = size.iter().product::<usize>() * components;
        Self::new(size, components, vec![value; len])
    }

    /// Scalar image whose pixel at each index is `f(index)`.
    pub fn from_fn(size: [usize; D], mut f: impl FnMut(Index<D>) -> T) -> Self {
        let region = Region::from_size(size);
        let data = region.indices().map(&mut f).collect();
        Self::new(size, 1, data)
    }

    /// Moves the buffered region so it starts at `start` instead of the origin.
    pub fn with_start(mut self, start: Index<D>) -> Self {
        self.region.start = start;
        self
    }

    #[inline]
    pub fn size(&self) -> [usize; D] {
        self.region.size
    }

    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Offset of the first component of `index` in the data buffer.
    #[inline]
    pub fn offset(&self, index: &Index<D>) -> usize {
        debug_assert!(
            self.region.contains(index),
            "index {:?} outside {:?}",
            index,
            self.region
        );
        let mut offset = 0usize;
        let mut stride = 1usize;
        for d in 0..D {
            offset += (index[d] - self.region.start[d]) as usize * stride;
            stride *= self.region.size[d];
        }
        offset * self.components
    }

    #[inline]
    pub fn pixel(&self, index: &Index<D>) -> &[T] {
        let offset = self.offset(index);
        &self.data[offset..offset + self.components]
    }

    #[inline]
    pub fn pixel_mut(&mut self, index: &Index<D>) -> &mut [T] {
        let offset = self.offset(index);
        let components = self.components;
        &mut self.data[offset..offset + components]
    }

    #[inline]
    pub fn set_pixel(&mut self, index: &Index<D>, value: &[T]) {
        self.pixel_mut(index).copy_from_slice(value);
    }
}

impl<T: Copy + ToPrimitive, const D: usize> Image<D> for NdImage<T, D> {
    #[inline]
    fn region(&self) -> Region<D> {
        self.region
    }

    #[inline]
    fn components(&self) -> usize {
        self.components
    }

    #[inline]
    fn read_pixel(&self, index: &Index<D>, out: &mut [f64]) {
        for (dst, src) in out.iter_mut().zip(self.pixel(index)) {
            *dst = src.to_f64().unwrap_or(f64::NAN);
        }
    }
}

impl<I: Image<D> + ?Sized, const D: usize> Image<D> for &I {
    #[inline]
    fn region(&self) -> Region<D> {
        (**self).region()
    }

    #[inline]
    fn components(&self) -> usize {
        (**self).components()
    }

    #[inline]
    fn read_pixel(&self, index: &Index<D>, out: &mut [f64]) {
        (**self).read_pixel(index, out)
    }
}

/// Zeroed accumulator sized for `components`.
#[inline]
pub(crate) fn zero_pixel(components: usize) -> PixelValue {
    SmallVec::from_elem(0.0, components)
}
