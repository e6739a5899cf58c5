//! Generic separable interpolator.
//!
//! Turns any 1-D [`WindowFunction`] into a D-dimensional interpolator:
//!
//! ```text
//! value(x) = sum over taps t of  pixel(base + t) * prod_d K(t_d - f_d)
//! ```
//!
//! where `base = floor(x + 0.5)` and `f = x - base`. Weights come from a
//! cached [`KernelTable`] quantized on the sub-pixel fraction; taps with a
//! negligible weight are never visited, so an evaluation at an integer index
//! of a windowed-sinc kernel touches a single pixel instead of `(2r + 1)^D`.
//!
//! Neighbour reads go through the configured [`BoundaryCondition`]. With
//! `normalize_weight` set the sum is divided by the total weight of the taps
//! actually used, so clipped taps near the border do not darken the result.
//!
//! The table is rebuilt lazily: every setter only marks it stale, and the
//! next evaluation (or an explicit [`GenericInterpolator::initialize`])
//! rebuilds it. Evaluation therefore takes `&mut self`; use one instance
//! per thread (the type is `Clone + Send`).

mod table;


use tracing::debug;

use crate::boundary::{BoundaryCondition, Resolved};
use crate::error::Result;
use crate::image::{ContinuousIndex, Image, PixelValue, zero_pixel};
use crate::interpolator::InterpolateImageFunction;
use crate::kernel::{
    BlackmanKernel, CosineKernel, GaussianKernel, HammingKernel, LanczosKernel, ProlateKernel,
    WelchKernel, WindowFunction,
};

pub use table::{
    KernelTable, NEGLIGIBLE_WEIGHT, SUBPIXEL_BUCKETS, TableKey, Tap, bucket_fraction, bucket_of,
};
pub(crate) use table::for_each_tap;

/// Separable interpolator over kernel `K` in `D` dimensions.
#[derive(Debug, Clone)]
pub struct GenericInterpolator<K, const D: usize> {
    kernel: K,
    boundary: BoundaryCondition,
    normalize_weight: bool,
    table: KernelTable,
    dirty: bool,
}

pub type GaussianInterpolator<const D: usize> = GenericInterpolator<GaussianKernel, D>;
pub type HammingInterpolator<const D: usize> = GenericInterpolator<HammingKernel, D>;
pub type CosineInterpolator<const D: usize> = GenericInterpolator<CosineKernel, D>;
pub type WelchInterpolator<const D: usize> = GenericInterpolator<WelchKernel, D>;
pub type LanczosInterpolator<const D: usize> = GenericInterpolator<LanczosKernel, D>;
pub type BlackmanInterpolator<const D: usize> = GenericInterpolator<BlackmanKernel, D>;
pub type ProlateInterpolator<const D: usize> = GenericInterpolator<ProlateKernel, D>;

impl<K: WindowFunction, const D: usize> Default for GenericInterpolator<K, D> {
    fn default() -> Self {
        Self::with_kernel(K::default())
    }
}

impl<K: WindowFunction, const D: usize> GenericInterpolator<K, D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kernel(kernel: K) -> Self {
        Self {
            kernel,
            boundary: BoundaryCondition::default(),
            normalize_weight: false,
            table: KernelTable::default(),
            dirty: true,
        }
    }

    /// Shorthand for `new()` followed by `set_radius(radius)`.
    pub fn with_radius(radius: u32) -> Result<Self> {
        let mut interpolator = Self::new();
        interpolator.set_radius(radius)?;
        Ok(interpolator)
    }

    pub fn set_radius(&mut self, radius: u32) -> Result<()> {
        self.kernel.set_radius(radius)?;
        self.modified();
        Ok(())
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.kernel.radius()
    }

    #[inline]
    pub fn window_size(&self) -> usize {
        self.kernel.window_size()
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn set_kernel(&mut self, kernel: K) {
        self.kernel = kernel;
        self.modified();
    }

    pub fn set_normalize_weight(&mut self, normalize: bool) {
        self.normalize_weight = normalize;
        self.modified();
    }

    #[inline]
    pub fn normalize_weight(&self) -> bool {
        self.normalize_weight
    }

    pub fn set_boundary_condition(&mut self, boundary: BoundaryCondition) {
        self.boundary = boundary;
    }

    #[inline]
    pub fn boundary_condition(&self) -> BoundaryCondition {
        self.boundary
    }

    /// Marks the cached tables stale. They are rebuilt on next use.
    #[inline]
    pub fn modified(&mut self) {
        self.dirty = true;
    }

    /// True when the next evaluation will rebuild the tables.
    pub fn is_stale(&self) -> bool {
        self.dirty || self.table.key() != Some(self.table_key())
    }

    /// Cached tables, as last built.
    pub fn table(&self) -> &KernelTable {
        &self.table
    }

    fn table_key(&self) -> TableKey {
        TableKey {
            radius: self.kernel.radius(),
            dimension: D,
            normalize: self.normalize_weight,
        }
    }

    /// Rebuilds the weight and offset tables for the current configuration.
    pub fn initialize(&mut self) {
        let key = self.table_key();
        self.table = KernelTable::build(&self.kernel, key);
        self.dirty = false;
        debug!(
            kernel = K::NAME,
            radius = key.radius,
            dimension = key.dimension,
            normalize = key.normalize,
            taps = self.table.tap_count(),
            "Built separable kernel table"
        );
    }

    #[inline]
    fn ensure_tables(&mut self) {
        if self.is_stale() {
            self.initialize();
        }
    }

    /// Interpolated value at `index`.
    ///
    /// `index` is not range checked: neighbours outside the image region are
    /// resolved by the boundary condition, bounds checking is the caller's job.
    pub fn evaluate_at_continuous_index<I: Image<D>>(
        &mut self,
        image: &I,
        index: &ContinuousIndex<D>,
    ) -> PixelValue {
        self.ensure_tables();

        let region = image.region();
        let components = image.components();
        let boundary = self.boundary;

        let mut base = [0i64; D];
        let mut axes: [&[Tap]; D] = [&[]; D];
        for d in 0..D {
            let rounded = (index[d] + 0.5).floor();
            base[d] = rounded as i64;
            axes[d] = self.table.taps(bucket_of(index[d] - rounded));
        }

        let mut value = zero_pixel(components);
        let mut pixel = zero_pixel(components);
        let mut weight_sum = 0.0;

        for_each_tap(&axes, |offset, weight| {
            let neighbor: [i64; D] = std::array::from_fn(|d| base[d] + offset[d]);
            match boundary.resolve(&neighbor, &region) {
                Resolved::Pixel(at) => {
                    image.read_pixel(&at, &mut pixel);
                    for (acc, &v) in value.iter_mut().zip(pixel.iter()) {
                        *acc += weight * v;
                    }
                }
                Resolved::Value(fill) => {
                    for acc in value.iter_mut() {
                        *acc += weight * fill;
                    }
                }
                Resolved::Skip => return,
            }
            weight_sum += weight;
        });

        if self.normalize_weight && weight_sum.abs() > NEGLIGIBLE_WEIGHT {
            let inv = 1.0 / weight_sum;
            value.iter_mut().for_each(|v| *v *= inv);
        }

        value
    }
}

impl<K: WindowFunction, const D: usize> InterpolateImageFunction<D> for GenericInterpolator<K, D> {
    fn name(&self) -> &'static str {
        K::NAME
    }

    fn initialize(&mut self) {
        GenericInterpolator::initialize(self);
    }

    fn evaluate_at_continuous_index<I: Image<D>>(
        &mut self,
        image: &I,
        index: &ContinuousIndex<D>,
    ) -> PixelValue {
        GenericInterpolator::evaluate_at_continuous_index(self, image, index)
    }
}
