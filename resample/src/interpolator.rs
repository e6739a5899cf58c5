//! Common interface of every interpolator and its runtime-selected form.

use std::any::Any;

use crate::basic::{LinearInterpolator, NearestNeighborInterpolator};
use crate::bco::BcoInterpolator;
use crate::bspline::BSplineInterpolator;
use crate::config::InterpolatorKind;
use crate::image::{ContinuousIndex, Image, PixelValue};
use crate::separable::{
    BlackmanInterpolator, CosineInterpolator, GaussianInterpolator, HammingInterpolator,
    LanczosInterpolator, ProlateInterpolator, WelchInterpolator,
};

/// Evaluates a D-dimensional image at continuous indices.
///
/// The image is borrowed per call; interpolators only hold configuration and
/// caches. Evaluation may rebuild caches, hence `&mut self`: clone one
/// instance per worker thread.
pub trait InterpolateImageFunction<const D: usize>: Clone + Send + 'static {
    fn name(&self) -> &'static str;

    /// Eagerly (re)builds any cached state. Idempotent.
    fn initialize(&mut self) {}

    fn evaluate_at_continuous_index<I: Image<D>>(
        &mut self,
        image: &I,
        index: &ContinuousIndex<D>,
    ) -> PixelValue;
}

/// Interpolator chosen at run time, see [`crate::config::InterpolatorConfig`].
#[derive(Debug, Clone)]
pub enum AnyInterpolator<const D: usize> {
    NearestNeighbor(NearestNeighborInterpolator<D>),
    Linear(LinearInterpolator<D>),
    BSpline(BSplineInterpolator<D>),
    Gaussian(GaussianInterpolator<D>),
    Hamming(HammingInterpolator<D>),
    Cosine(CosineInterpolator<D>),
    Welch(WelchInterpolator<D>),
    Lanczos(LanczosInterpolator<D>),
    Blackman(BlackmanInterpolator<D>),
    Prolate(ProlateInterpolator<D>),
    Bco(BcoInterpolator<D>),
}

macro_rules! dispatch {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            AnyInterpolator::NearestNeighbor($inner) => $body,
            AnyInterpolator::Linear($inner) => $body,
            AnyInterpolator::BSpline($inner) => $body,
            AnyInterpolator::Gaussian($inner) => $body,
            AnyInterpolator::Hamming($inner) => $body,
            AnyInterpolator::Cosine($inner) => $body,
            AnyInterpolator::Welch($inner) => $body,
            AnyInterpolator::Lanczos($inner) => $body,
            AnyInterpolator::Blackman($inner) => $body,
            AnyInterpolator::Prolate($inner) => $body,
            AnyInterpolator::Bco($inner) => $body,
        }
    };
}

impl<const D: usize> AnyInterpolator<D> {
    pub fn kind(&self) -> InterpolatorKind {
        match self {
            AnyInterpolator::NearestNeighbor(_) => InterpolatorKind::NearestNeighbor,
            AnyInterpolator::Linear(_) => InterpolatorKind::Linear,
            AnyInterpolator::BSpline(_) => InterpolatorKind::BSpline,
            AnyInterpolator::Gaussian(_) => InterpolatorKind::Gaussian,
            AnyInterpolator::Hamming(_) => InterpolatorKind::Hamming,
            AnyInterpolator::Cosine(_) => InterpolatorKind::Cosine,
            AnyInterpolator::Welch(_) => InterpolatorKind::Welch,
            AnyInterpolator::Lanczos(_) => InterpolatorKind::Lanczos,
            AnyInterpolator::Blackman(_) => InterpolatorKind::Blackman,
            AnyInterpolator::Prolate(_) => InterpolatorKind::Prolate,
            AnyInterpolator::Bco(_) => InterpolatorKind::Bco,
        }
    }

    /// The wrapped concrete interpolator, for type-based inspection.
    pub fn inner_any(&self) -> &dyn Any {
        dispatch!(self, inner => inner as &dyn Any)
    }
}

impl<const D: usize> InterpolateImageFunction<D> for AnyInterpolator<D> {
    fn name(&self) -> &'static str {
        dispatch!(self, inner => inner.name())
    }

    fn initialize(&mut self) {
        dispatch!(self, inner => InterpolateImageFunction::<D>::initialize(inner))
    }

    fn evaluate_at_continuous_index<I: Image<D>>(
        &mut self,
        image: &I,
        index: &ContinuousIndex<D>,
    ) -> PixelValue {
        dispatch!(self, inner => InterpolateImageFunction::<D>::evaluate_at_continuous_index(inner, image, index))
    }
}
