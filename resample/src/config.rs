//! Serializable interpolator selection.
//!
//! A pipeline usually picks its interpolator from a settings file rather than
//! at compile time. [`InterpolatorConfig`] carries every knob any interpolator
//! understands; [`InterpolatorConfig::build`] turns it into an
//! [`AnyInterpolator`] for the requested dimension.
//!
//! ```yaml
//! kind: lanczos
//! radius: 3
//! normalize_weight: true
//! boundary: zero_flux_neumann
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::debug;

use crate::basic::{LinearInterpolator, NearestNeighborInterpolator};
use crate::bco::{BcoInterpolator, DEFAULT_ALPHA, MIN_BCO_RADIUS};
use crate::boundary::BoundaryCondition;
use crate::bspline::{BSplineInterpolator, DEFAULT_SPLINE_ORDER, MAX_SPLINE_ORDER};
use crate::error::{Error, Result};
use crate::interpolator::AnyInterpolator;
use crate::separable::{
    BlackmanInterpolator, CosineInterpolator, GaussianInterpolator, HammingInterpolator,
    LanczosInterpolator, ProlateInterpolator, WelchInterpolator,
};

/// Every interpolator the crate can build at run time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InterpolatorKind {
    NearestNeighbor,
    Linear,
    #[serde(rename = "bspline")]
    #[strum(to_string = "bspline")]
    BSpline,
    Gaussian,
    Hamming,
    Cosine,
    Welch,
    Lanczos,
    Blackman,
    Prolate,
    #[default]
    Bco,
}

impl InterpolatorKind {
    /// Whether `radius` in the configuration affects this kind.
    pub fn uses_radius(&self) -> bool {
        !matches!(
            self,
            InterpolatorKind::NearestNeighbor | InterpolatorKind::Linear | InterpolatorKind::BSpline
        )
    }

    /// Smallest accepted radius, 0 for kinds without one.
    pub fn min_radius(&self) -> u32 {
        match self {
            InterpolatorKind::Gaussian
            | InterpolatorKind::Hamming
            | InterpolatorKind::Cosine
            | InterpolatorKind::Welch
            | InterpolatorKind::Lanczos
            | InterpolatorKind::Blackman => 1,
            InterpolatorKind::Bco => MIN_BCO_RADIUS,
            InterpolatorKind::NearestNeighbor
            | InterpolatorKind::Linear
            | InterpolatorKind::BSpline
            | InterpolatorKind::Prolate => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpolatorConfig {
    pub kind: InterpolatorKind,
    /// Kernel radius for the windowed-sinc, prolate and BCO kinds.
    pub radius: u32,
    /// BCO shape constant.
    pub alpha: f64,
    /// Divide by the sum of the weights used (windowed-sinc and prolate).
    pub normalize_weight: bool,
    /// B-spline order, 0 to 3.
    pub spline_order: u32,
    /// Out-of-region policy of the windowed-sinc and prolate kinds.
    pub boundary: BoundaryCondition,
}

impl Default for InterpolatorConfig {
    fn default() -> Self {
        Self {
            kind: InterpolatorKind::default(),
            radius: MIN_BCO_RADIUS,
            alpha: DEFAULT_ALPHA,
            normalize_weight: false,
            spline_order: DEFAULT_SPLINE_ORDER,
            boundary: BoundaryCondition::default(),
        }
    }
}

impl InterpolatorConfig {
    pub fn new(kind: InterpolatorKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.kind.uses_radius() && self.radius < self.kind.min_radius() {
            return Err(Error::InvalidConfig(format!(
                "radius {} is below the minimum {} for {}",
                self.radius,
                self.kind.min_radius(),
                self.kind
            )));
        }
        if !self.alpha.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "alpha must be finite, got {}",
                self.alpha
            )));
        }
        if self.spline_order > MAX_SPLINE_ORDER {
            return Err(Error::InvalidSplineOrder(self.spline_order));
        }
        if let BoundaryCondition::Constant(value) = self.boundary {
            if !value.is_finite() {
                return Err(Error::InvalidConfig(format!(
                    "constant boundary value must be finite, got {}",
                    value
                )));
            }
        }
        Ok(())
    }

    /// Builds the configured interpolator for `D`-dimensional images.
    pub fn build<const D: usize>(&self) -> Result<AnyInterpolator<D>> {
        self.validate()?;

        macro_rules! separable {
            ($variant:ident, $ty:ident) => {{
                let mut interpolator = $ty::<D>::with_radius(self.radius)?;
                interpolator.set_normalize_weight(self.normalize_weight);
                interpolator.set_boundary_condition(self.boundary);
                AnyInterpolator::$variant(interpolator)
            }};
        }

        let interpolator = match self.kind {
            InterpolatorKind::NearestNeighbor => {
                AnyInterpolator::NearestNeighbor(NearestNeighborInterpolator::new())
            }
            InterpolatorKind::Linear => AnyInterpolator::Linear(LinearInterpolator::new()),
            InterpolatorKind::BSpline => {
                AnyInterpolator::BSpline(BSplineInterpolator::with_order(self.spline_order)?)
            }
            InterpolatorKind::Gaussian => separable!(Gaussian, GaussianInterpolator),
            InterpolatorKind::Hamming => separable!(Hamming, HammingInterpolator),
            InterpolatorKind::Cosine => separable!(Cosine, CosineInterpolator),
            InterpolatorKind::Welch => separable!(Welch, WelchInterpolator),
            InterpolatorKind::Lanczos => separable!(Lanczos, LanczosInterpolator),
            InterpolatorKind::Blackman => separable!(Blackman, BlackmanInterpolator),
            InterpolatorKind::Prolate => separable!(Prolate, ProlateInterpolator),
            InterpolatorKind::Bco => {
                let mut bco = BcoInterpolator::<D>::with_radius(self.radius)?;
                bco.set_alpha(self.alpha);
                AnyInterpolator::Bco(bco)
            }
        };

        debug!(kind = %self.kind, dimension = D, radius = self.radius, "Built interpolator");
        Ok(interpolator)
    }
}
