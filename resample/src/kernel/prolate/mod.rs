//! Prolate kernel: an empirical profile resampled to the requested radius.
//!
//! The kernel is a plain table lookup (no sinc factor): the 721-sample
//! profile spans the reference radius and `x` is scaled by
//! `721 / radius` to index into it.
//!
//! [`ProlateKernel::compute_energy`] is an offline diagnostic measuring how
//! much of the resampled profile's spectrum falls outside the band kept by a
//! given resampling ratio.

mod profile;

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::error::{Error, Result};
use crate::kernel::WindowFunction;
use profile::{PROFILE, PROFILE_SIZE};

/// Length of the FFT used by [`ProlateKernel::compute_energy`].
pub const ENERGY_FFT_SIZE: usize = 1024;

/// Table-driven prolate kernel.
///
/// A radius of 0 is accepted and degenerates to the constant `profile[0]`.
#[derive(Debug, Clone)]
pub struct ProlateKernel {
    radius: u32,
}

impl Default for ProlateKernel {
    fn default() -> Self {
        Self { radius: 1 }
    }
}

impl ProlateKernel {
    pub fn new(radius: u32) -> Self {
        Self { radius }
    }

    /// The 721-sample reference profile.
    pub fn original_profile() -> &'static [f64] {
        &PROFILE
    }

    pub fn original_profile_size() -> usize {
        PROFILE_SIZE
    }

    /// Relative out-of-band energy of the profile resampled to the radius.
    ///
    /// The profile is sampled at `radius + 1` points into a zero-padded
    /// 1024-point buffer and transformed. Bins below `1024 / (2 * ratio)`
    /// are in band; the result is `sqrt(out_of_band) / sqrt(total)` over the
    /// first half of the (symmetric) spectrum, in `[0, 1]`. It never grows
    /// as `resample_ratio` decreases.
    pub fn compute_energy(&self, resample_ratio: f64) -> Result<f64> {
        if !resample_ratio.is_finite() || resample_ratio <= 0.0 {
            return Err(Error::InvalidResampleRatio(resample_ratio));
        }

        let radius = self.radius as usize;
        let mut spectrum = vec![Complex::new(0.0f64, 0.0); ENERGY_FFT_SIZE];
        for (i, bin) in spectrum.iter_mut().enumerate().take(radius + 1) {
            let ival = PROFILE_SIZE * i / (radius + 1);
            *bin = Complex::new(PROFILE[ival], 0.0);
        }

        let mut planner = FftPlanner::<f64>::new();
        planner
            .plan_fft_forward(ENERGY_FFT_SIZE)
            .process(&mut spectrum);

        let half = ENERGY_FFT_SIZE / 2;
        let band = ENERGY_FFT_SIZE as f64 / (2.0 * resample_ratio);
        let band_limit = if band >= half as f64 {
            half
        } else {
            band as usize
        };

        let mut total = 0.0;
        let mut out_of_band = 0.0;
        for (j, bin) in spectrum[..half].iter().enumerate() {
            let energy = bin.norm_sqr();
            total += energy;
            if j >= band_limit {
                out_of_band += energy;
            }
        }

        if total <= 0.0 {
            return Ok(0.0);
        }
        Ok((out_of_band.sqrt() / total.sqrt()).clamp(0.0, 1.0))
    }
}

impl WindowFunction for ProlateKernel {
    const NAME: &'static str = "Prolate";

    fn set_radius(&mut self, radius: u32) -> Result<()> {
        self.radius = radius;
        Ok(())
    }

    #[inline]
    fn radius(&self) -> u32 {
        self.radius
    }

    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        if self.radius == 0 {
            return PROFILE[0];
        }
        let ival = x.abs() * PROFILE_SIZE as f64 / self.radius as f64;
        if ival < PROFILE_SIZE as f64 {
            PROFILE[ival as usize]
        } else {
            0.0
        }
    }
}
