//! Windowed-sinc kernels.
//!
//! All variants share `K(x) = w(x) * sinc(pi x)` for `|x| <= m` and `0`
//! beyond, where `m` is the radius and `w` the window:
//!
//! | Variant  | w(x)                                       |
//! |----------|--------------------------------------------|
//! | Hamming  | 0.54 + 0.46 cos(pi x / m)                  |
//! | Cosine   | cos(pi x / (2m))                           |
//! | Welch    | 1 - x^2 / m^2                              |
//! | Blackman | 0.42 + 0.5 cos(pi x / m) + 0.08 cos(2 pi x / m) |
//! | Lanczos  | sinc(x / m)                                |
//! | Gaussian | exp(f (pi x)^2), f = -2 / (m^2 pi)         |
//!
//! Every window equals 1 at `x = 0`, so every kernel peaks at exactly 1.

use std::f64::consts::PI;
use std::fmt;

use crate::error::{Error, Result};
use crate::kernel::{WindowFunction, sinc};

/// Window shape multiplied into the sinc.
pub trait SincWindow: Clone + Default + fmt::Debug + Send + Sync + 'static {
    const NAME: &'static str;

    /// Recomputes the factors derived from the radius. `radius >= 1`.
    fn configure(&mut self, radius: f64);

    /// Window value at `x`, only called for `|x| <= radius`.
    fn window(&self, x: f64) -> f64;
}

/// `w(x) * sinc(pi x)` kernel for a given window.
#[derive(Debug, Clone)]
pub struct WindowedSincKernel<W> {
    radius: u32,
    window: W,
}

impl<W: SincWindow> Default for WindowedSincKernel<W> {
    fn default() -> Self {
        let mut window = W::default();
        window.configure(1.0);
        Self { radius: 1, window }
    }
}

impl<W: SincWindow> WindowedSincKernel<W> {
    pub fn new(radius: u32) -> Result<Self> {
        let mut kernel = Self::default();
        kernel.set_radius(radius)?;
        Ok(kernel)
    }

    pub fn window(&self) -> &W {
        &self.window
    }
}

impl<W: SincWindow> WindowFunction for WindowedSincKernel<W> {
    const NAME: &'static str = W::NAME;

    fn set_radius(&mut self, radius: u32) -> Result<()> {
        if radius == 0 {
            return Err(Error::InvalidRadius {
                kernel: W::NAME,
                radius,
                min: 1,
            });
        }
        self.radius = radius;
        self.window.configure(radius as f64);
        Ok(())
    }

    #[inline]
    fn radius(&self) -> u32 {
        self.radius
    }

    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        if x.abs() > self.radius as f64 {
            return 0.0;
        }
        self.window.window(x) * sinc(x)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Gaussian {
    factor: f64,
}

impl SincWindow for Gaussian {
    const NAME: &'static str = "Gaussian";

    fn configure(&mut self, radius: f64) {
        self.factor = -2.0 / (radius * radius * PI);
    }

    #[inline]
    fn window(&self, x: f64) -> f64 {
        let px = PI * x;
        (px * px * self.factor).exp()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Hamming {
    factor: f64,
}

impl SincWindow for Hamming {
    const NAME: &'static str = "Hamming";

    fn configure(&mut self, radius: f64) {
        self.factor = PI / radius;
    }

    #[inline]
    fn window(&self, x: f64) -> f64 {
        0.54 + 0.46 * (x * self.factor).cos()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cosine {
    factor: f64,
}

impl SincWindow for Cosine {
    const NAME: &'static str = "Cosine";

    fn configure(&mut self, radius: f64) {
        self.factor = PI / (2.0 * radius);
    }

    #[inline]
    fn window(&self, x: f64) -> f64 {
        (x * self.factor).cos()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Welch {
    factor: f64,
}

impl SincWindow for Welch {
    const NAME: &'static str = "Welch";

    fn configure(&mut self, radius: f64) {
        self.factor = 1.0 / (radius * radius);
    }

    #[inline]
    fn window(&self, x: f64) -> f64 {
        1.0 - x * x * self.factor
    }
}

#[derive(Debug, Clone, Default)]
pub struct Lanczos {
    inv_radius: f64,
}

impl SincWindow for Lanczos {
    const NAME: &'static str = "Lanczos";

    fn configure(&mut self, radius: f64) {
        self.inv_radius = 1.0 / radius;
    }

    #[inline]
    fn window(&self, x: f64) -> f64 {
        sinc(x * self.inv_radius)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Blackman {
    factor1: f64,
    factor2: f64,
}

impl SincWindow for Blackman {
    const NAME: &'static str = "Blackman";

    fn configure(&mut self, radius: f64) {
        self.factor1 = PI / radius;
        self.factor2 = 2.0 * PI / radius;
    }

    #[inline]
    fn window(&self, x: f64) -> f64 {
        0.42 + 0.5 * (x * self.factor1).cos() + 0.08 * (x * self.factor2).cos()
    }
}

pub type GaussianKernel = WindowedSincKernel<Gaussian>;
pub type HammingKernel = WindowedSincKernel<Hamming>;
pub type CosineKernel = WindowedSincKernel<Cosine>;
pub type WelchKernel = WindowedSincKernel<Welch>;
pub type LanczosKernel = WindowedSincKernel<Lanczos>;
pub type BlackmanKernel = WindowedSincKernel<Blackman>;
