use std::f64::consts::PI;

use super::*;
use crate::error::Error;
use crate::kernel::prolate::ENERGY_FFT_SIZE;

const EPSILON: f64 = 1e-12;

fn kernel_with_radius<K: WindowFunction>(radius: u32) -> K {
    let mut kernel = K::default();
    kernel.set_radius(radius).unwrap();
    kernel
}

fn check_peak<K: WindowFunction>() {
    for radius in 1..=8 {
        let kernel: K = kernel_with_radius(radius);
        let peak = kernel.evaluate(0.0);
        assert!(
            (peak - 1.0).abs() < EPSILON,
            "{} radius {}: K(0) = {}",
            K::NAME,
            radius,
            peak
        );
    }
}

fn check_zero_crossings<K: WindowFunction>() {
    for radius in 2..=8 {
        let kernel: K = kernel_with_radius(radius);
        for n in 1..radius as i32 {
            for x in [n as f64, -(n as f64)] {
                let value = kernel.evaluate(x);
                assert!(
                    value.abs() < 1e-12,
                    "{} radius {}: K({}) = {} should be ~0",
                    K::NAME,
                    radius,
                    x,
                    value
                );
            }
        }
    }
}

fn check_symmetry_and_support<K: WindowFunction>() {
    let kernel: K = kernel_with_radius(3);
    for i in 0..=70 {
        let x = i as f64 * 0.05;
        assert!(
            (kernel.evaluate(x) - kernel.evaluate(-x)).abs() < EPSILON,
            "{} not symmetric at {}",
            K::NAME,
            x
        );
    }
    assert_eq!(kernel.evaluate(3.01), 0.0);
    assert_eq!(kernel.evaluate(-4.5), 0.0);
    assert_eq!(kernel.evaluate(100.0), 0.0);
}

fn check_rejects_zero_radius<K: WindowFunction>() {
    let mut kernel: K = kernel_with_radius(4);
    let err = kernel.set_radius(0).unwrap_err();
    assert!(
        matches!(err, Error::InvalidRadius { radius: 0, min: 1, .. }),
        "{}: unexpected error {:?}",
        K::NAME,
        err
    );
    // previous configuration is untouched
    assert_eq!(kernel.radius(), 4);
    assert!(kernel.evaluate(0.5).is_finite());
}

// ============================================================================
// Shared windowed-sinc properties
// ============================================================================

#[test]
fn test_windowed_sinc_peak_is_one() {
    check_peak::<GaussianKernel>();
    check_peak::<HammingKernel>();
    check_peak::<CosineKernel>();
    check_peak::<WelchKernel>();
    check_peak::<LanczosKernel>();
    check_peak::<BlackmanKernel>();
}

#[test]
fn test_windowed_sinc_zero_crossings() {
    check_zero_crossings::<GaussianKernel>();
    check_zero_crossings::<HammingKernel>();
    check_zero_crossings::<CosineKernel>();
    check_zero_crossings::<WelchKernel>();
    check_zero_crossings::<LanczosKernel>();
    check_zero_crossings::<BlackmanKernel>();
}

#[test]
fn test_windowed_sinc_symmetry_and_support() {
    check_symmetry_and_support::<GaussianKernel>();
    check_symmetry_and_support::<HammingKernel>();
    check_symmetry_and_support::<CosineKernel>();
    check_symmetry_and_support::<WelchKernel>();
    check_symmetry_and_support::<LanczosKernel>();
    check_symmetry_and_support::<BlackmanKernel>();
}

#[test]
fn test_windowed_sinc_rejects_zero_radius() {
    check_rejects_zero_radius::<GaussianKernel>();
    check_rejects_zero_radius::<HammingKernel>();
    check_rejects_zero_radius::<CosineKernel>();
    check_rejects_zero_radius::<WelchKernel>();
    check_rejects_zero_radius::<LanczosKernel>();
    check_rejects_zero_radius::<BlackmanKernel>();
}

#[test]
fn test_default_radius_is_one() {
    assert_eq!(HammingKernel::default().radius(), 1);
    assert_eq!(GaussianKernel::default().radius(), 1);
    assert_eq!(ProlateKernel::default().radius(), 1);
    assert_eq!(LanczosKernel::default().window_size(), 3);
}

#[test]
fn test_new_validates_radius() {
    assert!(LanczosKernel::new(0).is_err());
    assert_eq!(LanczosKernel::new(3).unwrap().radius(), 3);
}

// ============================================================================
// Closed forms per variant
// ============================================================================

#[test]
fn test_hamming_radius_3_scenario() {
    let kernel = HammingKernel::new(3).unwrap();

    assert_eq!(kernel.evaluate(0.0), 1.0);
    assert!(kernel.evaluate(1.0).abs() < EPSILON);

    let x = 1.5;
    let window = 0.54 + 0.46 * (PI * x / 3.0).cos();
    let expected = window * (1.5 * PI).sin() / (1.5 * PI);
    assert!(
        (kernel.evaluate(x) - expected).abs() < EPSILON,
        "K(1.5) = {}, expected {}",
        kernel.evaluate(x),
        expected
    );
}

#[test]
fn test_closed_forms_at_fractional_positions() {
    let m = 4.0;
    let positions = [0.25, 0.5, 1.3, 2.75, 3.9];

    let gaussian = GaussianKernel::new(4).unwrap();
    let cosine = CosineKernel::new(4).unwrap();
    let welch = WelchKernel::new(4).unwrap();
    let lanczos = LanczosKernel::new(4).unwrap();
    let blackman = BlackmanKernel::new(4).unwrap();

    for &x in &positions {
        let s = sinc(x);
        let px = PI * x;

        let g = (-2.0 / (m * m * PI) * px * px).exp() * s;
        let c = (PI * x / (2.0 * m)).cos() * s;
        let w = (1.0 - x * x / (m * m)) * s;
        let l = sinc(x / m) * s;
        let b = (0.42 + 0.5 * (PI * x / m).cos() + 0.08 * (2.0 * PI * x / m).cos()) * s;

        assert!((gaussian.evaluate(x) - g).abs() < EPSILON, "gaussian at {}", x);
        assert!((cosine.evaluate(x) - c).abs() < EPSILON, "cosine at {}", x);
        assert!((welch.evaluate(x) - w).abs() < EPSILON, "welch at {}", x);
        assert!((lanczos.evaluate(x) - l).abs() < EPSILON, "lanczos at {}", x);
        assert!((blackman.evaluate(x) - b).abs() < EPSILON, "blackman at {}", x);
    }
}

#[test]
fn test_set_radius_recomputes_factors() {
    let mut kernel = WelchKernel::new(2).unwrap();
    let before = kernel.evaluate(1.5);
    kernel.set_radius(5).unwrap();
    let after = kernel.evaluate(1.5);

    let expected = (1.0 - 1.5 * 1.5 / 25.0) * sinc(1.5);
    assert!((after - expected).abs() < EPSILON);
    assert!((before - after).abs() > 1e-3);
}

#[test]
fn test_sinc_limit() {
    assert_eq!(sinc(0.0), 1.0);
    assert!(sinc(1.0).abs() < EPSILON);
    assert!((sinc(0.5) - 2.0 / PI).abs() < EPSILON);
}

// ============================================================================
// Prolate
// ============================================================================

#[test]
fn test_prolate_profile_shape() {
    let profile = ProlateKernel::original_profile();
    assert_eq!(profile.len(), 721);
    assert_eq!(ProlateKernel::original_profile_size(), 721);
    assert_eq!(profile[0], 1.0);
    assert!(
        profile.windows(2).all(|w| w[1] <= w[0]),
        "profile must decay monotonically"
    );
    assert!(profile[720].abs() < 1e-9);
}

#[test]
fn test_prolate_radius_zero_is_constant() {
    let kernel = ProlateKernel::new(0);
    let first = ProlateKernel::original_profile()[0];
    for x in [0.0, 1.0, 100.0] {
        assert_eq!(kernel.evaluate(x), first, "x = {}", x);
    }
}

#[test]
fn test_prolate_index_scaling() {
    let kernel = ProlateKernel::new(4);
    let profile = ProlateKernel::original_profile();

    assert_eq!(kernel.evaluate(0.0), profile[0]);
    // 721 / 4 * 1.0 = 180.25
    assert_eq!(kernel.evaluate(1.0), profile[180]);
    assert_eq!(kernel.evaluate(-1.0), profile[180]);
    // 721 / 4 * 2.0 = 360.5
    assert_eq!(kernel.evaluate(2.0), profile[360]);
    assert_eq!(kernel.evaluate(4.0), 0.0);
    assert_eq!(kernel.evaluate(10.0), 0.0);
}

#[test]
fn test_prolate_set_radius_accepts_zero() {
    let mut kernel = ProlateKernel::new(3);
    kernel.set_radius(0).unwrap();
    assert_eq!(kernel.radius(), 0);
}

#[test]
fn test_compute_energy_bounds() {
    for radius in [0, 1, 2, 3, 5, 8] {
        let kernel = ProlateKernel::new(radius);
        for ratio in [0.25, 0.5, 1.0, 1.5, 2.0, 4.0, 16.0, 512.0, 4096.0] {
            let energy = kernel.compute_energy(ratio).unwrap();
            assert!(
                (0.0..=1.0).contains(&energy),
                "radius {} ratio {}: energy {} out of [0, 1]",
                radius,
                ratio,
                energy
            );
        }
    }
}

#[test]
fn test_compute_energy_non_increasing_as_ratio_decreases() {
    for radius in [1, 2, 3, 6] {
        let kernel = ProlateKernel::new(radius);
        let mut previous = f64::INFINITY;
        let mut ratio = 64.0;
        while ratio > 0.01 {
            let energy = kernel.compute_energy(ratio).unwrap();
            assert!(
                energy <= previous + 1e-12,
                "radius {}: energy rose to {} at ratio {} (previous {})",
                radius,
                energy,
                ratio,
                previous
            );
            previous = energy;
            ratio *= 0.8;
        }
    }
}

#[test]
fn test_compute_energy_no_loss_without_downsampling() {
    // ratio <= 1 keeps the whole half spectrum in band
    let kernel = ProlateKernel::new(3);
    assert_eq!(kernel.compute_energy(1.0).unwrap(), 0.0);
    assert_eq!(kernel.compute_energy(0.3).unwrap(), 0.0);
    assert!(kernel.compute_energy(4.0).unwrap() > 0.0);
}

#[test]
fn test_compute_energy_rejects_bad_ratio() {
    let kernel = ProlateKernel::new(3);
    for ratio in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(
            matches!(
                kernel.compute_energy(ratio),
                Err(Error::InvalidResampleRatio(_))
            ),
            "ratio {} should be rejected",
            ratio
        );
    }
    assert_eq!(ENERGY_FFT_SIZE, 1024);
}
