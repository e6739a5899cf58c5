pub trait FloatExt: Copy {
    /// Absolute comparison against [`crate::EPSILON`].
    fn approximately_eq(self, other: Self) -> bool;

    /// Absolute comparison against a caller supplied tolerance.
    fn approx_eq_eps(self, other: Self, eps: f64) -> bool;

    /// Tolerance scaled by the larger magnitude, floored at `eps` absolute.
    fn approx_eq_rel(self, other: Self, eps: f64) -> bool;
}

impl FloatExt for f32 {
    fn approximately_eq(self, other: Self) -> bool {
        self.approx_eq_eps(other, crate::EPSILON)
    }

    fn approx_eq_eps(self, other: Self, eps: f64) -> bool {
        ((self - other).abs() as f64) < eps
    }

    fn approx_eq_rel(self, other: Self, eps: f64) -> bool {
        (self as f64).approx_eq_rel(other as f64, eps)
    }
}

impl FloatExt for f64 {
    fn approximately_eq(self, other: Self) -> bool {
        self.approx_eq_eps(other, crate::EPSILON)
    }

    fn approx_eq_eps(self, other: Self, eps: f64) -> bool {
        (self - other).abs() < eps
    }

    fn approx_eq_rel(self, other: Self, eps: f64) -> bool {
        let scale = self.abs().max(other.abs()).max(1.0);
        (self - other).abs() < eps * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_approximately_eq() {
        assert!(1.0_f64.approximately_eq(1.0));
        assert!(0.0_f64.approximately_eq(0.0));
        assert!((0.1_f64 + 0.2_f64).approximately_eq(0.3));
        assert!(!1.0_f64.approximately_eq(1.0001));
    }

    #[test]
    fn f32_uses_same_tolerance() {
        assert!(1.0_f32.approximately_eq(1.0));
        assert!(0.0_f32.approximately_eq(0.5e-6));
        assert!(!0.0_f32.approximately_eq(2e-6));
    }

    #[test]
    fn nan_is_never_equal() {
        // abs(NaN - x) is NaN, which is not < eps
        assert!(!f64::NAN.approximately_eq(f64::NAN));
        assert!(!f64::NAN.approx_eq_eps(0.0, 1.0));
        assert!(!f64::NAN.approx_eq_rel(0.0, 1.0));
    }

    #[test]
    fn explicit_tolerance() {
        assert!(1.0_f64.approx_eq_eps(1.05, 0.1));
        assert!(!1.0_f64.approx_eq_eps(1.2, 0.1));
    }

    #[test]
    fn relative_tolerance_scales_with_magnitude() {
        assert!(1000.0_f64.approx_eq_rel(1000.5, 1e-3));
        assert!(!1000.0_f64.approx_eq_eps(1000.5, 1e-3));
        // below 1.0 the tolerance is absolute
        assert!(!0.001_f64.approx_eq_rel(0.003, 1e-3));
    }
}
