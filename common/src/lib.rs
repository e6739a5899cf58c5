pub mod float_ext;
pub mod log_setup;

/// Default absolute tolerance for float comparisons.
pub const EPSILON: f64 = 1e-6;
