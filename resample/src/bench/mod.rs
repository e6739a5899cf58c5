//! Criterion benchmark bodies, compiled with the `bench` feature.
//! Run with: cargo bench -p resample --features bench --bench interpolation

pub mod interpolation;
