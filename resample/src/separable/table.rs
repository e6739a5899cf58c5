//! Cached weight and offset tables for the separable interpolator.
//!
//! The sub-pixel fraction `f` in `[-0.5, 0.5)` is quantized into
//! `SUBPIXEL_BUCKETS + 1` buckets. For every bucket the table keeps the dense
//! 1-D weights of all `2r + 1` taps and a sparse list of the taps whose
//! weight is not negligible. All axes share one table since the kernel is
//! the same along every axis.
//!
//! Bucket `SUBPIXEL_BUCKETS / 2` is exactly `f = 0`, so evaluations at
//! integer indices use exact weights.

use crate::kernel::WindowFunction;

/// Sub-pixel resolution of the cached weights. A power of two keeps dyadic
/// fractions exact.
pub const SUBPIXEL_BUCKETS: usize = 1024;

/// Taps with a weight magnitude at or below this are left out of the
/// offset table.
pub const NEGLIGIBLE_WEIGHT: f64 = 1e-12;

/// Configuration a table was built from. Any mismatch means it is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableKey {
    pub radius: u32,
    pub dimension: usize,
    pub normalize: bool,
}

/// One neighbour along one axis: offset from the base index and its weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tap {
    pub offset: i64,
    pub weight: f64,
}

/// Per-bucket weights and sparse tap lists.
#[derive(Debug, Clone, Default)]
pub struct KernelTable {
    key: Option<TableKey>,
    window_size: usize,
    /// `(SUBPIXEL_BUCKETS + 1) * window_size` weights, bucket-major.
    weights: Vec<f64>,
    /// Non-negligible taps of every bucket, concatenated.
    taps: Vec<Tap>,
    /// `taps[tap_starts[b]..tap_starts[b + 1]]` belongs to bucket `b`.
    tap_starts: Vec<usize>,
}

impl KernelTable {
    pub fn build<K: WindowFunction>(kernel: &K, key: TableKey) -> Self {
        let radius = key.radius as i64;
        let window_size = (2 * radius + 1) as usize;
        let bucket_count = SUBPIXEL_BUCKETS + 1;

        let mut weights = Vec::with_capacity(bucket_count * window_size);
        let mut taps = Vec::with_capacity(bucket_count * window_size);
        let mut tap_starts = Vec::with_capacity(bucket_count + 1);
        let mut row = vec![0.0f64; window_size];

        for bucket in 0..bucket_count {
            let fraction = bucket_fraction(bucket);
            for (i, w) in row.iter_mut().enumerate() {
                let offset = i as i64 - radius;
                *w = kernel.evaluate(offset as f64 - fraction);
            }

            if key.normalize {
                let sum: f64 = row.iter().sum();
                if sum.abs() > 1e-10 {
                    row.iter_mut().for_each(|w| *w /= sum);
                }
            }

            tap_starts.push(taps.len());
            for (i, &weight) in row.iter().enumerate() {
                if weight.abs() > NEGLIGIBLE_WEIGHT {
                    taps.push(Tap {
                        offset: i as i64 - radius,
                        weight,
                    });
                }
            }
            weights.extend_from_slice(&row);
        }
        tap_starts.push(taps.len());

        Self {
            key: Some(key),
            window_size,
            weights,
            taps,
            tap_starts,
        }
    }

    #[inline]
    pub fn key(&self) -> Option<TableKey> {
        self.key
    }

    #[inline]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Dense weights of every tap for `bucket`, offset `-r` first.
    #[inline]
    pub fn weights(&self, bucket: usize) -> &[f64] {
        let start = bucket * self.window_size;
        &self.weights[start..start + self.window_size]
    }

    /// Non-negligible taps for `bucket`.
    #[inline]
    pub fn taps(&self, bucket: usize) -> &[Tap] {
        &self.taps[self.tap_starts[bucket]..self.tap_starts[bucket + 1]]
    }

    /// Total number of sparse taps over all buckets.
    pub fn tap_count(&self) -> usize {
        self.taps.len()
    }
}

/// Bucket holding sub-pixel fraction `fraction`, expected in `[-0.5, 0.5]`.
#[inline]
pub fn bucket_of(fraction: f64) -> usize {
    let bucket = ((fraction + 0.5) * SUBPIXEL_BUCKETS as f64).round();
    // NaN casts to 0; out-of-range fractions saturate to the end buckets.
    (bucket as usize).min(SUBPIXEL_BUCKETS)
}

/// Fraction represented by `bucket`.
#[inline]
pub fn bucket_fraction(bucket: usize) -> f64 {
    bucket as f64 / SUBPIXEL_BUCKETS as f64 - 0.5
}

/// Visits the cartesian product of per-axis taps with the product weight.
///
/// Does nothing when any axis has no taps.
pub(crate) fn for_each_tap<const D: usize>(
    axes: &[&[Tap]; D],
    mut visit: impl FnMut(&[i64; D], f64),
) {
    if axes.iter().any(|taps| taps.is_empty()) {
        return;
    }

    let mut cursor = [0usize; D];
    loop {
        let mut offset = [0i64; D];
        let mut weight = 1.0;
        for d in 0..D {
            let tap = axes[d][cursor[d]];
            offset[d] = tap.offset;
            weight *= tap.weight;
        }
        visit(&offset, weight);

        let mut d = 0;
        loop {
            if d == D {
                return;
            }
            cursor[d] += 1;
            if cursor[d] < axes[d].len() {
                break;
            }
            cursor[d] = 0;
            d += 1;
        }
    }
}
