//! LTTB (Largest Triangle Three Buckets) downsampling

use super::bucket_ranges;
use crate::series::{Sample, Series};

/// Shoelace area of the triangle `a`, `b`, `c`
#[inline]
pub fn triangle_area(a: Sample, b: Sample, c: Sample) -> f64 {
    0.5 * (a.t * (b.v - c.v) + b.t * (c.v - a.v) + c.t * (a.v - b.v)).abs()
}

/// Reduce `data` to exactly `target` samples, keeping both endpoints.
///
/// The `n - 2` interior samples are split into `target - 2` buckets. From
/// each bucket the sample spanning the largest triangle with the previously
/// selected sample and the first sample of the next bucket is kept.
///
/// Callers go through [`super::reduce`], which guarantees
/// `data.len() > target >= 2`.
pub fn lttb(data: &[Sample], target: usize) -> Series {
    let n = data.len();
    debug_assert!(n > target && target >= 2);

    let mut result = Series::with_capacity(target);

    // Always include first point
    let mut prev = data[0];
    result.push(prev);

    for bucket in bucket_ranges(n - 2, target - 2) {
        // Shift past the first sample
        let (start, end) = (bucket.start + 1, bucket.end + 1);

        // Next bucket's first sample, or the last point for the final bucket
        let next = data[end];

        let mut max_area = -1.0f64;
        let mut max_idx = start;
        for j in start..end {
            let area = triangle_area(prev, data[j], next);
            if area > max_area {
                max_area = area;
                max_idx = j;
            }
        }

        prev = data[max_idx];
        result.push(prev);
    }

    // Always include last point
    result.push(data[n - 1]);
    result
}
