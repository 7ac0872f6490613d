//! Group-wise reducers: min, max and average
//!
//! The series is cut into `target` contiguous groups of near-equal size and
//! each group contributes exactly one output sample.

use super::bucket_ranges;
use crate::series::{Sample, Series};

/// Lowest-value sample of each group (first one on ties)
pub fn min(data: &[Sample], target: usize) -> Series {
    pick_per_group(data, target, |candidate, best| candidate < best)
}

/// Highest-value sample of each group (first one on ties)
pub fn max(data: &[Sample], target: usize) -> Series {
    pick_per_group(data, target, |candidate, best| candidate > best)
}

/// Mean time and mean value of each group
///
/// Each term is scaled by the group size before summing, so groups of values
/// near `f64::MAX` do not overflow while infinities still propagate.
pub fn average(data: &[Sample], target: usize) -> Series {
    bucket_ranges(data.len(), target)
        .filter(|group| !group.is_empty())
        .map(|group| {
            let count = group.len() as f64;
            data[group].iter().fold(Sample::new(0.0, 0.0), |mean, s| {
                Sample::new(mean.t + s.t / count, mean.v + s.v / count)
            })
        })
        .collect()
}

/// Keep one sample per group; `better(candidate, best)` replaces the current pick
fn pick_per_group<F>(data: &[Sample], target: usize, better: F) -> Series
where
    F: Fn(f64, f64) -> bool,
{
    bucket_ranges(data.len(), target)
        .filter_map(|group| {
            let (first, rest) = data[group].split_first()?;
            Some(rest.iter().fold(*first, |best, s| {
                if better(s.v, best.v) { *s } else { best }
            }))
        })
        .collect()
}
