//! Point-budget downsampling
//!
//! Five interchangeable reducers, selected by [`Algorithm`]. All of them are
//! pure: they borrow the input, return a freshly built [`Series`] and keep
//! ascending time order.
//!
//! Shared contract: a series is returned unchanged when it already fits the
//! target, when it has fewer than three samples, or when the target is below
//! two.

mod group;
mod lttb;

pub use group::{average, max, min};
pub use lttb::{lttb, triangle_area};

use crate::constants::sampling::{MIN_SERIES_LEN, MIN_TARGET};
use crate::error::EngineError;
use crate::series::{Sample, Series};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Downsampling algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Algorithm {
    /// Largest-Triangle-Three-Buckets
    #[default]
    Lttb,
    /// Mean time and value per group
    Average,
    /// Lowest value per group
    Min,
    /// Highest value per group
    Max,
    /// No reduction
    None,
}

impl Algorithm {
    /// All algorithms in settings-menu order
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Lttb,
        Algorithm::Average,
        Algorithm::Min,
        Algorithm::Max,
        Algorithm::None,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Lttb => "lttb",
            Algorithm::Average => "average",
            Algorithm::Min => "min",
            Algorithm::Max => "max",
            Algorithm::None => "none",
        }
    }

    /// Reduce `data` to at most `target` samples
    pub fn reduce(&self, data: &[Sample], target: usize) -> Series {
        reduce(data, target, *self)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EngineError::UnknownAlgorithm(s.to_string()))
    }
}

impl TryFrom<String> for Algorithm {
    type Error = EngineError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Algorithm> for &'static str {
    fn from(a: Algorithm) -> Self {
        a.name()
    }
}

/// Reduce `data` to at most `target` samples using `algorithm`
pub fn reduce(data: &[Sample], target: usize, algorithm: Algorithm) -> Series {
    profiling::scope!("reduce");

    if is_identity(data.len(), target) {
        return Series::from(data);
    }

    let reduced = match algorithm {
        Algorithm::Lttb => lttb(data, target),
        Algorithm::Average => average(data, target),
        Algorithm::Min => min(data, target),
        Algorithm::Max => max(data, target),
        Algorithm::None => Series::from(data),
    };

    tracing::debug!(
        algorithm = algorithm.name(),
        input = data.len(),
        target,
        output = reduced.len(),
        "reduced series"
    );
    reduced
}

fn is_identity(len: usize, target: usize) -> bool {
    len <= target || len < MIN_SERIES_LEN || target < MIN_TARGET
}

/// Split `len` items into `count` contiguous ranges whose sizes differ by at
/// most one; the first `len % count` ranges hold the extra item.
pub(crate) fn bucket_ranges(len: usize, count: usize) -> impl Iterator<Item = Range<usize>> {
    let (base, extra) = if count == 0 {
        (0, 0)
    } else {
        (len / count, len % count)
    };
    let mut start = 0;
    (0..count).map(move |i| {
        let size = base + usize::from(i < extra);
        let range = start..start + size;
        start += size;
        range
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Series {
        (0..n)
            .map(|i| Sample::new(i as f64, ((i * 7) % 11) as f64))
            .collect()
    }

    fn is_time_ordered(series: &Series) -> bool {
        series.windows(2).all(|w| w[0].t <= w[1].t)
    }

    #[test]
    fn test_bucket_ranges_remainder_first() {
        let ranges: Vec<_> = bucket_ranges(10, 3).collect();
        assert_eq!(ranges, vec![0..4, 4..7, 7..10]);

        let ranges: Vec<_> = bucket_ranges(6, 3).collect();
        assert_eq!(ranges, vec![0..2, 2..4, 4..6]);

        assert_eq!(bucket_ranges(5, 0).count(), 0);
    }

    #[test]
    fn test_identity_when_fits() {
        let data = ramp(20);
        for algorithm in Algorithm::ALL {
            assert_eq!(reduce(&data, 20, algorithm), data);
            assert_eq!(reduce(&data, 50, algorithm), data);
        }
    }

    #[test]
    fn test_small_target_is_identity() {
        let data = ramp(20);
        for algorithm in Algorithm::ALL {
            assert_eq!(reduce(&data, 0, algorithm), data);
            assert_eq!(reduce(&data, 1, algorithm), data);
        }
    }

    #[test]
    fn test_empty_series() {
        for algorithm in Algorithm::ALL {
            assert!(reduce(&[], 10, algorithm).is_empty());
        }
    }

    #[test]
    fn test_none_ignores_target() {
        let data = ramp(100);
        for target in [0, 2, 3, 10, 99, 1000] {
            assert_eq!(reduce(&data, target, Algorithm::None), data);
        }
    }

    #[test]
    fn test_length_bound_and_order() {
        let data = ramp(257);
        for algorithm in Algorithm::ALL {
            for target in [2, 3, 5, 16, 100, 256] {
                let out = reduce(&data, target, algorithm);
                if algorithm != Algorithm::None {
                    assert!(out.len() <= target, "{algorithm} produced {} > {target}", out.len());
                }
                assert!(is_time_ordered(&out), "{algorithm} broke ordering");
            }
        }
    }

    #[test]
    fn test_non_finite_values() {
        let mut data: Vec<Sample> = ramp(40).into_vec();
        data[3].v = f64::NAN;
        data[10].v = f64::INFINITY;
        data[11].v = f64::NEG_INFINITY;
        data[25].v = f64::NAN;
        data[26].v = f64::INFINITY;
        let data = Series::from(data);

        for algorithm in Algorithm::ALL {
            for target in [2, 5, 10] {
                let out = reduce(&data, target, algorithm);
                if algorithm == Algorithm::None {
                    assert_eq!(out.len(), data.len());
                } else {
                    assert!(out.len() <= target, "{algorithm} produced {} > {target}", out.len());
                }
                assert!(is_time_ordered(&out), "{algorithm} broke ordering");
            }
        }

        let kept = reduce(&data, 5, Algorithm::None);
        assert!(kept[3].v.is_nan() && kept[25].v.is_nan());
        assert_eq!(kept[10].v, f64::INFINITY);
        assert_eq!(kept[11].v, f64::NEG_INFINITY);

        // Max never picks NaN over a real value, but infinity wins
        let peaks = reduce(&data, 4, Algorithm::Max);
        assert!(peaks.iter().all(|s| !s.v.is_nan()));
        assert_eq!(peaks[1].v, f64::INFINITY);
    }

    #[test]
    fn test_deterministic() {
        let data = ramp(1000);
        for algorithm in Algorithm::ALL {
            assert_eq!(reduce(&data, 37, algorithm), reduce(&data, 37, algorithm));
        }
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("lttb".parse::<Algorithm>().unwrap(), Algorithm::Lttb);
        assert_eq!(" Average ".parse::<Algorithm>().unwrap(), Algorithm::Average);
        assert_eq!("MAX".parse::<Algorithm>().unwrap(), Algorithm::Max);
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }

        let err = "median".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, EngineError::UnknownAlgorithm(ref name) if name == "median"));
    }

    #[test]
    fn test_algorithm_serde() {
        let json = serde_json::to_string(&Algorithm::Min).unwrap();
        assert_eq!(json, "\"min\"");
        let parsed: Algorithm = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(parsed, Algorithm::None);
        assert!(serde_json::from_str::<Algorithm>("\"cubic\"").is_err());
    }
}
