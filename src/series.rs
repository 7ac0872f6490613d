//! Time-ordered sample containers

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// A single (time, value) sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub t: f64,
    pub v: f64,
}

impl Sample {
    pub const fn new(t: f64, v: f64) -> Self {
        Self { t, v }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((t, v): (f64, f64)) -> Self {
        Self { t, v }
    }
}

impl From<[f64; 2]> for Sample {
    fn from([t, v]: [f64; 2]) -> Self {
        Self { t, v }
    }
}

impl From<Sample> for [f64; 2] {
    fn from(s: Sample) -> Self {
        [s.t, s.v]
    }
}

/// Ascending-time sequence of samples
///
/// Ordering is the caller's contract; `Series` itself does not re-sort.
/// Use [`Series::first_unsorted`] to check it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Build from parallel time and value slices of equal length
    pub fn from_columns(times: &[f64], values: &[f64]) -> Result<Self> {
        if times.len() != values.len() {
            return Err(EngineError::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        Ok(times
            .iter()
            .zip(values)
            .map(|(&t, &v)| Sample { t, v })
            .collect())
    }

    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    pub fn into_vec(self) -> Vec<Sample> {
        self.samples
    }

    /// Index of the first sample whose time is lower than its predecessor's
    pub fn first_unsorted(&self) -> Option<usize> {
        first_unsorted(self.samples.iter().map(|s| s.t))
    }

    /// Plain `[t, v]` pairs for a chart surface
    pub fn to_points(&self) -> Vec<[f64; 2]> {
        self.samples.iter().map(|&s| s.into()).collect()
    }
}

/// Index of the first element that breaks ascending order; a NaN time always does
pub(crate) fn first_unsorted(times: impl IntoIterator<Item = f64>) -> Option<usize> {
    let mut prev = f64::NEG_INFINITY;
    for (i, t) in times.into_iter().enumerate() {
        if t.is_nan() || t < prev {
            return Some(i);
        }
        prev = t;
    }
    None
}

impl Deref for Series {
    type Target = [Sample];

    fn deref(&self) -> &[Sample] {
        &self.samples
    }
}

impl From<Vec<Sample>> for Series {
    fn from(samples: Vec<Sample>) -> Self {
        Self { samples }
    }
}

impl From<&[Sample]> for Series {
    fn from(samples: &[Sample]) -> Self {
        Self {
            samples: samples.to_vec(),
        }
    }
}

impl From<Vec<(f64, f64)>> for Series {
    fn from(pairs: Vec<(f64, f64)>) -> Self {
        pairs.into_iter().map(Sample::from).collect()
    }
}

impl FromIterator<Sample> for Series {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl Extend<Sample> for Series {
    fn extend<I: IntoIterator<Item = Sample>>(&mut self, iter: I) {
        self.samples.extend(iter);
    }
}

impl IntoIterator for Series {
    type Item = Sample;
    type IntoIter = std::vec::IntoIter<Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
