//! Visible data rectangle and the five-way region partition

use crate::error::{EngineError, Result};
use crate::series::{Sample, Series};
use serde::{Deserialize, Serialize};

/// Visible region in data coordinates (not pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x_start: f64,
    pub x_end: f64,
    pub y_start: f64,
    pub y_end: f64,
}

/// Where a sample sits relative to a [`Viewport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// `t <= x_start`
    Left,
    /// `t >= x_end`
    Right,
    /// Within the time range, at or above `y_end`
    Top,
    /// Within the time range, at or below `y_start`
    Bottom,
    /// Within both ranges
    Inside,
}

impl Region {
    pub fn name(&self) -> &'static str {
        match self {
            Region::Left => "left",
            Region::Right => "right",
            Region::Top => "top",
            Region::Bottom => "bottom",
            Region::Inside => "inside",
        }
    }
}

impl Viewport {
    /// Checked constructor; bounds must be ordered and not NaN
    pub fn new(x_start: f64, x_end: f64, y_start: f64, y_end: f64) -> Result<Self> {
        // NaN fails both comparisons
        if !(x_start <= x_end && y_start <= y_end) {
            return Err(EngineError::InvalidViewport {
                x_start,
                x_end,
                y_start,
                y_end,
            });
        }
        Ok(Self {
            x_start,
            x_end,
            y_start,
            y_end,
        })
    }

    /// No zoom applied: every sample is inside
    pub const fn unbounded() -> Self {
        Self {
            x_start: f64::NEG_INFINITY,
            x_end: f64::INFINITY,
            y_start: f64::NEG_INFINITY,
            y_end: f64::INFINITY,
        }
    }

    /// Build from the chart's `[x, y]` min and max corners
    pub fn from_bounds(min: [f64; 2], max: [f64; 2]) -> Result<Self> {
        Self::new(min[0], max[0], min[1], max[1])
    }

    pub fn is_unbounded(&self) -> bool {
        *self == Self::unbounded()
    }

    /// Classify one sample.
    ///
    /// The x tests run first, so a sample on a vertical edge belongs to
    /// `Left`/`Right` whatever its value. Anything failing every comparison
    /// (NaN) falls through to `Inside`.
    pub fn classify(&self, sample: &Sample) -> Region {
        if sample.t <= self.x_start {
            Region::Left
        } else if sample.t >= self.x_end {
            Region::Right
        } else if sample.v >= self.y_end {
            Region::Top
        } else if sample.v <= self.y_start {
            Region::Bottom
        } else {
            Region::Inside
        }
    }

    pub fn contains(&self, sample: &Sample) -> bool {
        self.classify(sample) == Region::Inside
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// A series split into the five regions, each keeping input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub left: Series,
    pub right: Series,
    pub top: Series,
    pub bottom: Series,
    pub inside: Series,
}

impl Partition {
    pub fn region(&self, region: Region) -> &Series {
        match region {
            Region::Left => &self.left,
            Region::Right => &self.right,
            Region::Top => &self.top,
            Region::Bottom => &self.bottom,
            Region::Inside => &self.inside,
        }
    }

    fn region_mut(&mut self, region: Region) -> &mut Series {
        match region {
            Region::Left => &mut self.left,
            Region::Right => &mut self.right,
            Region::Top => &mut self.top,
            Region::Bottom => &mut self.bottom,
            Region::Inside => &mut self.inside,
        }
    }

    /// Total samples across all regions
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len() + self.top.len() + self.bottom.len() + self.inside.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split `data` into regions relative to `viewport`
pub fn partition(data: &[Sample], viewport: &Viewport) -> Partition {
    profiling::scope!("partition");

    let mut parts = Partition::default();
    for sample in data {
        parts.region_mut(viewport.classify(sample)).push(*sample);
    }

    tracing::trace!(
        left = parts.left.len(),
        right = parts.right.len(),
        top = parts.top.len(),
        bottom = parts.bottom.len(),
        inside = parts.inside.len(),
        "partitioned series"
    );
    parts
}
