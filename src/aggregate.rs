//! Viewport-aware level of detail
//!
//! Full density where the user is looking, a thin but continuous trace
//! everywhere else. Points beyond the visible time range stay represented
//! so axis auto-scaling and line continuity at the edges keep working.

use crate::config::Budgets;
use crate::downsample::{Algorithm, reduce};
use crate::series::{Sample, Series};
use crate::viewport::{Viewport, partition};

/// Reduce `data` for display in `viewport`.
///
/// `top`/`bottom` get `budgets.part`, `inside` gets `budgets.inside` and
/// `left`/`right` get `budgets.outside`. The result is time-ordered.
pub fn aggregate(
    data: &[Sample],
    viewport: &Viewport,
    budgets: &Budgets,
    algorithm: Algorithm,
) -> Series {
    profiling::scope!("aggregate");

    if data.is_empty() {
        return Series::default();
    }

    let parts = partition(data, viewport);

    let top = reduce(&parts.top, budgets.part, algorithm);
    let inside = reduce(&parts.inside, budgets.inside, algorithm);
    let bottom = reduce(&parts.bottom, budgets.part, algorithm);

    // Each block is ordered but they interleave in time
    let mut center: Vec<Sample> = Vec::with_capacity(top.len() + inside.len() + bottom.len());
    center.extend(top);
    center.extend(inside);
    center.extend(bottom);
    center.sort_by(|a, b| a.t.total_cmp(&b.t));

    let left = reduce(&parts.left, budgets.outside, algorithm);
    let right = reduce(&parts.right, budgets.outside, algorithm);

    let mut result = Series::with_capacity(left.len() + center.len() + right.len());
    result.extend(left);
    result.extend(center);
    result.extend(right);

    tracing::debug!(
        algorithm = algorithm.name(),
        input = data.len(),
        output = result.len(),
        "aggregated series"
    );
    result
}
