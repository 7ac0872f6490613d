//! Engine-wide constants and default values
//!
//! Defaults here mirror what the settings panel ships with, so a fresh
//! configuration renders sensibly before the user touches anything.

/// Per-region point budgets
pub mod budgets {
    /// Points kept for the visible rectangle
    pub const DEFAULT_INSIDE_POINTS: usize = 1000;

    /// Points kept above and below the visible rectangle
    pub const DEFAULT_PART_POINTS: usize = 200;

    /// Points kept left and right of the visible time range
    pub const DEFAULT_OUTSIDE_POINTS: usize = 100;
}

/// Sampling algorithm defaults
pub mod sampling {
    /// Smallest target that still produces a meaningful reduction
    pub const MIN_TARGET: usize = 2;

    /// Series shorter than this are never reduced
    pub const MIN_SERIES_LEN: usize = 3;
}

/// Field scaling defaults
pub mod field {
    /// Multiplicative scale applied to raw values
    pub const DEFAULT_ZOOM: f64 = 1.0;

    /// Additive offset applied after scaling
    pub const DEFAULT_OFFSET: f64 = 0.0;

    /// Separator between topic and field in display names
    pub const NAME_SEPARATOR: char = '.';
}

/// Interaction rate limiting defaults
pub mod interaction {
    use std::time::Duration;

    /// Minimum spacing between zoom-driven redraws
    pub const ZOOM_THROTTLE: Duration = Duration::from_millis(50);

    /// Quiet period before a settings change triggers a redraw
    pub const SETTINGS_DEBOUNCE: Duration = Duration::from_millis(300);
}
