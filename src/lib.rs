//! ulog-oxide: viewport-aware downsampling for flight-log charts
//!
//! Takes large `(time, value)` series and reduces them to a bounded number
//! of points for interactive rendering. The visible rectangle keeps the
//! densest sampling; everything around it is thinned but still present.
//!
//! ```
//! use ulog_oxide::{Algorithm, Budgets, Series, Viewport, aggregate};
//!
//! let series: Series = (0..10_000)
//!     .map(|i| (i as f64, (i as f64).sin()))
//!     .collect::<Vec<_>>()
//!     .into();
//! let viewport = Viewport::new(2_000.0, 4_000.0, -0.5, 0.5).unwrap();
//! let reduced = aggregate(&series, &viewport, &Budgets::default(), Algorithm::Lttb);
//! assert!(reduced.len() < series.len());
//! ```

pub mod aggregate;
pub mod config;
pub mod constants;
pub mod data;
pub mod downsample;
pub mod error;
pub mod perf;
pub mod render;
pub mod series;
pub mod viewport;

pub use aggregate::aggregate;
pub use config::{Budgets, ChartConfig, ChartType};
pub use data::{FieldSeries, FieldSet};
pub use downsample::{Algorithm, reduce};
pub use error::{EngineError, Result};
pub use render::{RenderSeries, build_series};
pub use series::{Sample, Series};
pub use viewport::{Partition, Region, Viewport, partition};
