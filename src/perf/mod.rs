//! Performance helpers for callers driving the engine interactively
//!
//! - Background aggregation with "latest request wins" semantics
//! - Throttle/debounce policy for zoom and settings redraws
//! - Instrumentation via the `profiling` crate (puffin/tracy backends)

mod limiter;
mod worker;

pub use limiter::{RateLimitMode, RateLimiter};
pub use worker::{AggregationRequest, AggregationWorker, WorkerResult};

// Re-export profiling macros for convenience
// When no profiling feature is enabled, these become no-ops
pub use profiling;
