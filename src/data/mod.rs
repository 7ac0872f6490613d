pub mod field;
pub mod frame;

// Re-export key types for convenience
pub use field::{FieldSeries, FieldSet};
pub use frame::fields_from_dataframe;
