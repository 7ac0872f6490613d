//! Polars frames from the log decoder into engine fields

use super::field::{FieldSeries, FieldSet};
use crate::error::{EngineError, Result};
use polars::prelude::*;

/// Build one field per value column of `df`.
///
/// `time_column` supplies the shared timestamps; every other column becomes
/// a field named `"<topic>.<column>"`. Columns are cast to `Float64` and
/// nulls become NaN.
pub fn fields_from_dataframe(df: &DataFrame, topic: &str, time_column: &str) -> Result<FieldSet> {
    profiling::scope!("fields_from_dataframe");

    let times = column_to_f64(df, time_column)?;

    let mut fields = FieldSet::new();
    for column in df.get_columns() {
        let name = column.name().as_str();
        if name == time_column {
            continue;
        }
        let values = column_to_f64(df, name)?;
        let field =
            FieldSeries::new(FieldSeries::qualified_name(topic, name), times.clone(), values)?;
        fields.insert(field);
    }

    tracing::debug!(topic, rows = df.height(), fields = fields.len(), "loaded fields");
    Ok(fields)
}

impl FieldSet {
    /// See [`fields_from_dataframe`]
    pub fn from_dataframe(df: &DataFrame, topic: &str, time_column: &str) -> Result<Self> {
        fields_from_dataframe(df, topic, time_column)
    }
}

/// Extract a column as f64, NaN for nulls
fn column_to_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df
        .column(name)
        .map_err(|_| EngineError::ColumnNotFound(name.to_string()))?;

    let values = column
        .as_materialized_series()
        .cast(&DataType::Float64)?
        .f64()?
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect();
    Ok(values)
}
