//! Error types for ulog-oxide
//!
//! Every failure in the engine is an input-contract violation detected
//! synchronously and returned to the immediate caller. Nothing is retried.

use thiserror::Error;

/// Main error type for engine operations
#[derive(Error, Debug)]
pub enum EngineError {
    /// A region budget was negative
    #[error("Invalid budget for {region} region: {value}")]
    InvalidBudget { region: &'static str, value: i64 },

    /// Time and value arrays differ in length
    #[error("Length mismatch: {times} timestamps but {values} values")]
    LengthMismatch { times: usize, values: usize },

    /// Time array is not ascending
    #[error("Time array is not ascending at index {index}")]
    UnsortedInput { index: usize },

    /// Sampling algorithm name not recognized
    #[error("Unknown sampling algorithm: '{0}'")]
    UnknownAlgorithm(String),

    /// Viewport bounds out of order or NaN
    #[error("Invalid viewport: x [{x_start}, {x_end}], y [{y_start}, {y_end}]")]
    InvalidViewport {
        x_start: f64,
        x_end: f64,
        y_start: f64,
        y_end: f64,
    },

    /// Selected field is not loaded
    #[error("Field '{0}' not found")]
    FieldNotFound(String),

    /// Column not found in decoder output
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// Polars data processing error
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Background worker thread has gone away
    #[error("Aggregation worker disconnected")]
    WorkerDisconnected,
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// UI-friendly error message formatting
impl EngineError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            EngineError::InvalidBudget { region, value } => {
                format!("Point count for the {} region cannot be {}", region, value)
            }
            EngineError::LengthMismatch { times, values } => {
                format!("{} timestamps but {} values", times, values)
            }
            EngineError::UnsortedInput { index } => {
                format!("Timestamps go backwards at row {}", index)
            }
            EngineError::UnknownAlgorithm(name) => {
                format!("'{}' is not a sampling algorithm", name)
            }
            EngineError::InvalidViewport { .. } => "Visible range is invalid".to_string(),
            EngineError::FieldNotFound(name) => format!("Field '{}' not found", name),
            EngineError::ColumnNotFound(column) => format!("Column '{}' not found", column),
            EngineError::Polars(e) => format!("Data error: {}", e),
            EngineError::Json(e) => format!("Config error: {}", e),
            EngineError::WorkerDisconnected => "Background worker stopped".to_string(),
        }
    }

    /// Get a short title for the error (for toast notifications)
    pub fn title(&self) -> &'static str {
        match self {
            EngineError::InvalidBudget { .. } => "Invalid Point Count",
            EngineError::LengthMismatch { .. } => "Length Mismatch",
            EngineError::UnsortedInput { .. } => "Unsorted Data",
            EngineError::UnknownAlgorithm(_) => "Unknown Algorithm",
            EngineError::InvalidViewport { .. } => "Invalid Viewport",
            EngineError::FieldNotFound(_) => "Field Not Found",
            EngineError::ColumnNotFound(_) => "Column Not Found",
            EngineError::Polars(_) => "Data Error",
            EngineError::Json(_) => "Configuration Error",
            EngineError::WorkerDisconnected => "Worker Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InvalidBudget {
            region: "inside",
            value: -5,
        };
        assert_eq!(
            err.user_message(),
            "Point count for the inside region cannot be -5"
        );
        assert_eq!(err.title(), "Invalid Point Count");

        let err = EngineError::LengthMismatch { times: 4, values: 3 };
        assert_eq!(err.to_string(), "Length mismatch: 4 timestamps but 3 values");
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: EngineError = json_err.into();
        assert!(matches!(err, EngineError::Json(_)));
        assert_eq!(err.title(), "Configuration Error");
    }
}
