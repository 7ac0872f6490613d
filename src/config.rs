//! Chart configuration values
//!
//! The GUI owns where these are stored; the engine only reads the values.
//! Keys follow the settings file of the desktop tool (`chartSampling`,
//! `insidePointNum`, ...).

use crate::constants::budgets::{
    DEFAULT_INSIDE_POINTS, DEFAULT_OUTSIDE_POINTS, DEFAULT_PART_POINTS,
};
use crate::downsample::Algorithm;
use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Chart rendering style, passed through to the chart surface untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Line,
    Scatter,
}

/// Validated per-region point budgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budgets {
    /// Visible rectangle
    pub inside: usize,
    /// Above and below the rectangle
    pub part: usize,
    /// Left and right of the rectangle
    pub outside: usize,
}

impl Budgets {
    pub const fn new(inside: usize, part: usize, outside: usize) -> Self {
        Self {
            inside,
            part,
            outside,
        }
    }

    /// Check signed values from configuration; negatives are rejected, never clamped
    pub fn try_from_signed(inside: i64, part: i64, outside: i64) -> Result<Self> {
        Ok(Self {
            inside: non_negative("inside", inside)?,
            part: non_negative("part", part)?,
            outside: non_negative("outside", outside)?,
        })
    }
}

impl Default for Budgets {
    fn default() -> Self {
        Self::new(DEFAULT_INSIDE_POINTS, DEFAULT_PART_POINTS, DEFAULT_OUTSIDE_POINTS)
    }
}

fn non_negative(region: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| EngineError::InvalidBudget { region, value })
}

/// Sampling settings read by the engine on every redraw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartConfig {
    pub chart_type: ChartType,
    #[serde(rename = "chartSampling")]
    pub sampling: Algorithm,
    pub inside_point_num: i64,
    pub part_point_num: i64,
    pub outside_point_num: i64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            chart_type: ChartType::default(),
            sampling: Algorithm::default(),
            inside_point_num: DEFAULT_INSIDE_POINTS as i64,
            part_point_num: DEFAULT_PART_POINTS as i64,
            outside_point_num: DEFAULT_OUTSIDE_POINTS as i64,
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validated budgets
    pub fn budgets(&self) -> Result<Budgets> {
        Budgets::try_from_signed(
            self.inside_point_num,
            self.part_point_num,
            self.outside_point_num,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChartConfig::default();
        assert_eq!(config.sampling, Algorithm::Lttb);
        assert_eq!(config.chart_type, ChartType::Line);
        assert_eq!(config.budgets().unwrap(), Budgets::new(1000, 200, 100));
    }

    #[test]
    fn test_parse_settings() {
        let json = r#"{
            "chartType": "scatter",
            "chartSampling": "min",
            "insidePointNum": 500,
            "partPointNum": 50,
            "outsidePointNum": 10
        }"#;
        let config = ChartConfig::from_json_str(json).unwrap();

        assert_eq!(config.chart_type, ChartType::Scatter);
        assert_eq!(config.sampling, Algorithm::Min);
        assert_eq!(config.budgets().unwrap(), Budgets::new(500, 50, 10));
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = ChartConfig::from_json_str(r#"{ "chartSampling": "average" }"#).unwrap();
        assert_eq!(config.sampling, Algorithm::Average);
        assert_eq!(config.inside_point_num, 1000);
    }

    #[test]
    fn test_round_trip() {
        let config = ChartConfig {
            sampling: Algorithm::Max,
            part_point_num: 7,
            ..Default::default()
        };
        let json = config.to_json_string().unwrap();
        assert!(json.contains("\"chartSampling\": \"max\""));
        assert_eq!(ChartConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_negative_budget_rejected() {
        let config = ChartConfig {
            outside_point_num: -1,
            ..Default::default()
        };
        let err = config.budgets().unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidBudget {
                region: "outside",
                value: -1
            }
        ));

        // Zero is a valid, if useless, budget
        assert!(Budgets::try_from_signed(0, 0, 0).is_ok());
    }

    #[test]
    fn test_unknown_sampling_rejected() {
        let err = ChartConfig::from_json_str(r#"{ "chartSampling": "bogus" }"#).unwrap_err();
        assert!(matches!(err, EngineError::Json(_)));
        assert!(err.to_string().contains("Unknown sampling algorithm"));
    }
}
