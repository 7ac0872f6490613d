//! Render-ready series for the chart surface

use crate::aggregate::aggregate;
use crate::config::{ChartConfig, ChartType};
use crate::data::FieldSet;
use crate::error::Result;
use crate::viewport::Viewport;
use serde::{Deserialize, Serialize};

/// One reduced field, ready to plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSeries {
    pub name: String,
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    /// `[t, v_effective]` pairs in time order
    pub data: Vec<[f64; 2]>,
}

impl RenderSeries {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Aggregate every selected field for `viewport`, in selection order.
///
/// Budgets are validated once up front; an unknown field name fails the
/// whole call rather than being skipped.
pub fn build_series<S: AsRef<str>>(
    fields: &FieldSet,
    selected: &[S],
    viewport: &Viewport,
    config: &ChartConfig,
) -> Result<Vec<RenderSeries>> {
    profiling::scope!("build_series");

    let budgets = config.budgets()?;

    selected
        .iter()
        .map(|name| -> Result<RenderSeries> {
            let field = fields.field(name.as_ref())?;
            let reduced = aggregate(&field.effective_series(), viewport, &budgets, config.sampling);
            Ok(RenderSeries {
                name: field.name().to_string(),
                chart_type: config.chart_type,
                data: reduced.to_points(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FieldSeries;
    use crate::downsample::Algorithm;
    use crate::error::EngineError;

    fn fields() -> FieldSet {
        let times: Vec<f64> = (0..5000).map(|i| i as f64).collect();
        let values: Vec<f64> = times.iter().map(|t| (t * 0.01).cos()).collect();
        [
            FieldSeries::new("flight.roll", times.clone(), values.clone()).unwrap(),
            FieldSeries::new("flight.pitch", times, values)
                .unwrap()
                .with_scale(2.0, 1.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_build_selected_in_order() {
        let config = ChartConfig {
            chart_type: ChartType::Scatter,
            ..Default::default()
        };
        let out = build_series(
            &fields(),
            &["flight.pitch", "flight.roll"],
            &Viewport::unbounded(),
            &config,
        )
        .unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].name, "flight.pitch");
        assert_eq!(out[1].name, "flight.roll");
        assert!(out.iter().all(|s| s.len() == 1000 && s.chart_type == ChartType::Scatter));
    }

    #[test]
    fn test_scale_applied_before_aggregation() {
        let config = ChartConfig {
            sampling: Algorithm::None,
            ..Default::default()
        };
        let out =
            build_series(&fields(), &["flight.pitch"], &Viewport::unbounded(), &config).unwrap();

        // cos(0) * 2 + 1
        assert_eq!(out[0].data[0], [0.0, 3.0]);
        assert_eq!(out[0].len(), 5000);
    }

    #[test]
    fn test_unknown_field() {
        let err = build_series(
            &fields(),
            &["flight.yaw"],
            &Viewport::unbounded(),
            &ChartConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::FieldNotFound(ref n) if n == "flight.yaw"));
    }

    #[test]
    fn test_negative_budget_rejected() {
        let config = ChartConfig {
            inside_point_num: -10,
            ..Default::default()
        };
        let err = build_series(&fields(), &["flight.roll"], &Viewport::unbounded(), &config)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidBudget { region: "inside", .. }));
    }

    #[test]
    fn test_serializes_as_pairs() {
        let series = RenderSeries {
            name: "a.b".to_string(),
            chart_type: ChartType::Line,
            data: vec![[1.0, 2.0]],
        };
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, r#"{"name":"a.b","type":"line","data":[[1.0,2.0]]}"#);
    }
}
