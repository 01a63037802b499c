//! Chart description handed to the rendering layer
//!
//! The renderer itself (zoom, pan, theme) lives outside this crate; it only
//! needs the points, the x range, the axis titles and a legend label.

use serde::Serialize;

use crate::sampler::{PlotResult, SamplePoint};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub title: String,
}

/// A single line series with its axes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    pub label: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub points: Vec<SamplePoint>,
}

impl ChartConfig {
    pub fn from_result(result: &PlotResult) -> Self {
        ChartConfig {
            label: result.label(),
            x_axis: Axis {
                min: Some(result.domain_min),
                max: Some(result.domain_max),
                title: "f".to_string(),
            },
            y_axis: Axis {
                min: None,
                max: None,
                title: "Amplitude".to_string(),
            },
            points: result.points.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&PlotResult> for ChartConfig {
    fn from(result: &PlotResult) -> Self {
        ChartConfig::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_from_result() {
        let result = PlotResult {
            points: vec![SamplePoint { x: 0.0, y: 1.5 }],
            domain_min: -2.0,
            domain_max: 2.0,
            area: 1.5,
        };
        let chart = ChartConfig::from(&result);
        assert_eq!(chart.label, "S(f) [Area: 1.5]");
        assert_eq!(chart.x_axis.min, Some(-2.0));
        assert_eq!(chart.y_axis.title, "Amplitude");

        let json: serde_json::Value = serde_json::from_str(&chart.to_json().unwrap()).unwrap();
        assert_eq!(json["x_axis"]["title"], "f");
        assert_eq!(json["points"][0]["y"], 1.5);
        // unset bounds are left to the renderer
        assert!(json["y_axis"].get("min").is_none());
    }

    #[test]
    fn test_whole_areas_print_without_fraction() {
        let result = PlotResult::empty([-10.0, 10.0]);
        assert_eq!(ChartConfig::from_result(&result).label, "S(f) [Area: 0]");
    }
}
