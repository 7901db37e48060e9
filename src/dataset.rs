//! Chart.js dataset model
//!
//! Mirrors the JSON shape Chart.js consumes in its `data` option. Optional
//! fields are skipped during serialization so every chart kind emits exactly
//! the keys it needs and nothing else.

use serde::{Deserialize, Serialize};

/// Complete payload for one chart: axis labels plus one or more series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartData {
    /// Axis or slice labels; absent for point-based kinds (scatter, bubble)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// The series drawn on the chart
    pub datasets: Vec<Series>,
}

/// A single series within a chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Legend label; pie and doughnut series carry none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// The series values, scalar or point-based
    pub data: SeriesData,
    /// Stroke color for line-drawn kinds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Fill color, either one color for the series or one per element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorSpec>,
    /// Whether the area under a line is filled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

/// Series values; scalar per label, or coordinate objects
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SeriesData {
    Scalars(Vec<i64>),
    Points(Vec<Point>),
}

impl SeriesData {
    /// Number of elements in the series
    pub fn len(&self) -> usize {
        match self {
            SeriesData::Scalars(values) => values.len(),
            SeriesData::Points(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One scatter or bubble coordinate; `r` is the bubble radius
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
}

/// A single color applied to the whole series, or one color per element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ColorSpec {
    Solid(String),
    Palette(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_skipped() {
        let data = ChartData {
            labels: None,
            datasets: vec![Series {
                label: None,
                data: SeriesData::Scalars(vec![1, 2]),
                border_color: None,
                background_color: None,
                fill: None,
            }],
        };
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"datasets":[{"data":[1,2]}]}"#);
    }

    #[test]
    fn series_keys_are_camel_case() {
        let series = Series {
            label: Some("Sales".to_string()),
            data: SeriesData::Scalars(vec![5]),
            border_color: Some("rgba(1, 2, 3, 1)".to_string()),
            background_color: Some(ColorSpec::Solid("rgba(4, 5, 6, 0.2)".to_string())),
            fill: Some(true),
        };
        let json = serde_json::to_string(&series).unwrap();
        assert!(json.contains(r#""borderColor":"#));
        assert!(json.contains(r#""backgroundColor":"#));
        assert!(!json.contains("border_color"));
    }

    #[test]
    fn point_radius_only_appears_when_set() {
        let flat = Point { x: 1.5, y: 2.5, r: None };
        assert_eq!(serde_json::to_string(&flat).unwrap(), r#"{"x":1.5,"y":2.5}"#);

        let bubble = Point { x: 1.0, y: 2.0, r: Some(8.25) };
        assert_eq!(
            serde_json::to_string(&bubble).unwrap(),
            r#"{"x":1.0,"y":2.0,"r":8.25}"#
        );
    }

    #[test]
    fn color_spec_serializes_untagged() {
        let solid = ColorSpec::Solid("rgba(9, 9, 9, 1)".to_string());
        assert_eq!(serde_json::to_string(&solid).unwrap(), r#""rgba(9, 9, 9, 1)""#);

        let palette = ColorSpec::Palette(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(serde_json::to_string(&palette).unwrap(), r#"["a","b"]"#);
    }

    #[test]
    fn round_trips_through_json() {
        let data = ChartData {
            labels: Some(vec!["one".to_string(), "two".to_string()]),
            datasets: vec![Series {
                label: Some("demo".to_string()),
                data: SeriesData::Points(vec![Point { x: 1.0, y: 2.0, r: Some(5.0) }]),
                border_color: None,
                background_color: Some(ColorSpec::Palette(vec!["rgba(1, 2, 3, 0.6)".to_string()])),
                fill: None,
            }],
        };
        let json = serde_json::to_string(&data).unwrap();
        let back: ChartData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
