//! Random dataset generators, one per chart kind
//!
//! Each function takes an explicit element count and returns a fully
//! populated [`ChartData`]. Counts are not validated: zero yields an empty
//! dataset with the kind's usual key shape. Value ranges and color alphas
//! follow common Chart.js demo conventions per kind.

use crate::dataset::{ChartData, ColorSpec, Point, Series, SeriesData};
use crate::providers;

/// Line chart: dated x-axis, one word-labelled series of 0..=100 values
pub fn line(num_points: usize) -> ChartData {
    ChartData {
        labels: Some(date_labels(num_points)),
        datasets: vec![Series {
            label: Some(providers::word()),
            data: SeriesData::Scalars(scalar_values(num_points, 0, 100)),
            border_color: Some(providers::rgba(1.0)),
            background_color: None,
            fill: Some(false),
        }],
    }
}

/// Bar chart: word categories, a fixed "Sales" series of 0..=1000 values
pub fn bar(num_categories: usize) -> ChartData {
    ChartData {
        labels: Some(word_labels(num_categories)),
        datasets: vec![Series {
            label: Some("Sales".to_string()),
            data: SeriesData::Scalars(scalar_values(num_categories, 0, 1000)),
            border_color: None,
            background_color: Some(ColorSpec::Palette(palette(num_categories, 0.6))),
            fill: None,
        }],
    }
}

/// Pie chart: color-name slices, unlabelled series of 1..=100 values
pub fn pie(num_slices: usize) -> ChartData {
    let labels = (0..num_slices).map(|_| providers::color_name()).collect();
    ChartData {
        labels: Some(labels),
        datasets: vec![Series {
            label: None,
            data: SeriesData::Scalars(scalar_values(num_slices, 1, 100)),
            border_color: None,
            background_color: Some(ColorSpec::Palette(palette(num_slices, 0.6))),
            fill: None,
        }],
    }
}

/// Radar chart: word axes, one company-labelled series of 0..=100 values
pub fn radar(num_attributes: usize) -> ChartData {
    ChartData {
        labels: Some(word_labels(num_attributes)),
        datasets: vec![Series {
            label: Some(providers::company_name()),
            data: SeriesData::Scalars(scalar_values(num_attributes, 0, 100)),
            border_color: Some(providers::rgba(1.0)),
            background_color: Some(ColorSpec::Solid(providers::rgba(0.2))),
            fill: None,
        }],
    }
}

/// Scatter chart: no labels, one series of `{x, y}` points in [0, 100)
pub fn scatter(num_points: usize) -> ChartData {
    ChartData {
        labels: None,
        datasets: vec![Series {
            label: Some(providers::word()),
            data: SeriesData::Points(coordinate_points(num_points, false)),
            border_color: None,
            background_color: Some(ColorSpec::Solid(providers::rgba(0.6))),
            fill: None,
        }],
    }
}

/// Bubble chart: scatter points plus a [5, 20) radius, one color per bubble
pub fn bubble(num_points: usize) -> ChartData {
    ChartData {
        labels: None,
        datasets: vec![Series {
            label: Some(providers::word()),
            data: SeriesData::Points(coordinate_points(num_points, true)),
            border_color: None,
            background_color: Some(ColorSpec::Palette(palette(num_points, 0.6))),
            fill: None,
        }],
    }
}

/// Area chart: a line dataset with a translucent fill under the curve
///
/// Rendered by Chart.js as type `line` with `fill: true`; only the shape of
/// the dataset differs from [`line`].
pub fn area(num_points: usize) -> ChartData {
    ChartData {
        labels: Some(date_labels(num_points)),
        datasets: vec![Series {
            label: Some(providers::word()),
            data: SeriesData::Scalars(scalar_values(num_points, 0, 100)),
            border_color: Some(providers::rgba(1.0)),
            background_color: Some(ColorSpec::Solid(providers::rgba(0.2))),
            fill: Some(true),
        }],
    }
}

/// Doughnut chart: identical payload to [`pie`], drawn with a hole
pub fn doughnut(num_slices: usize) -> ChartData {
    pie(num_slices)
}

fn date_labels(count: usize) -> Vec<String> {
    (0..count).map(|_| providers::date_this_month()).collect()
}

fn word_labels(count: usize) -> Vec<String> {
    (0..count).map(|_| providers::word()).collect()
}

fn scalar_values(count: usize, min: i64, max: i64) -> Vec<i64> {
    (0..count).map(|_| providers::int_between(min, max)).collect()
}

fn coordinate_points(count: usize, with_radius: bool) -> Vec<Point> {
    (0..count)
        .map(|_| Point {
            x: providers::float_between(0.0, 100.0),
            y: providers::float_between(0.0, 100.0),
            r: with_radius.then(|| providers::float_between(5.0, 20.0)),
        })
        .collect()
}

fn palette(count: usize, alpha: f64) -> Vec<String> {
    (0..count).map(|_| providers::rgba(alpha)).collect()
}
