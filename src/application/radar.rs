//! Radar chart assembly: three group polygons over ten shared measure axes.
//!
//! Produces a renderer-agnostic chart description. The TUI draws it on a
//! canvas; any other front end can consume the same data.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::Serialize;

use crate::domain::{FeatureGroup, Measure, ScaledMeasurements, MEASURE_COUNT};

/// Radial axis range shared by every spoke.
pub const RADIAL_RANGE: (f64, f64) = (0.0, 1.0);

/// Category labels in axis order.
pub const RADAR_CATEGORIES: [&str; MEASURE_COUNT] = [
    "Radius",
    "Texture",
    "Perimeter",
    "Area",
    "Smoothness",
    "Compactness",
    "Concavity",
    "Concave Points",
    "Symmetry",
    "Fractal Dimension",
];

/// One group's polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub name: &'static str,
    pub group: FeatureGroup,
    /// Radii in category order, clamped to [`RADIAL_RANGE`].
    pub values: [f64; MEASURE_COUNT],
}

/// Angle of axis `index`: first axis at 12 o'clock, proceeding clockwise.
#[must_use]
pub fn axis_angle(index: usize) -> f64 {
    FRAC_PI_2 - TAU * index as f64 / MEASURE_COUNT as f64
}

impl RadarSeries {
    /// Closed polygon in cartesian coordinates (first vertex repeated).
    #[must_use]
    pub fn polygon(&self) -> Vec<(f64, f64)> {
        let mut points: Vec<(f64, f64)> = self
            .values
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let theta = axis_angle(i);
                (r * theta.cos(), r * theta.sin())
            })
            .collect();
        if let Some(first) = points.first().copied() {
            points.push(first);
        }
        points
    }
}

/// Renderable radar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub categories: [&'static str; MEASURE_COUNT],
    pub series: [RadarSeries; 3],
    pub radial_range: (f64, f64),
}

/// Build the mean / standard error / worst series from scaled measurements.
#[must_use]
pub fn build_radar_chart(scaled: &ScaledMeasurements) -> RadarChart {
    let (lo, hi) = RADIAL_RANGE;
    let series = FeatureGroup::ALL.map(|group| RadarSeries {
        name: group.series_name(),
        group,
        values: scaled.group(group).map(|v| v.clamp(lo, hi)),
    });

    debug_assert!(Measure::ALL
        .iter()
        .zip(RADAR_CATEGORIES)
        .all(|(m, c)| m.category() == c));

    RadarChart {
        categories: RADAR_CATEGORIES,
        series,
        radial_range: RADIAL_RANGE,
    }
}
