//! Minimal SVG charts for the dashboard and reports pages.
//!
//! Geometry lives in plain functions so it can be checked without a browser;
//! the components only turn it into SVG elements.

pub mod bar_chart;
pub mod donut_chart;
pub mod line_chart;

pub use bar_chart::BarChart;
pub use donut_chart::{DonutChart, DonutLegend};
pub use line_chart::{LineChart, LineSeries};

use std::f64::consts::PI;

/// Upper bound of the value axis: the maximum rounded up to 1, 2, 5 or 10 times a power of ten.
pub fn nice_max(max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let fraction = max / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Heights of bars scaled so that `scale_max` maps to `full_height`.
pub fn bar_heights(values: &[f64], scale_max: f64, full_height: f64) -> Vec<f64> {
    if scale_max <= 0.0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|v| (v.max(0.0) / scale_max).min(1.0) * full_height)
        .collect()
}

/// Evenly spaced x positions of `count` slots across `width`, each at the slot centre.
pub fn slot_centers(count: usize, width: f64) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let step = width / count as f64;
    (0..count).map(|i| step * (i as f64 + 0.5)).collect()
}

/// Polyline "x,y x,y ..." for a series; y grows downwards from `height`.
pub fn line_points(values: &[f64], scale_max: f64, width: f64, height: f64) -> String {
    let xs = slot_centers(values.len(), width);
    let ys = bar_heights(values, scale_max, height);
    xs.iter()
        .zip(ys.iter())
        .map(|(x, h)| format!("{:.1},{:.1}", x, height - h))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One donut segment as `stroke-dasharray` / `stroke-dashoffset` values.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub length: f64,
    pub offset: f64,
}

pub fn donut_circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Splits the circle into segments proportional to `values`, starting at 12 o'clock.
pub fn donut_segments(values: &[f64], radius: f64) -> Vec<DonutSegment> {
    let circumference = donut_circumference(radius);
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return values
            .iter()
            .map(|_| DonutSegment { length: 0.0, offset: 0.0 })
            .collect();
    }
    let mut consumed = 0.0;
    values
        .iter()
        .map(|v| {
            let length = v.max(0.0) / total * circumference;
            let segment = DonutSegment {
                length,
                offset: circumference / 4.0 - consumed,
            };
            consumed += length;
            segment
        })
        .collect()
}

/// Share of `value` in `total`, in whole percent
pub fn percent_of(value: f64, total: f64) -> u32 {
    if total <= 0.0 {
        0
    } else {
        (value / total * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(61.0), 100.0);
        assert_eq!(nice_max(45.0), 50.0);
        assert_eq!(nice_max(20.0), 20.0);
        assert_eq!(nice_max(0.0), 1.0);
    }

    #[test]
    fn test_bar_heights_scale_to_maximum() {
        let heights = bar_heights(&[45.0, 61.0, 8.0], 61.0, 200.0);
        assert_eq!(heights[1], 200.0);
        assert!((heights[0] - 45.0 / 61.0 * 200.0).abs() < 1e-9);
        assert!(heights.iter().all(|h| *h <= 200.0));
        assert_eq!(bar_heights(&[3.0], 0.0, 100.0), vec![0.0]);
    }

    #[test]
    fn test_donut_segments_fill_the_circle() {
        let segments = donut_segments(&[35.0, 25.0, 20.0, 15.0, 5.0], 40.0);
        let total: f64 = segments.iter().map(|s| s.length).sum();
        assert!((total - donut_circumference(40.0)).abs() < 1e-9);
        assert!((segments[0].length / total - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_empty_donut() {
        let segments = donut_segments(&[0.0, 0.0], 40.0);
        assert!(segments.iter().all(|s| s.length == 0.0));
    }

    #[test]
    fn test_line_points() {
        assert_eq!(line_points(&[0.0, 10.0], 10.0, 100.0, 50.0), "25.0,50.0 75.0,0.0");
        assert_eq!(percent_of(35.0, 100.0), 35);
        assert_eq!(percent_of(1.0, 0.0), 0);
    }
}
