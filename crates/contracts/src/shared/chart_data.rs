use serde::{Deserialize, Serialize};

/// One labelled value of a bar or line series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// One segment of a donut chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
    /// CSS colour, e.g. "#3D99C0"
    pub color: String,
}

pub fn point(label: &str, value: f64) -> SeriesPoint {
    SeriesPoint {
        label: label.to_string(),
        value,
    }
}

pub fn slice(label: &str, value: f64, color: &str) -> ChartSlice {
    ChartSlice {
        label: label.to_string(),
        value,
        color: color.to_string(),
    }
}
