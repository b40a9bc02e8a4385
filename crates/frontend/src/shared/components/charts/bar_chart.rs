use contracts::shared::chart_data::SeriesPoint;
use leptos::prelude::*;

use super::{bar_heights, nice_max, slot_centers};

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 220.0;
const AXIS: f64 = 24.0;

/// Vertical bars, one per point
#[component]
pub fn BarChart(
    points: Vec<SeriesPoint>,
    /// Bar fill; a single colour for the whole series
    #[prop(optional, into)]
    color: Option<String>,
    /// Value suffix in tooltips, e.g. "%"
    #[prop(optional, into)]
    unit: String,
) -> impl IntoView {
    let color = color.unwrap_or_else(|| "var(--color-primary)".to_string());
    let plot_height = HEIGHT - AXIS;
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let scale_max = nice_max(values.iter().cloned().fold(0.0, f64::max));
    let heights = bar_heights(&values, scale_max, plot_height);
    let centers = slot_centers(points.len(), WIDTH);
    let bar_width = if points.is_empty() { 0.0 } else { WIDTH / points.len() as f64 * 0.6 };

    let bars = points
        .into_iter()
        .zip(heights.into_iter().zip(centers))
        .map(|(point, (h, cx))| {
            let tooltip = format!("{}: {}{}", point.label, point.value, unit);
            view! {
                <g class="chart__bar">
                    <rect
                        x=format!("{:.1}", cx - bar_width / 2.0)
                        y=format!("{:.1}", plot_height - h)
                        width=format!("{:.1}", bar_width)
                        height=format!("{:.1}", h)
                        rx="4"
                        fill=color.clone()
                    >
                        <title>{tooltip}</title>
                    </rect>
                    <text x=format!("{:.1}", cx) y=format!("{:.1}", HEIGHT - 6.0) text-anchor="middle" class="chart__axis-label">
                        {point.label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg class="chart chart--bar" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) preserveAspectRatio="none" role="img">
            <line x1="0" y1=plot_height x2=WIDTH y2=plot_height class="chart__axis"></line>
            <text x="0" y="12" class="chart__axis-label">{scale_max}</text>
            {bars}
        </svg>
    }
}
