use contracts::shared::chart_data::ChartSlice;
use leptos::prelude::*;

use super::{donut_circumference, donut_segments, percent_of};

const RADIUS: f64 = 60.0;
const STROKE: f64 = 22.0;

/// Ring chart; each slice carries its own colour
#[component]
pub fn DonutChart(
    slices: Vec<ChartSlice>,
    /// Text in the hole, e.g. the total
    #[prop(optional, into)]
    center_label: Option<String>,
) -> impl IntoView {
    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let segments = donut_segments(&values, RADIUS);
    let circumference = donut_circumference(RADIUS);
    let size = 2.0 * (RADIUS + STROKE);

    let rings = slices
        .into_iter()
        .zip(segments)
        .map(|(slice, seg)| {
            view! {
                <circle
                    cx=size / 2.0
                    cy=size / 2.0
                    r=RADIUS
                    fill="none"
                    stroke=slice.color
                    stroke-width=STROKE
                    stroke-dasharray=format!("{:.3} {:.3}", seg.length, circumference - seg.length)
                    stroke-dashoffset=format!("{:.3}", seg.offset)
                >
                    <title>{format!("{}: {}", slice.label, slice.value)}</title>
                </circle>
            }
        })
        .collect_view();

    view! {
        <svg class="chart chart--donut" viewBox=format!("0 0 {} {}", size, size) role="img">
            {rings}
            {center_label.map(|label| view! {
                <text x=size / 2.0 y=size / 2.0 text-anchor="middle" dominant-baseline="middle" class="chart__center-label">
                    {label}
                </text>
            })}
        </svg>
    }
}

/// Legend rows with colour swatch, label and share of the total
#[component]
pub fn DonutLegend(
    slices: Vec<ChartSlice>,
    /// Show values as given (`true`) or as a share of the total
    #[prop(optional)]
    raw_values: bool,
    #[prop(optional, into)]
    unit: String,
) -> impl IntoView {
    let total: f64 = slices.iter().map(|s| s.value).sum();

    view! {
        <ul class="chart-legend chart-legend--vertical">
            {slices.into_iter().map(|slice| {
                let value = if raw_values {
                    format!("{}{}", slice.value, unit)
                } else {
                    format!("{}%", percent_of(slice.value, total))
                };
                view! {
                    <li class="chart-legend__item">
                        <span class="chart-legend__swatch" style=format!("background: {};", slice.color)></span>
                        <span class="chart-legend__label">{slice.label}</span>
                        <span class="chart-legend__value">{value}</span>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
}
