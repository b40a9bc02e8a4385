use leptos::prelude::*;

use super::{line_points, nice_max, slot_centers};

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 240.0;
const AXIS: f64 = 24.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

/// Several series over shared x labels, with a legend
#[component]
pub fn LineChart(labels: Vec<String>, series: Vec<LineSeries>) -> impl IntoView {
    let plot_height = HEIGHT - AXIS;
    let max = series
        .iter()
        .flat_map(|s| s.values.iter().cloned())
        .fold(0.0, f64::max);
    let scale_max = nice_max(max);
    let centers = slot_centers(labels.len(), WIDTH);

    let legend = series
        .iter()
        .map(|s| {
            view! {
                <span class="chart-legend__item">
                    <span class="chart-legend__swatch" style=format!("background: {};", s.color)></span>
                    {s.name.clone()}
                </span>
            }
        })
        .collect_view();

    let lines = series
        .into_iter()
        .map(|s| {
            let points = line_points(&s.values, scale_max, WIDTH, plot_height);
            view! {
                <polyline points=points fill="none" stroke=s.color stroke-width="2" class="chart__line">
                    <title>{s.name}</title>
                </polyline>
            }
        })
        .collect_view();

    let x_labels = labels
        .into_iter()
        .zip(centers)
        .map(|(label, x)| {
            view! {
                <text x=format!("{:.1}", x) y=format!("{:.1}", HEIGHT - 6.0) text-anchor="middle" class="chart__axis-label">
                    {label}
                </text>
            }
        })
        .collect_view();

    view! {
        <div class="chart-wrapper">
            <svg class="chart chart--line" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) preserveAspectRatio="none" role="img">
                <line x1="0" y1=plot_height x2=WIDTH y2=plot_height class="chart__axis"></line>
                <text x="0" y="12" class="chart__axis-label">{scale_max}</text>
                {lines}
                {x_labels}
            </svg>
            <div class="chart-legend">{legend}</div>
        </div>
    }
}
