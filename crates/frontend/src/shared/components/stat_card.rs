use crate::shared::icons::icon;
use contracts::shared::indicators::{format_change, IndicatorStatus, ValueFormat};
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Primary numeric value (None = not available)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    #[prop(optional)]
    format: Option<ValueFormat>,
    /// Visual status
    #[prop(into)]
    status: Signal<IndicatorStatus>,
    /// Change % relative to the previous period
    #[prop(optional, into)]
    change_percent: Signal<Option<f64>>,
    /// Optional subtitle below the value
    #[prop(optional, into)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let format = format.unwrap_or(ValueFormat::Integer);

    let status_class = move || format!("stat-card stat-card--{}", status.get().css_modifier());

    let formatted = move || match value.get() {
        Some(v) => format.render(v),
        None => "\u{2014}".to_string(),
    };

    let change_view = move || {
        change_percent.get().map(|pct| {
            let cls = if pct > 0.0 {
                "stat-card__change stat-card__change--up"
            } else if pct < 0.0 {
                "stat-card__change stat-card__change--down"
            } else {
                "stat-card__change stat-card__change--flat"
            };
            view! { <span class=cls>{format_change(pct)}</span> }
        })
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {formatted}
                    {change_view}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}

/// Stat card for a plain count
#[component]
pub fn CountCard(
    #[prop(into)] label: String,
    #[prop(into)] icon_name: String,
    #[prop(into)] count: Signal<usize>,
    #[prop(optional)] status: Option<IndicatorStatus>,
) -> impl IntoView {
    let status = status.unwrap_or(IndicatorStatus::Neutral);
    view! {
        <StatCard
            label=label
            icon_name=icon_name
            value=Signal::derive(move || Some(count.get() as f64))
            status=Signal::derive(move || status)
        />
    }
}
