//! CardAnimated: thaw `Card` with the `card-appear` entry animation.
//!
//! ```ignore
//! <CardAnimated title="Weekly Logins" delay_ms=80>
//!     <BarChart points=... />
//! </CardAnimated>
//! ```
//! Pass increasing `delay_ms` values to stagger a row of cards.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles appended after the animation.
    #[prop(optional, into)]
    style: String,
    /// Optional card heading.
    #[prop(optional, into)]
    title: Option<String>,
    /// Muted line under the heading.
    #[prop(optional, into)]
    subtitle: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    let header = title.map(|title| {
        view! {
            <div class="card__header">
                <h3 class="card__title">{title}</h3>
                {subtitle.map(|s| view! { <p class="card__subtitle">{s}</p> })}
            </div>
        }
    });

    view! {
        <Card attr:style=full_style>
            {header}
            {children()}
        </Card>
    }
}
