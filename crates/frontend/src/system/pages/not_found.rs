use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    view! {
        <PageFrame page_id="sys_not_found--system" category=PAGE_CAT_SYSTEM class="page--centered">
            <div class="page__header">
                <h1 class="page__title">"404"</h1>
            </div>
            <div class="page__content">
                <p>"Oops! Page not found: " <code>{move || location.pathname.get()}</code></p>
                <A href="/">"Return to Home"</A>
            </div>
        </PageFrame>
    }
}
