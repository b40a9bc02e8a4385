//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Sidebar toggle
//! - Global search box
//! - Notifications button with the open-notification badge
//! - Theme selector and the signed-in admin

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeSelect;
use crate::system::auth::context::use_auth;
use contracts::domain::a003_notification::open_count;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();
    let navigate = use_navigate();

    let is_sidebar_visible = move || ctx.left_open.get();
    let unread = open_count();

    let user = move || {
        auth_state
            .get()
            .session
            .map(|s| s.user)
            .unwrap_or_else(UserInfo::admin)
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Collapse navigation" } else { "Expand navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>

                <div class="top-header__search">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search employees, logs, reports..."
                        prop:value=move || ctx.header_search.get()
                        on:input=move |ev| ctx.header_search.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn top-header__bell"
                    title="Notifications"
                    on:click=move |_| navigate("/notifications", Default::default())
                >
                    {icon("bell")}
                    {(unread > 0).then(|| view! { <span class="top-header__badge">{unread}</span> })}
                </button>

                <ThemeSelect />

                <div class="top-header__user">
                    <div class="avatar avatar--small">{icon("user")}</div>
                    <div class="top-header__user-text">
                        <span class="top-header__user-name">{move || user().full_name}</span>
                        <span class="top-header__user-email">{move || user().email}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
