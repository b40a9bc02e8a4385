//! Sidebar navigation: brand, route links and the admin profile footer.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::use_notices;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem { path: "/", label: "Dashboard", icon: "layout-dashboard" },
        NavItem { path: "/logs", label: "Logs", icon: "clipboard-list" },
        NavItem { path: "/users", label: "User Management", icon: "users" },
        NavItem { path: "/reports", label: "Reports", icon: "bar-chart" },
        NavItem { path: "/gallery", label: "Selfie Gallery", icon: "camera" },
        NavItem { path: "/notifications", label: "Notifications", icon: "bell" },
        NavItem { path: "/settings", label: "Settings", icon: "settings" },
    ]
}

/// Root is active only on exact match; every other item also covers its sub-paths.
pub fn is_active_path(item_path: &str, current: &str) -> bool {
    if item_path == "/" {
        current == "/"
    } else {
        current.starts_with(item_path)
    }
}

/// Label of the navigation item that owns `path`
pub fn nav_label_for_path(path: &str) -> Option<&'static str> {
    nav_items()
        .into_iter()
        .find(|item| is_active_path(item.path, path))
        .map(|item| item.label)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();
    let notices = use_notices();
    let navigate = use_navigate();

    let expanded = move || ctx.left_open.get();
    let profile = move || {
        auth_state
            .get()
            .session
            .map(|s| s.user)
            .unwrap_or_else(UserInfo::admin)
    };

    let logout = move |_| {
        do_logout(set_auth_state);
        notices.info("Signed out", "You have been logged out.");
        navigate("/login", Default::default());
    };

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <div class="app-sidebar__logo">{icon("building")}</div>
                <Show when=expanded>
                    <div class="app-sidebar__brand-text">
                        <span class="app-sidebar__brand-title">"City Hall"</span>
                        <span class="app-sidebar__brand-subtitle">"Attendance System"</span>
                    </div>
                </Show>
            </div>

            <nav class="app-sidebar__nav">
                {nav_items().into_iter().map(|item| {
                    view! {
                        <A href=item.path attr:class="app-sidebar__link">
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || is_active_path(item.path, &ctx.active.get())
                                title=item.label
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <Show when=expanded>
                                        <span>{item.label}</span>
                                    </Show>
                                </div>
                            </div>
                        </A>
                    }
                }).collect_view()}
            </nav>

            <div class="app-sidebar__footer">
                <Show when=expanded>
                    <div class="app-sidebar__profile">
                        <div class="avatar">{move || contracts::domain::common::initials(&profile().full_name)}</div>
                        <div class="app-sidebar__profile-text">
                            <span class="app-sidebar__profile-name">{move || profile().full_name}</span>
                            <span class="app-sidebar__profile-role">{move || profile().role}</span>
                        </div>
                    </div>
                </Show>
                <button class="app-sidebar__item app-sidebar__logout" on:click=logout title="Logout">
                    <div class="app-sidebar__item-content">
                        {icon("log-out")}
                        <Show when=expanded>
                            <span>"Logout"</span>
                        </Show>
                    </div>
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_exact_match() {
        assert!(is_active_path("/", "/"));
        assert!(!is_active_path("/", "/logs"));
    }

    #[test]
    fn test_other_items_match_prefix() {
        assert!(is_active_path("/logs", "/logs"));
        assert!(is_active_path("/users", "/users/EMP001"));
        assert!(!is_active_path("/reports", "/logs"));
    }

    #[test]
    fn test_nav_label_for_path() {
        assert_eq!(nav_label_for_path("/"), Some("Dashboard"));
        assert_eq!(nav_label_for_path("/gallery"), Some("Selfie Gallery"));
        assert_eq!(nav_label_for_path("/nowhere"), None);
        assert_eq!(nav_items().len(), 7);
    }
}
