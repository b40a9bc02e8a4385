use crate::dashboards::{AttendanceOverviewDashboard, AttendanceReportsDashboard};
use crate::domain::a001_attendance_log::ui::list::AttendanceLogList;
use crate::domain::a002_employee::ui::list::EmployeeList;
use crate::domain::a003_notification::ui::list::NotificationList;
use crate::domain::a004_selfie::ui::gallery::SelfieGallery;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::{NoticeHost, Shell};
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::settings::ui::SettingsPage;
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Keeps `ctx.active` and the tab title in step with the router location.
    ctx.init_router_integration();

    view! {
        <Shell left=|| view! { <Sidebar /> }.into_any()>
            <Outlet />
        </Shell>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=MainLayout>
                    <Route path=path!("") view=AttendanceOverviewDashboard />
                    <Route path=path!("logs") view=AttendanceLogList />
                    <Route path=path!("users") view=EmployeeList />
                    <Route path=path!("reports") view=AttendanceReportsDashboard />
                    <Route path=path!("gallery") view=SelfieGallery />
                    <Route path=path!("notifications") view=NotificationList />
                    <Route path=path!("settings") view=SettingsPage />
                </ParentRoute>
            </Routes>
            <NoticeHost />
        </Router>
    }
}
