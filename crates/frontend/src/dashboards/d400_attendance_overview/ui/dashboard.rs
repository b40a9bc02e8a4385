use crate::domain::a001_attendance_log::ui::list::status_color;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::charts::{BarChart, DonutChart, DonutLegend};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{format_time, today_long};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_attendance_overview::{
    DAILY_LOGINS, DEPARTMENT_DISTRIBUTION, OVERVIEW, RECENT_ACTIVITY,
};
use contracts::domain::a003_notification::open_count;
use contracts::domain::common::initials;
use contracts::shared::indicators::IndicatorStatus;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

fn progress_bar(percent: f64) -> impl IntoView {
    view! {
        <div class="progress">
            <div class="progress__fill" style=format!("width: {:.0}%;", percent.clamp(0.0, 100.0))></div>
        </div>
    }
}

#[component]
pub fn AttendanceOverviewDashboard() -> impl IntoView {
    log!("AttendanceOverviewDashboard: render");

    let figures = (*OVERVIEW).clone();
    let alerts = open_count();
    let logins_pct = figures.percent_of_headcount(figures.logins_today);
    let active_pct = figures.percent_of_headcount(figures.active_employees);
    let late_pct = figures.percent_of_headcount(figures.late_arrivals);

    view! {
        <PageFrame page_id="d400_attendance_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Dashboard" subtitle="Welcome back! Here's what's happening at City Hall today.".to_string()>
                <div class="page__today">
                    <div class="page__today-label">"Today"</div>
                    <div class="page__today-value">{today_long()}</div>
                </div>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <div class="stat-grid__item">
                        <StatCard
                            label="Total Logins Today"
                            icon_name="user-check"
                            value=Signal::derive(move || Some(figures.logins_today as f64))
                            status=Signal::derive(|| IndicatorStatus::Good)
                            change_percent=Signal::derive(move || Some(figures.logins_change_percent))
                            subtitle=Signal::derive(|| Some("from yesterday".to_string()))
                        />
                        {progress_bar(logins_pct)}
                    </div>
                    <div class="stat-grid__item">
                        <StatCard
                            label="Active Employees"
                            icon_name="users"
                            value=Signal::derive(move || Some(figures.active_employees as f64))
                            status=Signal::derive(|| IndicatorStatus::Neutral)
                            subtitle=Signal::derive(|| Some("Currently in the building".to_string()))
                        />
                        {progress_bar(active_pct)}
                    </div>
                    <div class="stat-grid__item">
                        <StatCard
                            label="Late Arrivals"
                            icon_name="clock"
                            value=Signal::derive(move || Some(figures.late_arrivals as f64))
                            status=Signal::derive(|| IndicatorStatus::Warning)
                            subtitle=Signal::derive(move || Some(format!("+{} more than usual", figures.late_above_usual)))
                        />
                        {progress_bar(late_pct)}
                    </div>
                    <div class="stat-grid__item">
                        <StatCard
                            label="Alerts"
                            icon_name="alert-triangle"
                            value=Signal::derive(move || Some(alerts as f64))
                            status=Signal::derive(|| IndicatorStatus::Bad)
                            subtitle=Signal::derive(|| Some("Require immediate attention".to_string()))
                        />
                        <Flex gap=FlexGap::Small>
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Missing Selfie"</Badge>
                        </Flex>
                    </div>
                </div>

                <div class="chart-grid">
                    <CardAnimated delay_ms=0 title="Daily Login Trends".to_string() subtitle="Login activity over the past week".to_string()>
                        <BarChart points=DAILY_LOGINS.clone() color="#3D99C0" unit=" logins" />
                    </CardAnimated>

                    <CardAnimated delay_ms=80 title="Department Distribution".to_string() subtitle="Employee distribution by department".to_string()>
                        <div class="donut-with-legend">
                            <DonutChart slices=DEPARTMENT_DISTRIBUTION.clone() />
                            <DonutLegend slices=DEPARTMENT_DISTRIBUTION.clone() />
                        </div>
                    </CardAnimated>
                </div>

                <CardAnimated delay_ms=160 title="Recent Activity".to_string() subtitle="Latest employee login activities".to_string()>
                    <div class="activity-list">
                        {RECENT_ACTIVITY.iter().map(|entry| view! {
                            <div class="activity-item">
                                <span class="avatar">{initials(&entry.employee)}</span>
                                <div class="activity-item__main">
                                    <div class="activity-item__employee">{entry.employee.clone()}</div>
                                    <div class="activity-item__action">{entry.action.clone()}</div>
                                </div>
                                <div class="activity-item__meta">
                                    <span class="activity-item__time">{icon("clock")} {format_time(&entry.time)}</span>
                                    <Badge appearance=BadgeAppearance::Tint color=status_color(entry.status)>
                                        {entry.status.display_name()}
                                    </Badge>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </CardAnimated>
            </div>
        </PageFrame>
    }
}
