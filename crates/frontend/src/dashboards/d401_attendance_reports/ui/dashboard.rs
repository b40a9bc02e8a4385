use crate::layout::use_notices;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::charts::{BarChart, DonutChart, DonutLegend, LineChart, LineSeries};
use crate::shared::components::filter_panel::{options_with_all, FilterSelect, SelectOption};
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_axis_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d401_attendance_reports::{
    trend_series, ReportFormat, ReportKind, ReportRequest, ATTENDANCE_TREND, DEPARTMENT_PERFORMANCE,
    PUNCTUALITY,
};
use contracts::domain::common::DEPARTMENTS;
use contracts::shared::chart_data::SeriesPoint;
use contracts::shared::record_filter::ALL_SENTINEL;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

fn trend_chart_data() -> (Vec<String>, Vec<LineSeries>) {
    let labels = ATTENDANCE_TREND.iter().map(|d| format_axis_date(&d.date)).collect();
    let series = trend_series(&ATTENDANCE_TREND)
        .into_iter()
        .map(|(name, color, points)| LineSeries {
            name: name.to_string(),
            color: color.to_string(),
            values: points.iter().map(|p| p.value).collect(),
        })
        .collect();
    (labels, series)
}

#[component]
fn ReportTemplateCard(kind: ReportKind, selected: RwSignal<String>) -> impl IntoView {
    let code = kind.code();
    view! {
        <div
            class="report-template"
            class:report-template--selected=move || selected.get() == code
            on:click=move |_| selected.set(code.to_string())
        >
            <div class="report-template__header">
                <span class=format!("report-template__icon report-template__icon--{}", code)>{icon(kind.icon_name())}</span>
                <h3 class="report-template__title">{kind.title()}</h3>
            </div>
            <p class="report-template__description">{kind.description()}</p>
        </div>
    }
}

#[component]
pub fn AttendanceReportsDashboard() -> impl IntoView {
    log!("AttendanceReportsDashboard: render");
    let notices = use_notices();

    let selected_kind = RwSignal::new(ReportKind::default().code().to_string());
    let department = RwSignal::new(ALL_SENTINEL.to_string());
    let format = RwSignal::new(ReportFormat::default().code().to_string());

    let generate = move |_| {
        let request = ReportRequest::from_selection(
            &selected_kind.get_untracked(),
            &department.get_untracked(),
            &format.get_untracked(),
        );
        log::info!("report requested: {:?} -> {}", request, request.file_name());
        notices.success(
            "Report Generation Started",
            format!(
                "{} ({}) will be prepared as {}.",
                request.kind.title(),
                request.department_label(),
                request.format.display_name()
            ),
        );
    };

    let department_options = options_with_all(
        "All Departments",
        DEPARTMENTS.iter().map(|d| (d.to_string(), d.to_string())),
    );
    let format_options: Vec<SelectOption> = ReportFormat::all()
        .into_iter()
        .map(|f| SelectOption {
            value: f.code().to_string(),
            label: f.display_name().to_string(),
        })
        .collect();

    let (trend_labels, trend_lines) = trend_chart_data();
    let performance: Vec<SeriesPoint> = DEPARTMENT_PERFORMANCE
        .iter()
        .map(|s| SeriesPoint { label: s.label.clone(), value: s.value })
        .collect();

    view! {
        <PageFrame page_id="d401_attendance_reports--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Reports & Analytics" subtitle="Generate comprehensive attendance reports and analytics".to_string()>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| notices.info("Print Preview", "Printing is not available in this console.")
                >
                    {icon("file-text")}
                    "Print Preview"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| notices.info("Email Report", "Report delivery is not available in this console.")
                >
                    {icon("mail")}
                    "Email Report"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="report-templates">
                    {ReportKind::all().into_iter().map(|kind| view! {
                        <ReportTemplateCard kind=kind selected=selected_kind />
                    }).collect_view()}
                </div>

                <CardAnimated title="Report Configuration".to_string() subtitle="Configure your report parameters and download options".to_string()>
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <FilterSelect value=department options=department_options label="Department" />
                        <FilterSelect value=format options=format_options label="Format" />
                        <Button appearance=ButtonAppearance::Primary on_click=generate>
                            {icon("download")}
                            "Generate Report"
                        </Button>
                    </Flex>
                </CardAnimated>

                <div class="chart-grid">
                    <CardAnimated delay_ms=0 title="Attendance Trends".to_string() subtitle="Daily attendance patterns over time".to_string()>
                        <LineChart labels=trend_labels series=trend_lines />
                    </CardAnimated>

                    <CardAnimated delay_ms=80 title="Punctuality Distribution".to_string() subtitle="Employee arrival time breakdown".to_string()>
                        <div class="donut-with-legend">
                            <DonutChart slices=PUNCTUALITY.clone() />
                            <DonutLegend slices=PUNCTUALITY.clone() raw_values=true unit="%" />
                        </div>
                    </CardAnimated>
                </div>

                <CardAnimated delay_ms=160 title="Department Performance".to_string() subtitle="Attendance rates by department".to_string()>
                    <BarChart points=performance unit="%" />
                </CardAnimated>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_chart_data_is_aligned() {
        let (labels, series) = trend_chart_data();
        assert_eq!(labels.len(), ATTENDANCE_TREND.len());
        assert_eq!(labels[0], "Jan 1");
        assert_eq!(series.len(), 3);
        assert!(series.iter().all(|s| s.values.len() == labels.len()));
    }
}
