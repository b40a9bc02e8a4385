use crate::layout::use_notices;
use crate::shared::components::filter_panel::{options_with_all, FilterPanel, FilterSelect};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::CountCard;
use crate::shared::date_utils::{format_date, format_time};
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_state_from, highlight_matches, visible_records};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_attendance_log::{AttendanceLog, LogStatus, ATTENDANCE_LOGS};
use contracts::domain::common::{initials, DEPARTMENTS};
use contracts::shared::indicators::IndicatorStatus;
use contracts::shared::record_filter::ALL_SENTINEL;
use contracts::shared::summary::count_by_field;
use leptos::prelude::*;
use thaw::*;

impl CsvExportable for AttendanceLog {
    fn headers() -> Vec<&'static str> {
        vec!["Employee ID", "Name", "Department", "Time In", "Time Out", "Date", "Status", "Selfie", "Notes"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.department.clone(),
            self.time_in.clone(),
            self.time_out.clone(),
            self.date.clone(),
            self.status.display_name().to_string(),
            if self.has_selfie() { "Yes" } else { "No" }.to_string(),
            self.notes.clone(),
        ]
    }
}

pub fn status_color(status: LogStatus) -> BadgeColor {
    match status {
        LogStatus::OnTime => BadgeColor::Success,
        LogStatus::Late => BadgeColor::Warning,
        LogStatus::Early => BadgeColor::Informative,
        LogStatus::Warning => BadgeColor::Danger,
    }
}

fn status_indicator(status: LogStatus) -> IndicatorStatus {
    match status {
        LogStatus::OnTime => IndicatorStatus::Good,
        LogStatus::Late => IndicatorStatus::Warning,
        LogStatus::Early => IndicatorStatus::Neutral,
        LogStatus::Warning => IndicatorStatus::Bad,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AttendanceLogList() -> impl IntoView {
    let notices = use_notices();

    let query = RwSignal::new(String::new());
    let department = RwSignal::new(ALL_SENTINEL.to_string());
    let status = RwSignal::new(ALL_SENTINEL.to_string());

    let filter_state = Memo::new(move |_| {
        filter_state_from(
            &query.get(),
            &[("department", department.get()), ("status", status.get())],
        )
    });
    let visible = Memo::new(move |_| visible_records(&ATTENDANCE_LOGS, &filter_state.get()));
    let total = ATTENDANCE_LOGS.len();

    let reset_filters = Callback::new(move |_| {
        query.set(String::new());
        department.set(ALL_SENTINEL.to_string());
        status.set(ALL_SENTINEL.to_string());
    });

    let selfie_open = RwSignal::new(false);
    let selfie_record = RwSignal::new(None::<AttendanceLog>);
    let open_selfie = move |record: AttendanceLog| {
        selfie_record.set(Some(record));
        selfie_open.set(true);
    };

    let export_csv = move |_| {
        let rows = visible.get_untracked();
        let refs: Vec<&AttendanceLog> = rows.iter().collect();
        match export_to_csv(&refs, "attendance_logs.csv") {
            Ok(()) => notices.success("Export Complete", format!("{} records exported to CSV", refs.len())),
            Err(e) => {
                log::error!("attendance log export failed: {}", e);
                notices.error("Export Failed", e);
            }
        }
    };

    let generate_report = move |_| {
        notices.info("Report Queued", "Report generation is not available in this console.");
    };

    let department_options = options_with_all(
        "All Departments",
        DEPARTMENTS.iter().map(|d| (d.to_string(), d.to_string())),
    );
    let status_options = options_with_all(
        "All Status",
        LogStatus::all()
            .into_iter()
            .map(|s| (s.code().to_string(), s.display_name().to_string())),
    );

    view! {
        <PageFrame page_id="a001_attendance_log--list" category=PAGE_CAT_LIST>
            <PageHeader title="Attendance Logs" subtitle="Monitor employee check-ins and check-outs".to_string()>
                <Button appearance=ButtonAppearance::Secondary on_click=export_csv>
                    {icon("download")}
                    "Export CSV"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=generate_report>
                    {icon("file-text")}
                    "Generate Report"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    {LogStatus::all().into_iter().map(|s| {
                        let code = s.code();
                        view! {
                            <CountCard
                                label=s.display_name()
                                icon_name=match s {
                                    LogStatus::OnTime => "check-circle",
                                    LogStatus::Late => "clock",
                                    LogStatus::Early => "trending-up",
                                    LogStatus::Warning => "alert-triangle",
                                }
                                count=Signal::derive(move || visible.with(|rows| count_by_field(rows, "status", code)))
                                status=status_indicator(s)
                            />
                        }
                    }).collect_view()}
                </div>

                <FilterPanel
                    query=query
                    placeholder="Search by name or ID..."
                    active_filters_count=Signal::derive(move || filter_state.with(|s| s.active_count()))
                    on_reset=reset_filters
                >
                    <FilterSelect value=department options=department_options label="Department" />
                    <FilterSelect value=status options=status_options label="Status" />
                </FilterPanel>

                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Employee"</TableHeaderCell>
                                <TableHeaderCell>"Department"</TableHeaderCell>
                                <TableHeaderCell>"Time In"</TableHeaderCell>
                                <TableHeaderCell>"Time Out"</TableHeaderCell>
                                <TableHeaderCell>"Date"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Selfie"</TableHeaderCell>
                                <TableHeaderCell>"Notes"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let needle = query.get();
                                visible.get().into_iter().map(|record| {
                                    let needle = needle.clone();
                                    let record_for_selfie = record.clone();
                                    let has_selfie = record.has_selfie();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="employee-cell">
                                                        <span class="avatar">{initials(&record.name)}</span>
                                                        <div>
                                                            <div class="employee-cell__name">{highlight_matches(&record.name, &needle)}</div>
                                                            <div class="employee-cell__id">{highlight_matches(&record.id, &needle)}</div>
                                                        </div>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Brand>
                                                    {record.department.clone()}
                                                </Badge>
                                            </TableCell>
                                            <TableCell>{format_time(&record.time_in)}</TableCell>
                                            <TableCell>{format_time(&record.time_out)}</TableCell>
                                            <TableCell>{format_date(&record.date)}</TableCell>
                                            <TableCell>
                                                <Badge appearance=BadgeAppearance::Tint color=status_color(record.status)>
                                                    {record.status.display_name()}
                                                </Badge>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| open_selfie(record_for_selfie.clone())
                                                >
                                                    {icon(if has_selfie { "camera" } else { "x-circle" })}
                                                    {if has_selfie { "View" } else { "Missing" }}
                                                </Button>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{record.notes.clone()}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            }}
                        </TableBody>
                    </Table>
                    {move || visible.with(|rows| rows.is_empty()).then(|| view! {
                        <div class="empty-state">"No records match the current filters."</div>
                    })}
                </div>

                <div class="list-footer">
                    {move || format!("Showing {} of {} records", visible.with(|rows| rows.len()), total)}
                </div>
            </div>

            <Dialog open=selfie_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>
                            {move || selfie_record.get().map(|r| format!("Selfie: {}", r.name)).unwrap_or_default()}
                        </DialogTitle>
                        <DialogContent>
                            {move || selfie_record.get().map(|record| {
                                let details = format!(
                                    "{} · {} at {}",
                                    record.department,
                                    format_date(&record.date),
                                    format_time(&record.time_in),
                                );
                                view! {
                                    <div class="selfie-preview">
                                        {match record.selfie_url.clone() {
                                            Some(url) => view! {
                                                <img class="selfie-preview__image" src=url alt=record.name.clone() />
                                            }.into_any(),
                                            None => view! {
                                                <div class="selfie-preview__empty">
                                                    {icon("camera")}
                                                    <p>"No selfie captured"</p>
                                                </div>
                                            }.into_any(),
                                        }}
                                        <p class="selfie-preview__details">{details}</p>
                                        <Badge appearance=BadgeAppearance::Tint color=status_color(record.status)>
                                            {record.status.display_name()}
                                        </Badge>
                                    </div>
                                }
                            })}
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| selfie_open.set(false)>
                                "Close"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;

    #[test]
    fn test_csv_row_matches_headers() {
        let record = &ATTENDANCE_LOGS[3];
        assert_eq!(record.to_csv_row().len(), AttendanceLog::headers().len());
        assert_eq!(record.to_csv_row()[7], "No");
    }

    #[test]
    fn test_export_of_filtered_rows() {
        let state = filter_state_from("", &[("status", "late".to_string())]);
        let rows = visible_records(&ATTENDANCE_LOGS, &state);
        let refs: Vec<&AttendanceLog> = rows.iter().collect();
        let csv = build_csv(&refs).unwrap();
        // BOM + header + one row
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.contains("Sarah Johnson"));
    }
}
