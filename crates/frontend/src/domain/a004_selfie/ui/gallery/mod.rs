use crate::layout::use_notices;
use crate::shared::components::filter_panel::{options_with_all, FilterPanel, FilterSelect};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::CountCard;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_state_from, visible_records};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_selfie::{Selfie, SelfieQuality, SelfieStatus, SELFIES};
use contracts::domain::common::{capitalize, initials, DEPARTMENTS};
use contracts::shared::indicators::IndicatorStatus;
use contracts::shared::record_filter::ALL_SENTINEL;
use contracts::shared::summary::count_by_field;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ViewMode {
    Grid,
    List,
}

fn status_color(status: SelfieStatus) -> BadgeColor {
    match status {
        SelfieStatus::Verified => BadgeColor::Success,
        SelfieStatus::Flagged => BadgeColor::Danger,
        SelfieStatus::Review => BadgeColor::Warning,
    }
}

/// CSS modifier for the quality label
fn quality_class(quality: SelfieQuality) -> &'static str {
    match quality {
        SelfieQuality::Excellent => "quality quality--excellent",
        SelfieQuality::Good => "quality quality--good",
        SelfieQuality::Blurry => "quality quality--blurry",
        SelfieQuality::Poor => "quality quality--poor",
    }
}

fn status_badge(status: SelfieStatus) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Filled color=status_color(status)>
            {status.display_name()}
        </Badge>
    }
}

#[component]
fn SelfieDetails(selfie: Selfie) -> impl IntoView {
    let notices = use_notices();
    let name = selfie.employee_name.clone();
    let name_for_flag = selfie.employee_name.clone();
    let face_class = if selfie.face_detected { "text-success" } else { "text-danger" };

    view! {
        <div class="selfie-details">
            <div class="selfie-details__image">
                <img src=selfie.image_url.clone() alt=format!("{} selfie", selfie.employee_name) />
                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        on_click=move |_| notices.info("Download", "Image download is not available in this console.")
                    >
                        {icon("download")}
                        "Download"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        on_click=move |_| notices.info("Delete", "Selfies are kept for audit and cannot be deleted here.")
                    >
                        {icon("trash")}
                        "Delete"
                    </Button>
                </Flex>
            </div>
            <div class="selfie-details__info">
                <h4>"Employee Information"</h4>
                <dl class="details-list">
                    <dt>"Name:"</dt><dd>{selfie.employee_name.clone()}</dd>
                    <dt>"ID:"</dt><dd>{selfie.employee_id.clone()}</dd>
                    <dt>"Department:"</dt><dd>{selfie.department.clone()}</dd>
                </dl>

                <h4>"Verification Details"</h4>
                <dl class="details-list">
                    <dt>"Status:"</dt><dd>{status_badge(selfie.status)}</dd>
                    <dt>"Face Detected:"</dt>
                    <dd class=face_class>{if selfie.face_detected { "Yes" } else { "No" }}</dd>
                    <dt>"Quality:"</dt>
                    <dd class=quality_class(selfie.quality)>{capitalize(selfie.quality.code())}</dd>
                    <dt>"Timestamp:"</dt><dd>{format_timestamp(&selfie.timestamp)}</dd>
                </dl>

                <h4>"Actions"</h4>
                <Flex vertical=true gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        on_click=move |_| notices.info("Not Verified", format!("Verification of {} is display-only.", name))
                    >
                        {icon("check-circle")}
                        "Mark as Verified"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        on_click=move |_| notices.info("Not Flagged", format!("Flagging {} is display-only.", name_for_flag))
                    >
                        {icon("alert-triangle")}
                        "Flag for Review"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SelfieGallery() -> impl IntoView {
    let notices = use_notices();

    let query = RwSignal::new(String::new());
    let department = RwSignal::new(ALL_SENTINEL.to_string());
    let status = RwSignal::new(ALL_SENTINEL.to_string());
    let view_mode = RwSignal::new(ViewMode::Grid);

    let filter_state = Memo::new(move |_| {
        filter_state_from(
            &query.get(),
            &[("department", department.get()), ("status", status.get())],
        )
    });
    let visible = Memo::new(move |_| visible_records(&SELFIES, &filter_state.get()));
    let total = SELFIES.len();

    let reset_filters = Callback::new(move |_| {
        query.set(String::new());
        department.set(ALL_SENTINEL.to_string());
        status.set(ALL_SENTINEL.to_string());
    });

    let verified = count_by_field(&SELFIES, "status", SelfieStatus::Verified.code());
    let flagged = count_by_field(&SELFIES, "status", SelfieStatus::Flagged.code());
    let review = count_by_field(&SELFIES, "status", SelfieStatus::Review.code());

    let details_open = RwSignal::new(false);
    let selected = RwSignal::new(None::<Selfie>);
    let open_details = move |selfie: Selfie| {
        selected.set(Some(selfie));
        details_open.set(true);
    };

    let department_options = options_with_all(
        "All Departments",
        DEPARTMENTS.iter().map(|d| (d.to_string(), d.to_string())),
    );
    let status_options = options_with_all(
        "All Status",
        SelfieStatus::all()
            .into_iter()
            .map(|s| (s.code().to_string(), s.display_name().to_string())),
    );

    let mode_button = move |mode: ViewMode, icon_name: &'static str| {
        view! {
            <Button
                appearance=move || if view_mode.get() == mode { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                size=ButtonSize::Small
                on_click=move |_| view_mode.set(mode)
            >
                {icon(icon_name)}
            </Button>
        }
    };

    view! {
        <PageFrame page_id="a004_selfie--list" category=PAGE_CAT_LIST>
            <PageHeader title="Selfie Gallery" subtitle="Review and manage employee selfie verifications".to_string()>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| notices.info("Export All", "Bulk image export is not available in this console.")
                >
                    {icon("download")}
                    "Export All"
                </Button>
                <div class="view-mode-toggle">
                    {mode_button(ViewMode::Grid, "grid")}
                    {mode_button(ViewMode::List, "list")}
                </div>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <CountCard label="Verified" icon_name="check-circle" count=Signal::derive(move || verified) status=IndicatorStatus::Good />
                    <CountCard label="Flagged" icon_name="alert-triangle" count=Signal::derive(move || flagged) status=IndicatorStatus::Bad />
                    <CountCard label="Under Review" icon_name="eye" count=Signal::derive(move || review) status=IndicatorStatus::Warning />
                    <CountCard label="Total" icon_name="camera" count=Signal::derive(move || total) />
                </div>

                <FilterPanel
                    query=query
                    placeholder="Search by employee name or ID..."
                    active_filters_count=Signal::derive(move || filter_state.with(|s| s.active_count()))
                    on_reset=reset_filters
                >
                    <FilterSelect value=department options=department_options label="Department" />
                    <FilterSelect value=status options=status_options label="Status" />
                </FilterPanel>

                <Card>
                    <div class="card-section">
                        <h3 class="card-section__title">{icon("image")} "Selfie Captures"</h3>
                        <p class="card-section__subtitle">
                            {move || format!("Showing {} of {} selfies", visible.with(|v| v.len()), total)}
                        </p>
                    </div>

                    {move || {
                        let items = visible.get();
                        match view_mode.get() {
                            ViewMode::Grid => view! {
                                <div class="selfie-grid">
                                    {items.into_iter().map(|selfie| {
                                        let for_click = selfie.clone();
                                        view! {
                                            <div class="selfie-tile" on:click=move |_| open_details(for_click.clone())>
                                                <div class="selfie-tile__image">
                                                    <img src=selfie.image_url.clone() alt=format!("{} selfie", selfie.employee_name) />
                                                    <div class="selfie-tile__status">{status_badge(selfie.status)}</div>
                                                    {(!selfie.face_detected).then(|| view! {
                                                        <div class="selfie-tile__warning">{icon("alert-triangle")}</div>
                                                    })}
                                                </div>
                                                <div class="selfie-tile__caption">
                                                    <h4>{selfie.employee_name.clone()}</h4>
                                                    <p>{selfie.employee_id.clone()}</p>
                                                    <p>{format_timestamp(&selfie.timestamp)}</p>
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            }.into_any(),
                            ViewMode::List => view! {
                                <div class="selfie-rows">
                                    {items.into_iter().map(|selfie| {
                                        let for_click = selfie.clone();
                                        view! {
                                            <div class="selfie-row" on:click=move |_| open_details(for_click.clone())>
                                                <span class="avatar avatar--large">{initials(&selfie.employee_name)}</span>
                                                <div class="selfie-row__main">
                                                    <h4>{selfie.employee_name.clone()}</h4>
                                                    <p>{format!("{} • {}", selfie.employee_id, selfie.department)}</p>
                                                </div>
                                                <div class="selfie-row__meta">
                                                    <p>{format_timestamp(&selfie.timestamp)}</p>
                                                    <Flex gap=FlexGap::Small>
                                                        {status_badge(selfie.status)}
                                                        {(!selfie.face_detected).then(|| icon("alert-triangle"))}
                                                    </Flex>
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            }.into_any(),
                        }
                    }}
                    {move || visible.with(|v| v.is_empty()).then(|| view! {
                        <div class="empty-state">"No selfies match the current filters."</div>
                    })}
                </Card>
            </div>

            <Dialog open=details_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Selfie Details"</DialogTitle>
                        <DialogContent>
                            {move || selected.get().map(|selfie| view! {
                                <p class="dialog-description">
                                    {format!("{} - {}", selfie.employee_name, format_timestamp(&selfie.timestamp))}
                                </p>
                                <SelfieDetails selfie=selfie />
                            })}
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| details_open.set(false)>
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

    #[test]
    fn test_quality_classes_are_distinct() {
        let classes: std::collections::HashSet<&str> = [
            SelfieQuality::Excellent,
            SelfieQuality::Good,
            SelfieQuality::Blurry,
            SelfieQuality::Poor,
        ]
        .into_iter()
        .map(quality_class)
        .collect();
        assert_eq!(classes.len(), 4);
        assert!(quality_class(SelfieQuality::Blurry).ends_with("--blurry"));
    }

    #[test]
    fn test_search_by_employee_id() {
        let rows = visible_records(&SELFIES, &filter_state_from("emp006", &[]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].employee_name, "Lisa Anderson");
    }
}
