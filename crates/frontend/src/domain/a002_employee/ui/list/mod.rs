use crate::domain::a002_employee::ui::details::EmployeeDetails;
use crate::layout::use_notices;
use crate::shared::components::filter_panel::{options_with_all, FilterPanel, FilterSelect};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::CountCard;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_state_from, highlight_matches, visible_records};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_employee::{Employee, EmployeeDraft, EmployeeStatus, EMPLOYEES};
use contracts::domain::common::{initials, DEPARTMENTS};
use contracts::shared::indicators::IndicatorStatus;
use contracts::shared::record_filter::ALL_SENTINEL;
use contracts::shared::summary::{count_by_field, distinct_values};
use leptos::prelude::*;
use thaw::*;

fn status_color(status: EmployeeStatus) -> BadgeColor {
    match status {
        EmployeeStatus::Active => BadgeColor::Success,
        EmployeeStatus::Inactive => BadgeColor::Subtle,
    }
}

/// State of the add/edit form
#[derive(Clone, Debug, PartialEq)]
enum FormMode {
    Closed,
    Add,
    Edit(Employee),
}

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
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
    let visible = Memo::new(move |_| visible_records(&EMPLOYEES, &filter_state.get()));

    let reset_filters = Callback::new(move |_| {
        query.set(String::new());
        department.set(ALL_SENTINEL.to_string());
        status.set(ALL_SENTINEL.to_string());
    });

    // Cards describe the whole directory, not the filtered view
    let total = EMPLOYEES.len();
    let active = count_by_field(&EMPLOYEES, "status", EmployeeStatus::Active.code());
    let inactive = count_by_field(&EMPLOYEES, "status", EmployeeStatus::Inactive.code());
    let departments = distinct_values(&EMPLOYEES, "department").len();

    let form_mode = RwSignal::new(FormMode::Closed);

    let on_staged = Callback::new(move |draft: EmployeeDraft| {
        let title = if draft.is_new() { "Employee Added" } else { "Employee Updated" };
        log::info!("employee draft staged: {:?}", draft);
        notices.info(title, format!("Changes to {} were staged but not saved.", draft.name));
        form_mode.set(FormMode::Closed);
    });
    let on_cancel = Callback::new(move |_| form_mode.set(FormMode::Closed));

    let delete_employee = move |employee: Employee| {
        notices.info(
            "Delete Not Available",
            format!("{} was not removed; the directory is read-only.", employee.name),
        );
    };

    let department_options = options_with_all(
        "All Departments",
        DEPARTMENTS.iter().map(|d| (d.to_string(), d.to_string())),
    );
    let status_options = options_with_all(
        "All Status",
        EmployeeStatus::all()
            .into_iter()
            .map(|s| (s.code().to_string(), s.display_name().to_string())),
    );

    view! {
        <PageFrame page_id="a002_employee--list" category=PAGE_CAT_LIST>
            <PageHeader title="User Management" subtitle="Manage employee accounts and access".to_string()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| form_mode.set(FormMode::Add)>
                    {icon("user-plus")}
                    "Add Employee"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <CountCard label="Total Employees" icon_name="users" count=Signal::derive(move || total) />
                    <CountCard label="Active" icon_name="user-check" count=Signal::derive(move || active) status=IndicatorStatus::Good />
                    <CountCard label="Inactive" icon_name="user-x" count=Signal::derive(move || inactive) status=IndicatorStatus::Bad />
                    <CountCard label="Departments" icon_name="building" count=Signal::derive(move || departments) />
                </div>

                <FilterPanel
                    query=query
                    placeholder="Search by name, email or ID..."
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
                                <TableHeaderCell>"Contact"</TableHeaderCell>
                                <TableHeaderCell>"Department"</TableHeaderCell>
                                <TableHeaderCell>"Position"</TableHeaderCell>
                                <TableHeaderCell>"Join Date"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let needle = query.get();
                                visible.get().into_iter().map(|employee| {
                                    let needle = needle.clone();
                                    let for_edit = employee.clone();
                                    let for_delete = employee.clone();
                                    let name_hl = highlight_matches(&employee.name, &needle);
                                    let id_hl = highlight_matches(&employee.id, &needle);
                                    let email_hl = highlight_matches(&employee.email, &needle);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="employee-cell">
                                                        <span class="avatar">{initials(&employee.name)}</span>
                                                        <div>
                                                            <div class="employee-cell__name">{name_hl}</div>
                                                            <div class="employee-cell__id">{id_hl}</div>
                                                        </div>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="contact-cell">
                                                    <div>{icon("mail")} {email_hl}</div>
                                                    <div>{icon("phone")} {employee.phone.clone()}</div>
                                                </div>
                                            </TableCell>
                                            <TableCell>
                                                <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Brand>
                                                    {employee.department.clone()}
                                                </Badge>
                                            </TableCell>
                                            <TableCell>{employee.position.clone()}</TableCell>
                                            <TableCell>{format_date(&employee.join_date)}</TableCell>
                                            <TableCell>
                                                <Badge appearance=BadgeAppearance::Tint color=status_color(employee.status)>
                                                    {employee.status.display_name()}
                                                </Badge>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| form_mode.set(FormMode::Edit(for_edit.clone()))
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| delete_employee(for_delete.clone())
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            }}
                        </TableBody>
                    </Table>
                    {move || visible.with(|rows| rows.is_empty()).then(|| view! {
                        <div class="empty-state">"No employees match the current filters."</div>
                    })}
                </div>
            </div>

            {move || match form_mode.get() {
                FormMode::Closed => None,
                FormMode::Add => Some(view! {
                    <EmployeeDetails employee=None on_staged=on_staged on_cancel=on_cancel />
                }.into_any()),
                FormMode::Edit(employee) => Some(view! {
                    <EmployeeDetails employee=Some(employee) on_staged=on_staged on_cancel=on_cancel />
                }.into_any()),
            }}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::split_matches;

    #[test]
    fn test_every_visible_row_highlights_the_query() {
        let needle = "em".to_string();
        let state = filter_state_from(
            &needle,
            &[("department", ALL_SENTINEL.to_string()), ("status", ALL_SENTINEL.to_string())],
        );
        let rows = visible_records(&EMPLOYEES, &state);
        assert!(!rows.is_empty());

        for employee in rows {
            let needle = needle.clone();
            let highlighted = [&employee.name, &employee.email, &employee.id]
                .iter()
                .any(|field| split_matches(field, &needle).iter().any(|(_, is_match)| *is_match));
            assert!(highlighted, "{} has no highlighted field", employee.id);
        }
    }
}
