use super::view_model::EmployeeDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::a002_employee::{Employee, EmployeeDraft};
use contracts::domain::common::DEPARTMENTS;
use leptos::prelude::*;
use thaw::*;

/// Text field bound to one draft attribute
fn draft_field(
    vm: EmployeeDetailsViewModel,
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    get: fn(&EmployeeDraft) -> String,
    set: fn(&mut EmployeeDraft, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type="text"
                id=id
                prop:value=move || vm.form.with(get)
                on:input=move |ev| vm.form.update(|f| set(f, event_target_value(&ev)))
                placeholder=placeholder
            />
        </div>
    }
}

#[component]
pub fn EmployeeDetails(
    /// Employee to edit; `None` opens an empty form
    employee: Option<Employee>,
    on_staged: Callback<EmployeeDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = EmployeeDetailsViewModel::new(employee.as_ref());

    view! {
        <div class="modal-overlay">
            <div class="modal employee-details">
                <div class="modal-header">
                    <h3>{move || if vm.is_edit_mode() { "Edit Employee" } else { "Add New Employee" }}</h3>
                    <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=move |_| on_cancel.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                    <div class="details-form">
                        {draft_field(vm, "name", "Full Name", "Enter full name", |f| f.name.clone(), |f, v| f.name = v)}
                        {draft_field(vm, "email", "Email", "name@cityhall.gov", |f| f.email.clone(), |f, v| f.email = v)}
                        {draft_field(vm, "phone", "Phone", "+1 (555) 000-0000", |f| f.phone.clone(), |f, v| f.phone = v)}
                        <div class="form-group">
                            <label for="department">"Department"</label>
                            <select
                                id="department"
                                prop:value=move || vm.form.with(|f| f.department.clone())
                                on:change=move |ev| vm.form.update(|f| f.department = event_target_value(&ev))
                            >
                                <option value="">"Select department"</option>
                                {DEPARTMENTS.iter().map(|d| view! { <option value=*d>{*d}</option> }).collect_view()}
                            </select>
                        </div>
                        {draft_field(vm, "position", "Position", "Enter position", |f| f.position.clone(), |f, v| f.position = v)}
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.stage_command(on_staged)
                        disabled=Signal::derive(move || !vm.is_form_valid())
                    >
                        {icon("save")}
                        {move || if vm.is_edit_mode() { "Save Changes" } else { "Add Employee" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        "Cancel"
                    </Button>
                </div>
            </div>
        </div>
    }
}
