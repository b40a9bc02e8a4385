use contracts::domain::a002_employee::{Employee, EmployeeDraft};
use leptos::prelude::*;

/// ViewModel for the employee form
#[derive(Clone, Copy)]
pub struct EmployeeDetailsViewModel {
    pub form: RwSignal<EmployeeDraft>,
    pub error: RwSignal<Option<String>>,
}

impl EmployeeDetailsViewModel {
    pub fn new(employee: Option<&Employee>) -> Self {
        let draft = employee.map(EmployeeDraft::from_employee).unwrap_or_default();
        Self {
            form: RwSignal::new(draft),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| !f.is_new())
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.validate().is_ok())
    }

    /// Validates the draft and hands it over. Nothing is written to the directory.
    pub fn stage_command(&self, on_staged: Callback<EmployeeDraft>) {
        let current = self.form.get();
        match current.validate() {
            Ok(()) => {
                self.error.set(None);
                on_staged.run(current);
            }
            Err(e) => self.error.set(Some(e)),
        }
    }
}
