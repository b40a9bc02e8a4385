use serde::{Deserialize, Serialize};

use crate::shared::record_filter::Filterable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn code(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
        }
    }

    pub fn all() -> Vec<EmployeeStatus> {
        vec![EmployeeStatus::Active, EmployeeStatus::Inactive]
    }
}

/// Employee account shown in user management
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub join_date: String,
    pub status: EmployeeStatus,
    pub avatar: String,
}

impl Filterable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.id]
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "department" => Some(&self.department),
            "status" => Some(self.status.code()),
            _ => None,
        }
    }
}

// ============================================================================
// Draft (add/edit dialogs)
// ============================================================================

/// Form contents of the add/edit employee dialog.
///
/// Drafts are staged in the dialog only and never written back to the
/// employee list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmployeeDraft {
    /// Id of the edited employee, `None` for a new one
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
}

impl EmployeeDraft {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            id: Some(employee.id.clone()),
            name: employee.name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            department: employee.department.clone(),
            position: employee.position.clone(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Checks the fields the dialog requires before staging the draft.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required".to_string());
        }
        if !email.contains('@') {
            return Err(format!("'{}' is not a valid email address", email));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str) -> EmployeeDraft {
        EmployeeDraft {
            name: name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_draft_validation() {
        assert!(draft("Jane Roe", "jane.roe@cityhall.gov").validate().is_ok());
        assert_eq!(draft("  ", "x@y").validate(), Err("Name is required".to_string()));
        assert_eq!(draft("Jane", "").validate(), Err("Email is required".to_string()));
        assert!(draft("Jane", "jane.cityhall.gov").validate().is_err());
    }

    #[test]
    fn test_new_draft_has_no_id() {
        assert!(EmployeeDraft::default().is_new());
    }
}
