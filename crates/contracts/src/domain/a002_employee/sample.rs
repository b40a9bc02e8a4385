use once_cell::sync::Lazy;

use super::aggregate::{Employee, EmployeeStatus};

fn employee(
    id: &str,
    name: &str,
    phone: &str,
    department: &str,
    position: &str,
    join_date: &str,
    status: EmployeeStatus,
) -> Employee {
    let email = format!("{}@cityhall.gov", name.to_lowercase().replace(' ', "."));
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        email,
        phone: phone.to_string(),
        department: department.to_string(),
        position: position.to_string(),
        join_date: join_date.to_string(),
        status,
        avatar: "/api/placeholder/64/64".to_string(),
    }
}

/// Employee directory
pub static EMPLOYEES: Lazy<Vec<Employee>> = Lazy::new(|| {
    vec![
        employee("EMP001", "John Smith", "+1 (555) 123-4567", "Administration", "Administrative Assistant", "2023-01-15", EmployeeStatus::Active),
        employee("EMP002", "Sarah Johnson", "+1 (555) 234-5678", "Finance", "Finance Manager", "2022-08-20", EmployeeStatus::Active),
        employee("EMP003", "Mike Davis", "+1 (555) 345-6789", "IT", "IT Specialist", "2023-03-10", EmployeeStatus::Active),
        employee("EMP004", "Emily Brown", "+1 (555) 456-7890", "HR", "HR Coordinator", "2022-11-05", EmployeeStatus::Inactive),
        employee("EMP005", "David Wilson", "+1 (555) 567-8901", "Legal", "Legal Advisor", "2021-09-12", EmployeeStatus::Active),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record_filter::{filter_records, FilterState, Selector};
    use crate::shared::summary::{count_by_field, distinct_values};

    #[test]
    fn test_finance_selector_returns_single_employee() {
        let state = FilterState::new()
            .with_query("")
            .with_selector("department", Selector::from_value("Finance"));
        let result = filter_records(&EMPLOYEES, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Sarah Johnson");
    }

    #[test]
    fn test_query_em_matches_emily() {
        let state = FilterState::new().with_query("em");
        let result = filter_records(&EMPLOYEES, &state);
        assert!(result.iter().any(|e| e.name == "Emily Brown"));
        assert!(result
            .iter()
            .all(|e| e.name.to_lowercase().contains("em")
                || e.email.to_lowercase().contains("em")
                || e.id.to_lowercase().contains("em")));
    }

    #[test]
    fn test_query_matches_email() {
        let state = FilterState::new().with_query("david.wilson@");
        let ids: Vec<&str> = filter_records(&EMPLOYEES, &state)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["EMP005"]);
    }

    #[test]
    fn test_trailing_space_is_part_of_query() {
        let state = FilterState::new().with_query("Brown ");
        let result = filter_records(&EMPLOYEES, &state);
        assert!(result.iter().all(|e| e.name.to_lowercase().contains("brown ")
            || e.email.to_lowercase().contains("brown ")
            || e.id.to_lowercase().contains("brown ")));
        assert!(!result.iter().any(|e| e.name == "Emily Brown"));
    }

    #[test]
    fn test_nonexistent_status_is_empty() {
        let state = FilterState::new().with_selector("status", Selector::from_value("nonexistent-value"));
        assert!(filter_records(&EMPLOYEES, &state).is_empty());
    }

    #[test]
    fn test_directory_counters() {
        assert_eq!(count_by_field(&EMPLOYEES, "status", "active"), 4);
        assert_eq!(count_by_field(&EMPLOYEES, "status", "inactive"), 1);
        assert_eq!(distinct_values(&EMPLOYEES, "department").len(), 5);
        assert_eq!(EMPLOYEES[1].email, "sarah.johnson@cityhall.gov");
    }
}
