pub mod a001_attendance_log;
pub mod a002_employee;
pub mod a003_notification;
pub mod a004_selfie;
pub mod common;

#[cfg(test)]
mod tests {
    use super::a001_attendance_log::ATTENDANCE_LOGS;
    use super::a002_employee::EMPLOYEES;
    use super::a004_selfie::SELFIES;
    use super::common::DEPARTMENTS;

    #[test]
    fn test_sample_departments_are_selectable() {
        let departments = ATTENDANCE_LOGS
            .iter()
            .map(|l| l.department.as_str())
            .chain(EMPLOYEES.iter().map(|e| e.department.as_str()))
            .chain(SELFIES.iter().map(|s| s.department.as_str()));

        for department in departments {
            assert!(DEPARTMENTS.contains(&department), "unknown department {}", department);
        }
    }
}
