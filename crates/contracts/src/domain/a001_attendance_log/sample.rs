use once_cell::sync::Lazy;

use super::aggregate::{AttendanceLog, LogStatus};

fn log(
    id: &str,
    name: &str,
    department: &str,
    time_in: &str,
    time_out: &str,
    status: LogStatus,
    selfie: bool,
    notes: &str,
) -> AttendanceLog {
    AttendanceLog {
        id: id.to_string(),
        name: name.to_string(),
        department: department.to_string(),
        time_in: time_in.to_string(),
        time_out: time_out.to_string(),
        date: crate::domain::common::SAMPLE_DAY.to_string(),
        status,
        selfie_url: selfie.then(|| "/api/placeholder/64/64".to_string()),
        notes: notes.to_string(),
    }
}

/// Attendance records of the sample day
pub static ATTENDANCE_LOGS: Lazy<Vec<AttendanceLog>> = Lazy::new(|| {
    vec![
        log("EMP001", "John Smith", "Administration", "09:00 AM", "05:30 PM", LogStatus::OnTime, true, "Normal working day"),
        log("EMP002", "Sarah Johnson", "Finance", "09:15 AM", "05:45 PM", LogStatus::Late, true, "15 minutes late - traffic"),
        log("EMP003", "Mike Davis", "IT", "08:45 AM", "05:30 PM", LogStatus::Early, true, "Early arrival"),
        log("EMP004", "Emily Brown", "HR", "09:30 AM", "--", LogStatus::Warning, false, "Missing selfie verification"),
        log("EMP005", "David Wilson", "Legal", "09:05 AM", "05:35 PM", LogStatus::OnTime, true, "Standard attendance"),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record_filter::{filter_records, FilterState, Selector};
    use crate::shared::summary::count_by_field;

    #[test]
    fn test_status_counts() {
        let logs = &*ATTENDANCE_LOGS;
        assert_eq!(count_by_field(logs, "status", "on-time"), 2);
        assert_eq!(count_by_field(logs, "status", "late"), 1);
        assert_eq!(count_by_field(logs, "status", "early"), 1);
        assert_eq!(count_by_field(logs, "status", "warning"), 1);
    }

    #[test]
    fn test_search_by_id_and_status_selector() {
        let state = FilterState::new()
            .with_query("emp00")
            .with_selector("status", Selector::from_value("on-time"));
        let names: Vec<&str> = filter_records(&ATTENDANCE_LOGS, &state)
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(names, vec!["John Smith", "David Wilson"]);
    }

    #[test]
    fn test_only_emily_lacks_selfie() {
        let missing: Vec<&str> = ATTENDANCE_LOGS
            .iter()
            .filter(|l| !l.has_selfie())
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(missing, vec!["EMP004"]);
    }

    #[test]
    fn test_status_codes_round_trip() {
        for status in LogStatus::all() {
            assert_eq!(LogStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(LogStatus::from_code("nonexistent-value"), None);
    }
}
