use once_cell::sync::Lazy;

use super::aggregate::{Selfie, SelfieQuality, SelfieStatus};

fn selfie(
    id: &str,
    employee_id: &str,
    employee_name: &str,
    department: &str,
    time: &str,
    status: SelfieStatus,
    quality: SelfieQuality,
) -> Selfie {
    Selfie {
        id: id.to_string(),
        employee_id: employee_id.to_string(),
        employee_name: employee_name.to_string(),
        department: department.to_string(),
        timestamp: format!("{} {}", crate::domain::common::SAMPLE_DAY, time),
        image_url: "/api/placeholder/300/300".to_string(),
        status,
        // Flagged captures are the ones where detection failed
        face_detected: status != SelfieStatus::Flagged,
        quality,
    }
}

pub static SELFIES: Lazy<Vec<Selfie>> = Lazy::new(|| {
    vec![
        selfie("1", "EMP001", "John Smith", "Administration", "09:00:15", SelfieStatus::Verified, SelfieQuality::Good),
        selfie("2", "EMP002", "Sarah Johnson", "Finance", "09:15:32", SelfieStatus::Flagged, SelfieQuality::Poor),
        selfie("3", "EMP003", "Mike Davis", "IT", "08:45:28", SelfieStatus::Verified, SelfieQuality::Excellent),
        selfie("4", "EMP004", "Emily Brown", "HR", "09:30:45", SelfieStatus::Review, SelfieQuality::Blurry),
        selfie("5", "EMP005", "David Wilson", "Legal", "09:05:12", SelfieStatus::Verified, SelfieQuality::Good),
        selfie("6", "EMP006", "Lisa Anderson", "Finance", "09:12:38", SelfieStatus::Flagged, SelfieQuality::Poor),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record_filter::{filter_records, FilterState, Selector};
    use crate::shared::summary::count_by_field;

    #[test]
    fn test_finance_flagged() {
        let state = FilterState::new()
            .with_selector("department", Selector::from_value("Finance"))
            .with_selector("status", Selector::from_value("flagged"));
        let names: Vec<&str> = filter_records(&SELFIES, &state)
            .iter()
            .map(|s| s.employee_name.as_str())
            .collect();
        assert_eq!(names, vec!["Sarah Johnson", "Lisa Anderson"]);
    }

    #[test]
    fn test_counters() {
        assert_eq!(count_by_field(&SELFIES, "status", "verified"), 3);
        assert_eq!(count_by_field(&SELFIES, "status", "flagged"), 2);
        assert_eq!(count_by_field(&SELFIES, "status", "review"), 1);
        assert_eq!(SELFIES.iter().filter(|s| !s.face_detected).count(), 2);
    }

    #[test]
    fn test_search_by_employee_id() {
        let state = FilterState::new().with_query("emp006");
        let result = filter_records(&SELFIES, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].employee_name, "Lisa Anderson");
    }
}
