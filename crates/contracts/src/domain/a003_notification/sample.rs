use once_cell::sync::Lazy;

use super::aggregate::{Notification, NotificationKind, NotificationStatus};

fn notification(
    id: &str,
    title: &str,
    message: &str,
    kind: NotificationKind,
    timestamp: &str,
    status: NotificationStatus,
    employee: Option<(&str, &str)>,
) -> Notification {
    Notification {
        id: id.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        kind,
        timestamp: timestamp.to_string(),
        status,
        employee: employee.map(|(name, _)| name.to_string()),
        department: employee.map(|(_, department)| department.to_string()),
    }
}

pub static NOTIFICATIONS: Lazy<Vec<Notification>> = Lazy::new(|| {
    vec![
        notification(
            "1",
            "Missing Selfie Verification",
            "Emily Brown (EMP004) logged in without selfie verification at 09:30 AM",
            NotificationKind::Warning,
            "2024-01-15 09:35:00",
            NotificationStatus::Unread,
            Some(("Emily Brown", "HR")),
        ),
        notification(
            "2",
            "Late Login Alert",
            "Sarah Johnson (EMP002) arrived 15 minutes late at 09:15 AM",
            NotificationKind::Late,
            "2024-01-15 09:20:00",
            NotificationStatus::Read,
            Some(("Sarah Johnson", "Finance")),
        ),
        notification(
            "3",
            "System Alert",
            "Face detection service experienced temporary interruption for 5 minutes",
            NotificationKind::System,
            "2024-01-15 08:45:00",
            NotificationStatus::Resolved,
            None,
        ),
        notification(
            "4",
            "Early Departure",
            "Mike Davis (EMP003) logged out at 04:30 PM, 1 hour before scheduled time",
            NotificationKind::Early,
            "2024-01-15 16:35:00",
            NotificationStatus::Unread,
            Some(("Mike Davis", "IT")),
        ),
        notification(
            "5",
            "Suspicious Activity",
            "Multiple failed face verification attempts detected for user EMP007",
            NotificationKind::Security,
            "2024-01-15 10:15:00",
            NotificationStatus::Investigating,
            Some(("Unknown User", "Unknown")),
        ),
    ]
});

/// Notifications still waiting for an administrator (badge in the top header)
pub fn open_count() -> usize {
    NOTIFICATIONS.iter().filter(|n| n.status.is_open()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::SAMPLE_DAY;
    use crate::shared::record_filter::{filter_records, FilterState, Selector};
    use crate::shared::summary::count_by_field;
    use chrono::NaiveDate;

    #[test]
    fn test_status_counters() {
        assert_eq!(count_by_field(&NOTIFICATIONS, "status", "unread"), 2);
        assert_eq!(count_by_field(&NOTIFICATIONS, "status", "investigating"), 1);
        assert_eq!(count_by_field(&NOTIFICATIONS, "status", "resolved"), 1);
        assert_eq!(open_count(), 3);
    }

    #[test]
    fn test_all_sample_notifications_are_from_sample_day() {
        let day = NaiveDate::parse_from_str(SAMPLE_DAY, "%Y-%m-%d").unwrap();
        assert_eq!(NOTIFICATIONS.iter().filter(|n| n.is_on(day)).count(), 5);
        let other = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();
        assert!(!NOTIFICATIONS[0].is_on(other));
    }

    #[test]
    fn test_search_covers_message_and_employee() {
        let by_message = FilterState::new().with_query("FACE DETECTION");
        let ids: Vec<&str> = filter_records(&NOTIFICATIONS, &by_message)
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, vec!["3"]);

        let by_employee = FilterState::new().with_query("unknown user");
        assert_eq!(filter_records(&NOTIFICATIONS, &by_employee).len(), 1);
    }

    #[test]
    fn test_type_and_status_selectors() {
        let state = FilterState::new()
            .with_selector("type", Selector::from_value("early"))
            .with_selector("status", Selector::from_value("unread"));
        let result = filter_records(&NOTIFICATIONS, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Early Departure");
    }

    #[test]
    fn test_system_alert_has_no_department() {
        let state = FilterState::new().with_selector("department", Selector::from_value("IT"));
        let result = filter_records(&NOTIFICATIONS, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(NOTIFICATIONS[2].department, None);
    }

    #[test]
    fn test_display_timestamp() {
        assert_eq!(NOTIFICATIONS[0].display_timestamp(), "Jan 15, 2024 09:35");
    }
}
