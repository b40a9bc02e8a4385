//! Static figures of the landing dashboard.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::a001_attendance_log::LogStatus;
use crate::shared::chart_data::{point, slice, ChartSlice, SeriesPoint};

/// Headline numbers of the stat cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewFigures {
    pub logins_today: u32,
    pub logins_change_percent: f64,
    pub active_employees: u32,
    pub late_arrivals: u32,
    /// Late arrivals above the usual level
    pub late_above_usual: u32,
    /// Share of the workforce each card's progress bar shows
    pub headcount: u32,
}

impl OverviewFigures {
    pub fn percent_of_headcount(&self, value: u32) -> f64 {
        if self.headcount == 0 {
            return 0.0;
        }
        (value as f64 * 100.0 / self.headcount as f64).min(100.0)
    }
}

/// Entry of the "recent activity" feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub employee: String,
    pub action: String,
    pub time: String,
    pub status: LogStatus,
}

pub static OVERVIEW: Lazy<OverviewFigures> = Lazy::new(|| OverviewFigures {
    logins_today: 86,
    logins_change_percent: 12.0,
    active_employees: 73,
    late_arrivals: 8,
    late_above_usual: 2,
    headcount: 100,
});

pub static DAILY_LOGINS: Lazy<Vec<SeriesPoint>> = Lazy::new(|| {
    vec![
        point("Mon", 45.0),
        point("Tue", 52.0),
        point("Wed", 49.0),
        point("Thu", 61.0),
        point("Fri", 55.0),
        point("Sat", 12.0),
        point("Sun", 8.0),
    ]
});

pub static DEPARTMENT_DISTRIBUTION: Lazy<Vec<ChartSlice>> = Lazy::new(|| {
    vec![
        slice("Administration", 35.0, "#3D99C0"),
        slice("Finance", 25.0, "#5BADD1"),
        slice("HR", 20.0, "#7BC1E2"),
        slice("IT", 15.0, "#9BD5F3"),
        slice("Legal", 5.0, "#BBE9FF"),
    ]
});

pub static RECENT_ACTIVITY: Lazy<Vec<ActivityEntry>> = Lazy::new(|| {
    let entry = |employee: &str, action: &str, time: &str, status: LogStatus| ActivityEntry {
        employee: employee.to_string(),
        action: action.to_string(),
        time: time.to_string(),
        status,
    };
    vec![
        entry("John Smith", "Logged in", "09:00 AM", LogStatus::OnTime),
        entry("Sarah Johnson", "Logged in", "09:15 AM", LogStatus::Late),
        entry("Mike Davis", "Logged out", "05:30 PM", LogStatus::OnTime),
        entry("Emily Brown", "Missing selfie", "09:30 AM", LogStatus::Warning),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of_headcount() {
        assert_eq!(OVERVIEW.percent_of_headcount(OVERVIEW.logins_today), 86.0);
        let empty = OverviewFigures { headcount: 0, ..(*OVERVIEW).clone() };
        assert_eq!(empty.percent_of_headcount(5), 0.0);
    }

    #[test]
    fn test_department_distribution_sums_to_hundred() {
        let total: f64 = DEPARTMENT_DISTRIBUTION.iter().map(|s| s.value).sum();
        assert_eq!(total, 100.0);
    }
}
