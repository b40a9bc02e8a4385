//! Figures and request types of the "Reports & Analytics" page.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::shared::chart_data::{slice, ChartSlice, SeriesPoint};
use crate::shared::record_filter::{Selector, ALL_SENTINEL};

// ============================================================================
// Attendance trend
// ============================================================================

/// One working day of the attendance trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDay {
    pub date: String,
    pub on_time: u32,
    pub late: u32,
    pub absent: u32,
}

impl AttendanceDay {
    pub fn total(&self) -> u32 {
        self.on_time + self.late + self.absent
    }
}

pub const TREND_ON_TIME_COLOR: &str = "#22c55e";
pub const TREND_LATE_COLOR: &str = "#f59e0b";
pub const TREND_ABSENT_COLOR: &str = "#ef4444";

pub static ATTENDANCE_TREND: Lazy<Vec<AttendanceDay>> = Lazy::new(|| {
    let day = |date: &str, on_time, late, absent| AttendanceDay {
        date: date.to_string(),
        on_time,
        late,
        absent,
    };
    vec![
        day("2024-01-01", 45, 8, 2),
        day("2024-01-02", 48, 5, 2),
        day("2024-01-03", 52, 3, 0),
        day("2024-01-04", 49, 6, 0),
        day("2024-01-05", 51, 4, 0),
        day("2024-01-08", 47, 7, 1),
        day("2024-01-09", 53, 2, 0),
    ]
});

/// Splits the trend into one series per line of the chart: (name, colour, points)
pub fn trend_series(days: &[AttendanceDay]) -> Vec<(&'static str, &'static str, Vec<SeriesPoint>)> {
    let series = |pick: fn(&AttendanceDay) -> u32| {
        days.iter()
            .map(|d| SeriesPoint {
                label: d.date.clone(),
                value: pick(d) as f64,
            })
            .collect::<Vec<_>>()
    };
    vec![
        ("On Time", TREND_ON_TIME_COLOR, series(|d| d.on_time)),
        ("Late", TREND_LATE_COLOR, series(|d| d.late)),
        ("Absent", TREND_ABSENT_COLOR, series(|d| d.absent)),
    ]
}

// ============================================================================
// Department performance / punctuality
// ============================================================================

/// Attendance rate (percent) per department, coloured like the dashboard donut
pub static DEPARTMENT_PERFORMANCE: Lazy<Vec<ChartSlice>> = Lazy::new(|| {
    vec![
        slice("Administration", 95.0, "#3D99C0"),
        slice("Finance", 88.0, "#5BADD1"),
        slice("HR", 92.0, "#7BC1E2"),
        slice("IT", 97.0, "#9BD5F3"),
        slice("Legal", 85.0, "#BBE9FF"),
    ]
});

pub static PUNCTUALITY: Lazy<Vec<ChartSlice>> = Lazy::new(|| {
    vec![
        slice("On Time", 82.0, "#22c55e"),
        slice("Late (1-15 min)", 12.0, "#f59e0b"),
        slice("Late (15+ min)", 4.0, "#ef4444"),
        slice("Absent", 2.0, "#6b7280"),
    ]
});

// ============================================================================
// Report generation request
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Department,
}

impl ReportKind {
    pub fn code(&self) -> &'static str {
        match self {
            ReportKind::Daily => "daily",
            ReportKind::Weekly => "weekly",
            ReportKind::Monthly => "monthly",
            ReportKind::Department => "department",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Daily => "Daily Attendance Report",
            ReportKind::Weekly => "Weekly Summary Report",
            ReportKind::Monthly => "Monthly Analytics Report",
            ReportKind::Department => "Department Performance Report",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReportKind::Daily => "Detailed daily attendance with login/logout times",
            ReportKind::Weekly => "Weekly attendance patterns and trends",
            ReportKind::Monthly => "Comprehensive monthly attendance analytics",
            ReportKind::Department => "Department-wise attendance comparison",
        }
    }

    /// Icon name understood by the frontend icon set
    pub fn icon_name(&self) -> &'static str {
        match self {
            ReportKind::Daily => "calendar",
            ReportKind::Weekly => "bar-chart",
            ReportKind::Monthly => "trending-up",
            ReportKind::Department => "building",
        }
    }

    pub fn all() -> Vec<ReportKind> {
        vec![
            ReportKind::Daily,
            ReportKind::Weekly,
            ReportKind::Monthly,
            ReportKind::Department,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|k| k.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Pdf,
    Csv,
    Excel,
}

impl ReportFormat {
    pub fn code(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Csv => "csv",
            ReportFormat::Excel => "excel",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "PDF Document",
            ReportFormat::Csv => "CSV File",
            ReportFormat::Excel => "Excel Spreadsheet",
        }
    }

    pub fn all() -> Vec<ReportFormat> {
        vec![ReportFormat::Pdf, ReportFormat::Csv, ReportFormat::Excel]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|f| f.code() == code)
    }
}

/// What "Generate Report" would send; it is only logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub kind: ReportKind,
    /// `None` means every department
    pub department: Option<String>,
    pub format: ReportFormat,
}

impl ReportRequest {
    /// Builds a request from the raw select values of the page.
    /// Unknown codes fall back to the defaults (daily, pdf).
    pub fn from_selection(kind: &str, department: &str, format: &str) -> Self {
        let department = match Selector::from_value(department) {
            Selector::All => None,
            Selector::Exact(value) => Some(value),
        };
        Self {
            kind: ReportKind::from_code(kind).unwrap_or_default(),
            department,
            format: ReportFormat::from_code(format).unwrap_or_default(),
        }
    }

    pub fn department_label(&self) -> &str {
        self.department.as_deref().unwrap_or(ALL_SENTINEL)
    }

    /// Suggested file name, e.g. "daily_attendance_all.pdf"
    pub fn file_name(&self) -> String {
        let extension = match self.format {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Csv => "csv",
            ReportFormat::Excel => "xlsx",
        };
        format!(
            "{}_attendance_{}.{}",
            self.kind.code(),
            self.department_label().to_lowercase(),
            extension
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_selection() {
        let request = ReportRequest::from_selection("weekly", "Finance", "csv");
        assert_eq!(request.kind, ReportKind::Weekly);
        assert_eq!(request.department.as_deref(), Some("Finance"));
        assert_eq!(request.format, ReportFormat::Csv);
        assert_eq!(request.file_name(), "weekly_attendance_finance.csv");
    }

    #[test]
    fn test_request_defaults_and_all_department() {
        let request = ReportRequest::from_selection("yearly", "all", "docx");
        assert_eq!(request.kind, ReportKind::Daily);
        assert_eq!(request.department, None);
        assert_eq!(request.format, ReportFormat::Pdf);
        assert_eq!(request.file_name(), "daily_attendance_all.pdf");
    }

    #[test]
    fn test_trend_series_follow_days() {
        let series = trend_series(&ATTENDANCE_TREND);
        assert_eq!(series.len(), 3);
        assert!(series.iter().all(|(_, _, points)| points.len() == 7));
        assert_eq!(series[0].2[0].value, 45.0);
        assert_eq!(ATTENDANCE_TREND[0].total(), 55);
    }

    #[test]
    fn test_punctuality_sums_to_hundred() {
        let total: f64 = PUNCTUALITY.iter().map(|s| s.value).sum();
        assert_eq!(total, 100.0);
    }
}
