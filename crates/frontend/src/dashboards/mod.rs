pub mod d400_attendance_overview;
pub mod d401_attendance_reports;

pub use d400_attendance_overview::ui::AttendanceOverviewDashboard;
pub use d401_attendance_reports::ui::AttendanceReportsDashboard;
