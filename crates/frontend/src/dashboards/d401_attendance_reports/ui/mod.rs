mod dashboard;

pub use dashboard::AttendanceReportsDashboard;
