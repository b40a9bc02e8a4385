mod dashboard;

pub use dashboard::AttendanceOverviewDashboard;
