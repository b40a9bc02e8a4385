pub mod d400_attendance_overview;
pub mod d401_attendance_reports;
