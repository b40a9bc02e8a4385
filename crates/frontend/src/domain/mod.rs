pub mod a001_attendance_log;
pub mod a002_employee;
pub mod a003_notification;
pub mod a004_selfie;
