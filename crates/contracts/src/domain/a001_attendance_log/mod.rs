pub mod aggregate;
pub mod sample;

pub use aggregate::{AttendanceLog, LogStatus};
pub use sample::ATTENDANCE_LOGS;
