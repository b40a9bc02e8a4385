use serde::{Deserialize, Serialize};

use crate::shared::record_filter::Filterable;

// ============================================================================
// Status
// ============================================================================

/// Punctuality verdict of one attendance record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogStatus {
    OnTime,
    Late,
    Early,
    Warning,
}

impl LogStatus {
    /// Wire code, also used as the selector value
    pub fn code(&self) -> &'static str {
        match self {
            LogStatus::OnTime => "on-time",
            LogStatus::Late => "late",
            LogStatus::Early => "early",
            LogStatus::Warning => "warning",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LogStatus::OnTime => "On Time",
            LogStatus::Late => "Late",
            LogStatus::Early => "Early",
            LogStatus::Warning => "Warning",
        }
    }

    pub fn all() -> Vec<LogStatus> {
        vec![
            LogStatus::OnTime,
            LogStatus::Late,
            LogStatus::Early,
            LogStatus::Warning,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

// ============================================================================
// Record
// ============================================================================

/// One employee check-in/check-out of a working day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceLog {
    pub id: String,
    pub name: String,
    pub department: String,
    pub time_in: String,
    /// "--" while the employee has not checked out yet
    pub time_out: String,
    pub date: String,
    pub status: LogStatus,
    pub selfie_url: Option<String>,
    pub notes: String,
}

impl AttendanceLog {
    pub fn has_selfie(&self) -> bool {
        self.selfie_url.is_some()
    }
}

impl Filterable for AttendanceLog {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.id]
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "department" => Some(&self.department),
            "status" => Some(self.status.code()),
            _ => None,
        }
    }
}
