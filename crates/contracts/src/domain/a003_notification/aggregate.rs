use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::shared::record_filter::Filterable;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// Kind / Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    Warning,
    Late,
    System,
    Early,
    Security,
}

impl NotificationKind {
    pub fn code(&self) -> &'static str {
        match self {
            NotificationKind::Warning => "warning",
            NotificationKind::Late => "late",
            NotificationKind::System => "system",
            NotificationKind::Early => "early",
            NotificationKind::Security => "security",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            NotificationKind::Warning => "Warning",
            NotificationKind::Late => "Late",
            NotificationKind::System => "System",
            NotificationKind::Early => "Early",
            NotificationKind::Security => "Security",
        }
    }

    pub fn all() -> Vec<NotificationKind> {
        vec![
            NotificationKind::Warning,
            NotificationKind::Late,
            NotificationKind::System,
            NotificationKind::Early,
            NotificationKind::Security,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationStatus {
    Unread,
    Read,
    Resolved,
    Investigating,
}

impl NotificationStatus {
    pub fn code(&self) -> &'static str {
        match self {
            NotificationStatus::Unread => "unread",
            NotificationStatus::Read => "read",
            NotificationStatus::Resolved => "resolved",
            NotificationStatus::Investigating => "investigating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            NotificationStatus::Unread => "Unread",
            NotificationStatus::Read => "Read",
            NotificationStatus::Resolved => "Resolved",
            NotificationStatus::Investigating => "Investigating",
        }
    }

    pub fn all() -> Vec<NotificationStatus> {
        vec![
            NotificationStatus::Unread,
            NotificationStatus::Read,
            NotificationStatus::Resolved,
            NotificationStatus::Investigating,
        ]
    }

    /// Still needs an administrator's attention
    pub fn is_open(&self) -> bool {
        matches!(self, NotificationStatus::Unread | NotificationStatus::Investigating)
    }
}

// ============================================================================
// Record
// ============================================================================

/// Attendance or system alert raised for administrators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Local time, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
    pub status: NotificationStatus,
    /// Absent for system-wide alerts
    pub employee: Option<String>,
    pub department: Option<String>,
}

impl Notification {
    pub fn occurred_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).ok()
    }

    /// True when the notification was raised on `day`. Unparseable timestamps never match.
    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.occurred_at().map(|ts| ts.date() == day).unwrap_or(false)
    }

    /// Timestamp for display: "Jan 15, 2024 09:35"; raw value when unparseable.
    pub fn display_timestamp(&self) -> String {
        self.occurred_at()
            .map(|ts| ts.format("%b %-d, %Y %H:%M").to_string())
            .unwrap_or_else(|| self.timestamp.clone())
    }
}

impl Filterable for Notification {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.message.as_str()];
        if let Some(employee) = &self.employee {
            fields.push(employee);
        }
        fields
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "type" => Some(self.kind.code()),
            "status" => Some(self.status.code()),
            "department" => self.department.as_deref(),
            _ => None,
        }
    }
}
