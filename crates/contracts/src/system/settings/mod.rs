//! System settings shown on the Settings page.
//!
//! Values are only staged in the browser; nothing is persisted.

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSettings {
    pub general: GeneralSettings,
    pub security: SecuritySettings,
    pub camera: CameraSettings,
    pub time: TimeSettings,
    pub notifications: NotificationSettings,
    pub system: MaintenanceSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    pub organization_name: String,
    pub system_name: String,
    pub admin_email: String,
    pub timezone: String,
    pub description: String,
    pub admin_name: String,
    pub admin_phone: String,
    pub admin_position: String,
    pub admin_department: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecuritySettings {
    pub two_factor: bool,
    pub auto_lock: bool,
    pub login_notifications: bool,
    pub session_timeout_minutes: u32,
    pub max_login_attempts: u32,
    pub min_password_length: u32,
    pub password_expiry_days: u32,
    pub require_uppercase: bool,
    pub require_numbers: bool,
    pub require_special: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    pub image_quality: String,
    pub capture_timeout_seconds: u32,
    pub max_retries: u32,
    pub storage_days: u32,
    pub face_detection: bool,
    pub quality_check: bool,
    pub auto_capture: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSettings {
    pub work_start: String,
    pub work_end: String,
    pub lunch_start: String,
    pub lunch_end: String,
    pub late_threshold_minutes: u32,
    pub early_threshold_minutes: u32,
    /// Mon..Sun
    pub working_days: [bool; 7],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: bool,
    pub sms: bool,
    pub browser: bool,
    pub email_frequency: String,
    pub sms_phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceSettings {
    pub automatic_backups: bool,
    pub debug_mode: bool,
    pub monitoring: bool,
    pub backup_time: String,
    pub retention_days: u32,
    pub log_level: String,
    pub maintenance_window: String,
}

pub const WEEK_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// (value, label) pairs of the select controls
pub const TIMEZONES: &[(&str, &str)] = &[
    ("est", "Eastern Standard Time (EST)"),
    ("cst", "Central Standard Time (CST)"),
    ("mst", "Mountain Standard Time (MST)"),
    ("pst", "Pacific Standard Time (PST)"),
];

pub const IMAGE_QUALITIES: &[(&str, &str)] = &[
    ("low", "Low (480p)"),
    ("medium", "Medium (720p)"),
    ("high", "High (1080p)"),
    ("ultra", "Ultra (4K)"),
];

pub const EMAIL_FREQUENCIES: &[(&str, &str)] = &[
    ("immediate", "Immediate"),
    ("hourly", "Hourly Digest"),
    ("daily", "Daily Summary"),
    ("weekly", "Weekly Report"),
];

pub const LOG_LEVELS: &[(&str, &str)] = &[
    ("error", "Error Only"),
    ("warning", "Warning & Error"),
    ("info", "Info, Warning & Error"),
    ("debug", "All (Debug Mode)"),
];

/// Default settings embedded in the bundle
const DEFAULT_SETTINGS_JSON: &str = r#"{
  "general": {
    "organization_name": "City Hall",
    "system_name": "Attendance Management System",
    "admin_email": "admin@cityhall.gov",
    "timezone": "est",
    "description": "Municipal government office managing daily operations and public services.",
    "admin_name": "Admin User",
    "admin_phone": "+1 (555) 123-4567",
    "admin_position": "System Administrator",
    "admin_department": "IT Department"
  },
  "security": {
    "two_factor": false,
    "auto_lock": true,
    "login_notifications": true,
    "session_timeout_minutes": 30,
    "max_login_attempts": 5,
    "min_password_length": 8,
    "password_expiry_days": 90,
    "require_uppercase": true,
    "require_numbers": true,
    "require_special": false
  },
  "camera": {
    "image_quality": "high",
    "capture_timeout_seconds": 10,
    "max_retries": 3,
    "storage_days": 90,
    "face_detection": true,
    "quality_check": true,
    "auto_capture": false
  },
  "time": {
    "work_start": "09:00",
    "work_end": "17:00",
    "lunch_start": "12:00",
    "lunch_end": "13:00",
    "late_threshold_minutes": 15,
    "early_threshold_minutes": 30,
    "working_days": [true, true, true, true, true, false, false]
  },
  "notifications": {
    "email": true,
    "sms": false,
    "browser": true,
    "email_frequency": "immediate",
    "sms_phone": ""
  },
  "system": {
    "automatic_backups": true,
    "debug_mode": false,
    "monitoring": true,
    "backup_time": "02:00",
    "retention_days": 365,
    "log_level": "info",
    "maintenance_window": "01:00"
  }
}"#;

impl SystemSettings {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse system settings")
    }

    pub fn load_default() -> anyhow::Result<Self> {
        Self::from_json(DEFAULT_SETTINGS_JSON).context("Embedded default settings are invalid")
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize system settings")
    }

    pub fn working_day_names(&self) -> Vec<&'static str> {
        WEEK_DAYS
            .iter()
            .zip(self.time.working_days.iter())
            .filter(|(_, on)| **on)
            .map(|(day, _)| *day)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_load() {
        let settings = SystemSettings::load_default().unwrap();
        assert_eq!(settings.general.organization_name, "City Hall");
        assert_eq!(settings.security.session_timeout_minutes, 30);
        assert_eq!(settings.camera.image_quality, "high");
        assert_eq!(settings.system.retention_days, 365);
        assert_eq!(settings.working_day_names(), vec!["Mon", "Tue", "Wed", "Thu", "Fri"]);
    }

    #[test]
    fn test_defaults_use_known_option_values() {
        let settings = SystemSettings::load_default().unwrap();
        assert!(TIMEZONES.iter().any(|(v, _)| *v == settings.general.timezone));
        assert!(IMAGE_QUALITIES.iter().any(|(v, _)| *v == settings.camera.image_quality));
        assert!(EMAIL_FREQUENCIES.iter().any(|(v, _)| *v == settings.notifications.email_frequency));
        assert!(LOG_LEVELS.iter().any(|(v, _)| *v == settings.system.log_level));
    }

    #[test]
    fn test_json_survives_save() {
        let mut settings = SystemSettings::load_default().unwrap();
        settings.time.late_threshold_minutes = 20;
        let json = settings.to_json().unwrap();
        assert_eq!(SystemSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = SystemSettings::from_json("{\"general\": {}}").unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
