use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Trigger shown on the "Alert Rules" tab; toggling it is display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub enabled: bool,
}

fn rule(id: &str, name: &str, description: &str, enabled: bool) -> AlertRule {
    AlertRule {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        enabled,
    }
}

pub static ALERT_RULES: Lazy<Vec<AlertRule>> = Lazy::new(|| {
    vec![
        rule("1", "Missing Selfie", "Alert when employee logs in without selfie", true),
        rule("2", "Late Login", "Alert when employee is more than 10 minutes late", true),
        rule("3", "Early Departure", "Alert when employee leaves before scheduled time", false),
        rule("4", "Multiple Failed Verifications", "Alert when face detection fails multiple times", true),
        rule("5", "System Issues", "Alert for system malfunctions or downtime", true),
    ]
});
