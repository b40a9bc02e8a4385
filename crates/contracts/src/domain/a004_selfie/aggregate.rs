use serde::{Deserialize, Serialize};

use crate::shared::record_filter::Filterable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelfieStatus {
    Verified,
    Flagged,
    Review,
}

impl SelfieStatus {
    pub fn code(&self) -> &'static str {
        match self {
            SelfieStatus::Verified => "verified",
            SelfieStatus::Flagged => "flagged",
            SelfieStatus::Review => "review",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SelfieStatus::Verified => "Verified",
            SelfieStatus::Flagged => "Flagged",
            SelfieStatus::Review => "Review",
        }
    }

    pub fn all() -> Vec<SelfieStatus> {
        vec![SelfieStatus::Verified, SelfieStatus::Flagged, SelfieStatus::Review]
    }
}

/// Image quality as graded at capture time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelfieQuality {
    Excellent,
    Good,
    Blurry,
    Poor,
}

impl SelfieQuality {
    pub fn code(&self) -> &'static str {
        match self {
            SelfieQuality::Excellent => "excellent",
            SelfieQuality::Good => "good",
            SelfieQuality::Blurry => "blurry",
            SelfieQuality::Poor => "poor",
        }
    }
}

/// Check-in selfie kept for verification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selfie {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub timestamp: String,
    pub image_url: String,
    pub status: SelfieStatus,
    pub face_detected: bool,
    pub quality: SelfieQuality,
}

impl Filterable for Selfie {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.employee_name, &self.employee_id]
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "department" => Some(&self.department),
            "status" => Some(self.status.code()),
            "quality" => Some(self.quality.code()),
            _ => None,
        }
    }
}
