use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SiteStatus {
    Active,
    Onboarding,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SiteHealth {
    Healthy,
    Warning,
    Critical,
}

/// An enrollment site. Belongs to exactly one study.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Site {
    pub id: String,
    pub study_id: String,
    pub name: String,
    pub location: Location,
    pub enrolled_patients: u32,
    pub status: SiteStatus,
    pub health: SiteHealth,
    /// Data-quality score, 0–100.
    pub data_quality: f64,
}

/// Total number of patients enrolled across `sites`.
pub fn total_enrolled(sites: &[Site]) -> usize {
    sites.iter().map(|s| s.enrolled_patients as usize).sum()
}
