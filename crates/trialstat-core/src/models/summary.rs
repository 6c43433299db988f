use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::assessment::Timepoint;
use super::metric::MetricResult;
use super::site::{SiteHealth, SiteStatus};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SiteEnrollment {
    pub site_id: String,
    pub name: String,
    pub enrolled_patients: u32,
    pub status: SiteStatus,
    pub health: SiteHealth,
    pub data_quality: f64,
}

/// Patients enrolled under one enrollment category.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryEnrollment {
    pub key: String,
    /// Display label from the study configuration.
    pub label: String,
    pub enrolled_patients: usize,
    pub percentage: f64,
}

/// Enrollment progress against the study target.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EnrollmentSummary {
    pub target_enrollment: Option<u32>,
    pub enrolled: usize,
    /// `enrolled / target * 100`, absent when the study has no target.
    pub percent_of_target: Option<f64>,
    pub active_sites: usize,
    pub onboarding_sites: usize,
    pub inactive_sites: usize,
    pub sites: Vec<SiteEnrollment>,
    /// One row per configured category, in configuration order.
    pub categories: Vec<CategoryEnrollment>,
}

/// Completion of one instrument at one timepoint. Every eligible patient is
/// expected to complete each scheduled instrument once.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InstrumentCompliance {
    pub assessment_type: String,
    /// Display name of the instrument, e.g. "EQ-5D-5L".
    pub name: String,
    pub completed_assessments: usize,
    pub completion_percentage: f64,
}

/// Assessment completion at one timepoint.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TimepointCompliance {
    pub timepoint: Timepoint,
    /// Patients whose timepoint date has been reached.
    pub eligible_patients: usize,
    pub expected_assessments: usize,
    pub completed_assessments: usize,
    /// `completed / expected * 100`; zero when nothing is expected yet.
    pub completion_percentage: f64,
    /// One row per scheduled instrument, in schedule order.
    pub instruments: Vec<InstrumentCompliance>,
}

/// Everything the dashboard needs for one study, computed in one pass.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StudyMetrics {
    pub study_id: String,
    pub study_name: String,
    pub total_patients: usize,
    pub metrics: Vec<MetricResult>,
    pub enrollment: EnrollmentSummary,
    pub compliance: Vec<TimepointCompliance>,
    pub generated_at: jiff::Timestamp,
}
