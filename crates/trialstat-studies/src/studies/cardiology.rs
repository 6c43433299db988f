use std::sync::LazyLock;

use trialstat_core::models::patient::Gender;
use trialstat_core::models::site::{Site, SiteHealth, SiteStatus};
use trialstat_core::models::study::{
    AssessmentSchedule, Demographics, EnrollmentWindow, NumericRange, StudyConfiguration,
    TimepointTargets,
};

use super::{categories, clinical_metrics, demographic_metrics, labels, race_weights};
use crate::Study;
use crate::sites::{self, SiteSpec};

pub const ID: &str = "cardiology";

/// Heart Failure Outcomes Registry.
/// Categorized by ejection fraction phenotype (HFrEF, HFmrEF, HFpEF).
pub struct Cardiology;

impl Study for Cardiology {
    fn id(&self) -> &str {
        ID
    }

    fn configuration(&self) -> &StudyConfiguration {
        static CONFIG: LazyLock<StudyConfiguration> = LazyLock::new(|| {
            let mut metrics = demographic_metrics(&[40.0, 50.0, 60.0, 70.0, 80.0, 90.0]);
            metrics.extend(clinical_metrics());

            StudyConfiguration {
                id: ID.to_string(),
                name: "Heart Failure Outcomes Registry".to_string(),
                target_enrollment: Some(1200),
                demographics: Demographics {
                    gender: vec![
                        (Gender::Male, 0.58),
                        (Gender::Female, 0.41),
                        (Gender::Other, 0.01),
                    ],
                    age: NumericRange {
                        min: 40.0,
                        max: 90.0,
                        mode: 67.0,
                    },
                    bmi: NumericRange {
                        min: 18.0,
                        max: 42.0,
                        mode: 28.0,
                    },
                    race: race_weights([0.64, 0.19, 0.06, 0.02, 0.01, 0.04, 0.04]),
                },
                enrollment_window: EnrollmentWindow {
                    start_year: 2022,
                    start_month: 4,
                    end_year: 2025,
                    end_month: 9,
                },
                enrollment_categories: categories(&[
                    ("hfref", "HFrEF (EF <= 40%)", 0.50),
                    ("hfmref", "HFmrEF (EF 41-49%)", 0.20),
                    ("hfpef", "HFpEF (EF >= 50%)", 0.30),
                ]),
                assessment_schedule: AssessmentSchedule {
                    per_patient: TimepointTargets::uniform(3),
                    assessment_types: labels(&["kccq12", "sf36", "eq5d5l"]),
                },
                completion_rate: 0.90,
                medical_history: labels(&[
                    "Hypertension",
                    "Atrial Fibrillation",
                    "Coronary Artery Disease",
                    "Prior Myocardial Infarction",
                    "Type 2 Diabetes",
                    "Chronic Kidney Disease",
                    "COPD",
                ]),
                medications: labels(&[
                    "Sacubitril/Valsartan",
                    "Carvedilol",
                    "Metoprolol Succinate",
                    "Spironolactone",
                    "Furosemide",
                    "Dapagliflozin",
                    "Apixaban",
                    "Atorvastatin",
                ]),
                metrics,
            }
        });
        &CONFIG
    }

    fn sites(&self) -> &[Site] {
        static SITES: LazyLock<Vec<Site>> = LazyLock::new(|| sites::build(ID, SITE_TABLE));
        &SITES
    }
}

const SITE_TABLE: &[SiteSpec] = &[
    SiteSpec {
        hospital: "Cleveland Clinic",
        city: "Cleveland",
        state: "OH",
        enrolled: 268,
        status: SiteStatus::Active,
        health: SiteHealth::Healthy,
        data_quality: 97.8,
    },
    SiteSpec {
        hospital: "Johns Hopkins Hospital",
        city: "Baltimore",
        state: "MD",
        enrolled: 231,
        status: SiteStatus::Active,
        health: SiteHealth::Healthy,
        data_quality: 95.5,
    },
    SiteSpec {
        hospital: "Duke University Hospital",
        city: "Durham",
        state: "NC",
        enrolled: 189,
        status: SiteStatus::Active,
        health: SiteHealth::Warning,
        data_quality: 88.3,
    },
    SiteSpec {
        hospital: "Stanford Hospital",
        city: "Stanford",
        state: "CA",
        enrolled: 156,
        status: SiteStatus::Active,
        health: SiteHealth::Healthy,
        data_quality: 93.1,
    },
    SiteSpec {
        hospital: "UW Medical Center",
        city: "Seattle",
        state: "WA",
        enrolled: 97,
        status: SiteStatus::Onboarding,
        health: SiteHealth::Warning,
        data_quality: 82.4,
    },
];
