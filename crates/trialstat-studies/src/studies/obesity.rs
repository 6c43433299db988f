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

pub const ID: &str = "obesity";

/// Obesity Treatment Outcomes Study.
/// Adults with BMI >= 30 followed for two years across three treatment
/// pathways. Quality of life tracked with IWQOL-Lite, EQ-5D-5L and PHQ-9.
pub struct Obesity;

impl Study for Obesity {
    fn id(&self) -> &str {
        ID
    }

    fn configuration(&self) -> &StudyConfiguration {
        static CONFIG: LazyLock<StudyConfiguration> = LazyLock::new(|| {
            let mut metrics = demographic_metrics(&[18.0, 30.0, 40.0, 50.0, 60.0, 75.0]);
            metrics.extend(clinical_metrics());

            StudyConfiguration {
                id: ID.to_string(),
                name: "Obesity Treatment Outcomes Study".to_string(),
                target_enrollment: Some(1500),
                demographics: Demographics {
                    gender: vec![
                        (Gender::Female, 0.62),
                        (Gender::Male, 0.37),
                        (Gender::Other, 0.01),
                    ],
                    age: NumericRange {
                        min: 18.0,
                        max: 75.0,
                        mode: 45.0,
                    },
                    bmi: NumericRange {
                        min: 30.0,
                        max: 55.0,
                        mode: 37.0,
                    },
                    race: race_weights([0.58, 0.22, 0.07, 0.02, 0.01, 0.05, 0.05]),
                },
                enrollment_window: EnrollmentWindow {
                    start_year: 2022,
                    start_month: 1,
                    end_year: 2025,
                    end_month: 6,
                },
                enrollment_categories: categories(&[
                    ("lifestyle", "Intensive Lifestyle Intervention", 0.30),
                    ("glp1", "GLP-1 Receptor Agonist", 0.45),
                    ("bariatric", "Bariatric Surgery", 0.25),
                ]),
                assessment_schedule: AssessmentSchedule {
                    per_patient: TimepointTargets::uniform(3),
                    assessment_types: labels(&["iwqol_lite", "eq5d5l", "phq9"]),
                },
                completion_rate: 0.88,
                medical_history: labels(&[
                    "Hypertension",
                    "Type 2 Diabetes",
                    "Dyslipidemia",
                    "Obstructive Sleep Apnea",
                    "GERD",
                    "Osteoarthritis",
                    "NAFLD",
                    "Depression",
                ]),
                medications: labels(&[
                    "Metformin",
                    "Semaglutide",
                    "Tirzepatide",
                    "Liraglutide",
                    "Phentermine",
                    "Lisinopril",
                    "Atorvastatin",
                    "Sertraline",
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
        hospital: "Massachusetts General Hospital",
        city: "Boston",
        state: "MA",
        enrolled: 312,
        status: SiteStatus::Active,
        health: SiteHealth::Healthy,
        data_quality: 96.5,
    },
    SiteSpec {
        hospital: "Cleveland Clinic",
        city: "Cleveland",
        state: "OH",
        enrolled: 287,
        status: SiteStatus::Active,
        health: SiteHealth::Healthy,
        data_quality: 94.2,
    },
    SiteSpec {
        hospital: "Houston Methodist Hospital",
        city: "Houston",
        state: "TX",
        enrolled: 241,
        status: SiteStatus::Active,
        health: SiteHealth::Warning,
        data_quality: 87.9,
    },
    SiteSpec {
        hospital: "Northwestern Memorial Hospital",
        city: "Chicago",
        state: "IL",
        enrolled: 198,
        status: SiteStatus::Active,
        health: SiteHealth::Healthy,
        data_quality: 92.4,
    },
    SiteSpec {
        hospital: "Cedars-Sinai Medical Center",
        city: "Los Angeles",
        state: "CA",
        enrolled: 174,
        status: SiteStatus::Active,
        health: SiteHealth::Healthy,
        data_quality: 95.1,
    },
    SiteSpec {
        hospital: "Emory University Hospital",
        city: "Atlanta",
        state: "GA",
        enrolled: 0,
        status: SiteStatus::Onboarding,
        health: SiteHealth::Healthy,
        data_quality: 100.0,
    },
];
