pub mod cardiology;
pub mod diabetes;
pub mod obesity;

use trialstat_core::fields;
use trialstat_core::models::metric::MetricDefinition;
use trialstat_core::models::study::{EnrollmentCategory, Weights};

/// US census-style race categories shared by every study. Studies pass their
/// own weights in this order.
const RACES: [&str; 7] = [
    "White",
    "Black or African American",
    "Asian",
    "American Indian or Alaska Native",
    "Native Hawaiian or Other Pacific Islander",
    "Multiracial",
    "Other",
];

fn race_weights(weights: [f64; 7]) -> Weights<String> {
    RACES
        .iter()
        .zip(weights)
        .map(|(race, w)| (race.to_string(), w))
        .collect()
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn categories(items: &[(&str, &str, f64)]) -> Vec<EnrollmentCategory> {
    items
        .iter()
        .map(|(key, label, weight)| EnrollmentCategory {
            key: key.to_string(),
            label: label.to_string(),
            weight: *weight,
        })
        .collect()
}

/// Metrics every study reports, in dashboard order.
fn demographic_metrics(age_edges: &[f64]) -> Vec<MetricDefinition> {
    vec![
        MetricDefinition::categorical("gender", "Gender Distribution", fields::GENDER),
        MetricDefinition::numerical("age", "Age Distribution", fields::AGE).with_buckets(age_edges),
        MetricDefinition::numerical("bmi", "BMI Distribution", fields::BMI),
        MetricDefinition::categorical("race", "Race", fields::RACE),
        MetricDefinition::categorical("ethnicity", "Ethnicity", fields::ETHNICITY),
        MetricDefinition::categorical("status", "Participant Status", fields::STATUS),
        MetricDefinition::categorical("site", "Enrollment by Site", fields::SITE_ID),
        MetricDefinition::categorical(
            "enrollment_year",
            "Enrollment by Year",
            fields::ENROLLMENT_YEAR,
        ),
    ]
}

/// Metrics that read the study's clinical tag lists and assessments.
fn clinical_metrics() -> Vec<MetricDefinition> {
    vec![
        MetricDefinition::categorical(
            "enrollment_category",
            "Enrollment Category",
            fields::ENROLLMENT_CATEGORY,
        ),
        MetricDefinition::occurrences(
            "medical_history",
            "Medical History",
            fields::MEDICAL_HISTORY,
        ),
        MetricDefinition::occurrences("medications", "Medications", fields::MEDICATIONS),
        MetricDefinition::numerical(
            "assessment_count",
            "Assessments per Patient",
            fields::ASSESSMENT_COUNT,
        ),
    ]
}
