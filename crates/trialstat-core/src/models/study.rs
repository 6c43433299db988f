use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::assessment::Timepoint;
use super::metric::{MetricDefinition, MetricKind};
use super::patient::Gender;
use crate::fields;

/// A `(label, weight)` table. Weights are relative and need not sum to 1.
pub type Weights<T> = Vec<(T, f64)>;

/// Bounds and peak of an approximately normal attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
    pub mode: f64,
}

impl NumericRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Demographics {
    pub gender: Weights<Gender>,
    pub age: NumericRange,
    pub bmi: NumericRange,
    pub race: Weights<String>,
}

/// Inclusive month range in which patients enroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentWindow {
    pub start_year: i16,
    pub start_month: i8,
    pub end_year: i16,
    pub end_month: i8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentCategory {
    pub key: String,
    pub label: String,
    pub weight: f64,
}

/// Assessments each patient is expected to complete at each timepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimepointTargets {
    pub baseline: u32,
    pub six_months: u32,
    pub one_year: u32,
    pub two_years: u32,
}

impl TimepointTargets {
    /// Every timepoint expects the same number of assessments.
    pub fn uniform(per_timepoint: u32) -> Self {
        Self {
            baseline: per_timepoint,
            six_months: per_timepoint,
            one_year: per_timepoint,
            two_years: per_timepoint,
        }
    }

    pub fn get(&self, timepoint: Timepoint) -> u32 {
        match timepoint {
            Timepoint::Baseline => self.baseline,
            Timepoint::SixMonths => self.six_months,
            Timepoint::OneYear => self.one_year,
            Timepoint::TwoYears => self.two_years,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentSchedule {
    pub per_patient: TimepointTargets,
    /// Instrument ids administered at every timepoint.
    pub assessment_types: Vec<String>,
}

/// Completion rate used when a study does not override it.
pub const DEFAULT_COMPLETION_RATE: f64 = 0.85;

/// Static definition of one study. Built once per process and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyConfiguration {
    pub id: String,
    pub name: String,
    pub target_enrollment: Option<u32>,
    pub demographics: Demographics,
    pub enrollment_window: EnrollmentWindow,
    pub enrollment_categories: Vec<EnrollmentCategory>,
    pub assessment_schedule: AssessmentSchedule,
    /// Base probability that a scheduled assessment is completed.
    #[serde(default = "default_completion_rate")]
    pub completion_rate: f64,
    /// Candidate medical-history tags; each patient keeps a random subset.
    pub medical_history: Vec<String>,
    /// Candidate medication tags; each patient keeps a random subset.
    pub medications: Vec<String>,
    pub metrics: Vec<MetricDefinition>,
}

fn default_completion_rate() -> f64 {
    DEFAULT_COMPLETION_RATE
}

/// A single problem found while validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl StudyConfiguration {
    /// Structural checks on the configuration. An empty list means valid.
    ///
    /// Instrument ids are not checked here; the study registry owns the
    /// instrument catalog and checks them itself.
    pub fn issues(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.id.trim().is_empty() {
            issues.push(ConfigIssue::new("id", "must not be empty"));
        }

        check_weights(
            "demographics.gender",
            self.demographics.gender.iter().map(|(_, w)| *w),
            &mut issues,
        );
        check_weights(
            "demographics.race",
            self.demographics.race.iter().map(|(_, w)| *w),
            &mut issues,
        );
        if !self.enrollment_categories.is_empty() {
            check_weights(
                "enrollment_categories",
                self.enrollment_categories.iter().map(|c| c.weight),
                &mut issues,
            );
        }

        check_range("demographics.age", &self.demographics.age, &mut issues);
        check_range("demographics.bmi", &self.demographics.bmi, &mut issues);
        if self.demographics.age.min < 0.0 {
            issues.push(ConfigIssue::new("demographics.age", "minimum must not be negative"));
        }

        let w = &self.enrollment_window;
        if !(1..=12).contains(&w.start_month) || !(1..=12).contains(&w.end_month) {
            issues.push(ConfigIssue::new("enrollment_window", "months must be within 1..=12"));
        } else if (w.start_year, w.start_month) > (w.end_year, w.end_month) {
            issues.push(ConfigIssue::new("enrollment_window", "start is after end"));
        }

        if !(0.0..=1.0).contains(&self.completion_rate) {
            issues.push(ConfigIssue::new("completion_rate", "must be within [0, 1]"));
        }

        let mut seen_types = HashSet::new();
        for t in &self.assessment_schedule.assessment_types {
            if !seen_types.insert(t.as_str()) {
                issues.push(ConfigIssue::new(
                    "assessment_schedule.assessment_types",
                    format!("duplicate assessment type '{t}'"),
                ));
            }
        }

        let mut seen_metrics = HashSet::new();
        for metric in &self.metrics {
            let field = format!("metrics.{}", metric.id);
            if !seen_metrics.insert(metric.id.as_str()) {
                issues.push(ConfigIssue::new(&field, "duplicate metric id"));
            }
            if fields::canonical(&metric.field).is_none() {
                issues.push(ConfigIssue::new(
                    &field,
                    format!("unknown patient field '{}'", metric.field),
                ));
            }
            if let MetricKind::Numerical {
                buckets: Some(edges),
            } = &metric.kind
            {
                if edges.len() < 2 {
                    issues.push(ConfigIssue::new(&field, "bucket edges need at least two values"));
                } else if edges.iter().any(|e| !e.is_finite())
                    || edges.windows(2).any(|pair| pair[0] >= pair[1])
                {
                    issues.push(ConfigIssue::new(
                        &field,
                        "bucket edges must be finite and strictly increasing",
                    ));
                }
            }
        }

        issues
    }
}

fn check_weights(field: &str, weights: impl Iterator<Item = f64>, issues: &mut Vec<ConfigIssue>) {
    let mut total = 0.0;
    let mut count = 0;
    for weight in weights {
        count += 1;
        if !weight.is_finite() || weight < 0.0 {
            issues.push(ConfigIssue::new(
                field,
                format!("weight {weight} must be finite and non-negative"),
            ));
            return;
        }
        total += weight;
    }
    if count == 0 {
        issues.push(ConfigIssue::new(field, "at least one weighted option is required"));
    } else if total <= 0.0 {
        issues.push(ConfigIssue::new(field, "weights must not all be zero"));
    }
}

fn check_range(field: &str, range: &NumericRange, issues: &mut Vec<ConfigIssue>) {
    if !(range.min.is_finite() && range.max.is_finite() && range.mode.is_finite()) {
        issues.push(ConfigIssue::new(field, "bounds must be finite"));
    } else if range.min > range.max {
        issues.push(ConfigIssue::new(field, "min is greater than max"));
    } else if !range.contains(range.mode) {
        issues.push(ConfigIssue::new(field, "mode lies outside [min, max]"));
    }
}
