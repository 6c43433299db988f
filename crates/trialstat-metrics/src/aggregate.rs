//! Metric computation over a population.
//!
//! Bucket invariant: every bucket is half-open `[min, max)` except the last
//! one, which is closed `[min, max]`. A value therefore lands in at most one
//! bucket, and in exactly one when it lies within the outer edges.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, warn};

use trialstat_core::fields;
use trialstat_core::models::metric::{
    BucketCount, CategoryCount, Counting, MetricData, MetricDefinition, MetricKind, MetricResult,
};
use trialstat_core::models::patient::{FieldValue, PatientData};

use crate::error::MetricError;

/// Number of equal-width buckets used when a metric supplies no edges.
pub const DEFAULT_BUCKET_COUNT: usize = 5;

/// Label used for blank categorical values.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Compute every definition over `population`, one result per definition in
/// input order.
///
/// A failing metric never aborts the batch: the error is logged and an empty
/// result of the same kind takes its place.
pub fn compute_metrics(
    study_id: &str,
    population: &[PatientData],
    definitions: &[MetricDefinition],
) -> Vec<MetricResult> {
    definitions
        .iter()
        .map(|definition| match compute_metric(population, definition) {
            Ok(result) => {
                debug!(
                    study_id,
                    metric_id = %definition.id,
                    total = result.total(),
                    "computed metric"
                );
                result
            }
            Err(e) => {
                warn!(
                    study_id,
                    metric_id = %definition.id,
                    error = %e,
                    "metric failed, reporting empty result"
                );
                MetricResult::empty(definition)
            }
        })
        .collect()
}

/// Compute a single metric.
pub fn compute_metric(
    population: &[PatientData],
    definition: &MetricDefinition,
) -> Result<MetricResult, MetricError> {
    if fields::canonical(&definition.field).is_none() {
        return Err(MetricError::UnknownField(definition.field.clone()));
    }

    let result = match &definition.kind {
        MetricKind::Categorical { counting } => {
            categorical(population, &definition.field, *counting)?
        }
        MetricKind::Numerical { buckets } => {
            let values = numeric_values(population, &definition.field)?;
            summarize_numbers(&values, buckets.as_deref())
        }
    };

    Ok(MetricResult {
        metric_id: definition.id.clone(),
        name: definition.name.clone(),
        result,
    })
}

fn categorical(
    population: &[PatientData],
    field: &str,
    counting: Counting,
) -> Result<MetricData, MetricError> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for patient in population {
        match patient.field(field) {
            None => return Err(MetricError::UnknownField(field.to_string())),
            Some(FieldValue::Missing) => {}
            Some(FieldValue::Text(text)) => {
                let label = if text.trim().is_empty() {
                    UNKNOWN_CATEGORY.to_string()
                } else {
                    text.into_owned()
                };
                *counts.entry(label).or_default() += 1;
            }
            Some(FieldValue::Tags(tags)) => match counting {
                Counting::PerOccurrence => {
                    for tag in tags {
                        *counts.entry(tag.clone()).or_default() += 1;
                    }
                }
                Counting::PerPatient => {
                    let distinct: BTreeSet<&str> = tags.iter().map(String::as_str).collect();
                    for tag in distinct {
                        *counts.entry(tag.to_string()).or_default() += 1;
                    }
                }
            },
            Some(FieldValue::Number(_)) => {
                return Err(MetricError::TypeMismatch {
                    field: field.to_string(),
                    expected: "categorical",
                    found: "numeric",
                });
            }
        }
    }

    Ok(summarize_categories(counts))
}

/// Turn raw category counts into a sorted distribution.
///
/// Entries are ordered by count, descending; ties are broken by category
/// name so output is stable.
pub fn summarize_categories(counts: HashMap<String, usize>) -> MetricData {
    let total: usize = counts.values().sum();

    let mut data: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category,
            count,
            percentage: percentage(count, total),
        })
        .collect();
    data.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));

    MetricData::Categorical { total, data }
}

fn numeric_values(population: &[PatientData], field: &str) -> Result<Vec<f64>, MetricError> {
    let mut values = Vec::with_capacity(population.len());
    for patient in population {
        match patient.field(field) {
            None => return Err(MetricError::UnknownField(field.to_string())),
            Some(FieldValue::Number(n)) if n.is_finite() => values.push(n),
            Some(FieldValue::Number(_)) | Some(FieldValue::Missing) => {}
            Some(FieldValue::Text(_)) | Some(FieldValue::Tags(_)) => {
                return Err(MetricError::TypeMismatch {
                    field: field.to_string(),
                    expected: "numeric",
                    found: "categorical",
                });
            }
        }
    }
    Ok(values)
}

/// Summary statistics and histogram for a set of numbers.
///
/// Non-finite values are ignored. The median is the upper median,
/// `sorted[n / 2]`, so it is always an observed value. Without explicit
/// `edges` the observed range is split into [`DEFAULT_BUCKET_COUNT`]
/// equal-width buckets; if every value is identical a single bucket is used.
pub fn summarize_numbers(values: &[f64], edges: Option<&[f64]>) -> MetricData {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);

    let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
        return MetricData::Numerical {
            total: 0,
            min: 0.0,
            max: 0.0,
            average: 0.0,
            median: 0.0,
            buckets: Vec::new(),
        };
    };

    let total = sorted.len();
    let average = (sorted.iter().sum::<f64>() / total as f64).clamp(min, max);
    let median = sorted[total / 2];

    let edges = match edges {
        Some(edges) if edges.len() >= 2 => edges.to_vec(),
        _ => equal_width_edges(min, max, DEFAULT_BUCKET_COUNT),
    };

    MetricData::Numerical {
        total,
        min,
        max,
        average,
        median,
        buckets: bucket_counts(&sorted, &edges),
    }
}

/// Edges of `count` equal-width buckets spanning `[min, max]`.
pub fn equal_width_edges(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 || min >= max {
        return vec![min, max];
    }
    let width = (max - min) / count as f64;
    let mut edges: Vec<f64> = (0..count).map(|i| min + width * i as f64).collect();
    edges.push(max);
    edges
}

fn bucket_counts(sorted: &[f64], edges: &[f64]) -> Vec<BucketCount> {
    let total = sorted.len();
    let last = edges.len().saturating_sub(2);

    edges
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let (lo, hi) = (pair[0], pair[1]);
            let count = sorted
                .iter()
                .filter(|&&v| v >= lo && (v < hi || (i == last && v <= hi)))
                .count();
            BucketCount {
                label: format!("{}-{}", format_bound(lo), format_bound(hi)),
                min: lo,
                max: hi,
                count,
                percentage: percentage(count, total),
            }
        })
        .collect()
}

fn format_bound(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
