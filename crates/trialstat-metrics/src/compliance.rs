use jiff::civil::Date;

use trialstat_core::models::assessment::Timepoint;
use trialstat_core::models::patient::PatientData;
use trialstat_core::models::study::StudyConfiguration;
use trialstat_core::models::summary::{InstrumentCompliance, TimepointCompliance};
use trialstat_studies::instruments;

use crate::error::MetricError;

/// Assessment completion per timepoint as of `today`.
///
/// A patient counts toward a timepoint once its scheduled date is reached;
/// each eligible patient is expected to complete the study's per-patient
/// target at that timepoint, and each scheduled instrument once.
pub fn summarize(
    config: &StudyConfiguration,
    population: &[PatientData],
    today: Date,
) -> Result<Vec<TimepointCompliance>, MetricError> {
    let schedule = &config.assessment_schedule;
    let mut rows = Vec::with_capacity(Timepoint::ALL.len());

    for timepoint in Timepoint::ALL {
        let mut eligible_patients = 0;
        let mut completed_assessments = 0;
        let mut per_instrument = vec![0; schedule.assessment_types.len()];

        for patient in population {
            if !timepoint.is_eligible(patient.enrollment_date, today)? {
                continue;
            }
            eligible_patients += 1;
            for assessment in patient.assessments.iter().filter(|a| a.timepoint == timepoint) {
                completed_assessments += 1;
                if let Some(i) = schedule
                    .assessment_types
                    .iter()
                    .position(|t| *t == assessment.assessment_type)
                {
                    per_instrument[i] += 1;
                }
            }
        }

        let expected_assessments = eligible_patients * schedule.per_patient.get(timepoint) as usize;
        let instruments = schedule
            .assessment_types
            .iter()
            .zip(per_instrument)
            .map(|(assessment_type, completed)| InstrumentCompliance {
                assessment_type: assessment_type.clone(),
                name: instruments::get_instrument(assessment_type)
                    .map_or_else(|| assessment_type.clone(), |i| i.name.to_string()),
                completed_assessments: completed,
                completion_percentage: percentage(completed, eligible_patients),
            })
            .collect();

        rows.push(TimepointCompliance {
            timepoint,
            eligible_patients,
            expected_assessments,
            completed_assessments,
            completion_percentage: percentage(completed_assessments, expected_assessments),
            instruments,
        });
    }

    Ok(rows)
}

fn percentage(completed: usize, expected: usize) -> f64 {
    if expected == 0 {
        0.0
    } else {
        completed as f64 / expected as f64 * 100.0
    }
}
