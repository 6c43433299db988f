use jiff::civil::Date;
use rand::Rng;
use tracing::{info, warn};

use trialstat_core::models::assessment::{Assessment, Timepoint};
use trialstat_core::models::patient::PatientData;
use trialstat_core::models::study::StudyConfiguration;
use trialstat_studies::instruments;

use crate::error::SynthError;
use crate::sampler::{coin_flip, round2};

/// Half-width of the uniform jitter applied to a study's base completion rate.
pub const COMPLETION_JITTER: f64 = 0.15;
pub const MIN_COMPLETION_RATE: f64 = 0.40;
pub const MAX_COMPLETION_RATE: f64 = 0.98;

/// Completion probability for one timepoint of one patient.
pub fn completion_rate<R>(base_rate: f64, rng: &mut R) -> f64
where
    R: Rng + ?Sized,
{
    let jitter = rng.random_range(-COMPLETION_JITTER..=COMPLETION_JITTER);
    (base_rate + jitter).clamp(MIN_COMPLETION_RATE, MAX_COMPLETION_RATE)
}

/// Synthesize the assessment history of one patient as of `today`.
///
/// Only timepoints whose scheduled date has been reached are considered.
/// Each (timepoint, instrument) pair is included independently, so a patient
/// may have a one-year assessment without a six-month one.
pub fn generate_assessments<R>(
    patient: &PatientData,
    config: &StudyConfiguration,
    today: Date,
    rng: &mut R,
) -> Result<Vec<Assessment>, SynthError>
where
    R: Rng + ?Sized,
{
    let schedule = &config.assessment_schedule;
    let mut assessments = Vec::new();

    for timepoint in Timepoint::ALL {
        if !timepoint.is_eligible(patient.enrollment_date, today)? {
            continue;
        }
        let date = timepoint.scheduled_date(patient.enrollment_date)?;
        let rate = completion_rate(config.completion_rate, rng);

        for assessment_type in &schedule.assessment_types {
            let Some(instrument) = instruments::get_instrument(assessment_type) else {
                warn!(
                    study_id = %config.id,
                    assessment_type = %assessment_type,
                    "skipping unknown instrument"
                );
                continue;
            };
            if !coin_flip(rate, rng) {
                continue;
            }
            let score = rng.random_range(instrument.range.min..=instrument.range.max);
            assessments.push(Assessment {
                assessment_type: assessment_type.clone(),
                timepoint,
                date,
                score: round2(score),
                max_score: instrument.max_score,
            });
        }
    }

    Ok(assessments)
}

/// Fill in the assessment history of every patient in `cohort`.
pub fn attach_assessments<R>(
    cohort: &mut [PatientData],
    config: &StudyConfiguration,
    today: Date,
    rng: &mut R,
) -> Result<(), SynthError>
where
    R: Rng + ?Sized,
{
    let mut total = 0;
    for patient in cohort.iter_mut() {
        patient.assessments = generate_assessments(patient, config, today, rng)?;
        total += patient.assessments.len();
    }
    info!(
        study_id = %config.id,
        patients = cohort.len(),
        assessments = total,
        %today,
        "attached assessments"
    );
    Ok(())
}
