use std::time::Instant;

use jiff::civil::Date;
use rand::Rng;
use tracing::info;

use trialstat_core::models::patient::PatientData;
use trialstat_core::models::summary::StudyMetrics;
use trialstat_metrics::{compliance, compute_metrics, enrollment};
use trialstat_studies::Study;
use trialstat_synth::assessments::attach_assessments;
use trialstat_synth::cohort::generate_cohort;

use crate::error::EngineError;

/// One generation run for a study: the cohort and everything computed from it.
/// Immutable once built; the cache hands it out behind an `Arc`.
#[derive(Debug, Clone)]
pub struct StudySnapshot {
    pub metrics: StudyMetrics,
    pub patients: Vec<PatientData>,
}

/// Generate the cohort for `study`, attach assessments as of `today`, and
/// compute the study's full metric catalog.
pub fn compute_study<R>(
    study: &dyn Study,
    today: Date,
    rng: &mut R,
) -> Result<StudySnapshot, EngineError>
where
    R: Rng + ?Sized,
{
    let started = Instant::now();
    let config = study.configuration();
    let sites = study.sites();

    let mut patients = generate_cohort(config, sites, rng)?;
    attach_assessments(&mut patients, config, today, rng)?;

    let metrics = compute_metrics(&config.id, &patients, &config.metrics);
    let enrollment = enrollment::summarize(config, sites, &patients);
    let compliance = compliance::summarize(config, &patients, today)?;

    info!(
        study_id = %config.id,
        patients = patients.len(),
        metrics = metrics.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "computed study metrics"
    );

    Ok(StudySnapshot {
        metrics: StudyMetrics {
            study_id: config.id.clone(),
            study_name: study.name().to_string(),
            total_patients: patients.len(),
            metrics,
            enrollment,
            compliance,
            generated_at: jiff::Timestamp::now(),
        },
        patients,
    })
}
