use rand::Rng;
use tracing::info;

use trialstat_core::ids;
use trialstat_core::models::patient::{PatientData, PatientStatus};
use trialstat_core::models::site::{Site, total_enrolled};
use trialstat_core::models::study::StudyConfiguration;

use crate::error::SynthError;
use crate::sampler::{
    bounded_approx_normal, random_date_in_range, retain_tags, weighted_choice, weighted_choice_by,
};

/// Ethnicity is drawn independently of race.
pub const ETHNICITY_WEIGHTS: [(&str, f64); 2] =
    [("Not Hispanic or Latino", 0.8), ("Hispanic or Latino", 0.2)];

/// Probability that a candidate medical-history tag is kept.
pub const MEDICAL_HISTORY_RETENTION: f64 = 0.5;

/// Probability that a candidate medication tag is kept.
pub const MEDICATION_RETENTION: f64 = 0.4;

/// Generate the full cohort for a study: exactly `enrolled_patients` records
/// per site, in site order, with ids numbered sequentially across sites.
///
/// Assessments are left empty; see [`crate::assessments::attach_assessments`].
pub fn generate_cohort<R>(
    config: &StudyConfiguration,
    sites: &[Site],
    rng: &mut R,
) -> Result<Vec<PatientData>, SynthError>
where
    R: Rng + ?Sized,
{
    let mut cohort = Vec::with_capacity(total_enrolled(sites));

    for site in sites {
        if site.study_id != config.id {
            return Err(SynthError::SiteStudyMismatch {
                site_id: site.id.clone(),
                site_study: site.study_id.clone(),
                study_id: config.id.clone(),
            });
        }
        for _ in 0..site.enrolled_patients {
            let sequence = cohort.len() + 1;
            cohort.push(generate_patient(config, site, sequence, rng)?);
        }
    }

    info!(
        study_id = %config.id,
        sites = sites.len(),
        patients = cohort.len(),
        "generated cohort"
    );
    Ok(cohort)
}

/// One patient. Every attribute is drawn independently.
pub fn generate_patient<R>(
    config: &StudyConfiguration,
    site: &Site,
    sequence: usize,
    rng: &mut R,
) -> Result<PatientData, SynthError>
where
    R: Rng + ?Sized,
{
    let demographics = &config.demographics;

    let gender = *weighted_choice(&demographics.gender, rng)
        .ok_or(SynthError::EmptyDistribution("gender"))?;
    let age = demographics.age;
    let age = bounded_approx_normal(age.min, age.max, age.mode, rng) as u32;
    let bmi = demographics.bmi;
    let bmi = bounded_approx_normal(bmi.min, bmi.max, bmi.mode, rng);
    let race = weighted_choice(&demographics.race, rng)
        .ok_or(SynthError::EmptyDistribution("race"))?
        .clone();
    let enrollment_category = weighted_choice_by(&config.enrollment_categories, |c| c.weight, rng)
        .map(|c| c.key.clone());

    let window = &config.enrollment_window;
    let enrollment_date = random_date_in_range(
        window.start_year,
        window.start_month,
        window.end_year,
        window.end_month,
        rng,
    )?;

    let status = PatientStatus::ALL[rng.random_range(0..PatientStatus::ALL.len())];
    let medical_history = retain_tags(&config.medical_history, MEDICAL_HISTORY_RETENTION, rng);
    let medications = retain_tags(&config.medications, MEDICATION_RETENTION, rng);
    let ethnicity = weighted_choice(&ETHNICITY_WEIGHTS[..], rng)
        .ok_or(SynthError::EmptyDistribution("ethnicity"))?
        .to_string();

    Ok(PatientData {
        id: ids::patient(&config.id, sequence),
        study_id: config.id.clone(),
        site_id: site.id.clone(),
        age,
        gender,
        bmi,
        race,
        ethnicity,
        enrollment_date,
        status,
        enrollment_category,
        medical_history,
        medications,
        assessments: Vec::new(),
    })
}
