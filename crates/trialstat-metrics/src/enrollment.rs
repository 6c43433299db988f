use trialstat_core::models::patient::PatientData;
use trialstat_core::models::site::{Site, SiteStatus, total_enrolled};
use trialstat_core::models::study::StudyConfiguration;
use trialstat_core::models::summary::{CategoryEnrollment, EnrollmentSummary, SiteEnrollment};

/// Enrollment progress of a study against its target, with one row per site
/// and one per enrollment category.
///
/// Category rows carry the configured display label; their percentages are
/// relative to the whole population.
pub fn summarize(
    config: &StudyConfiguration,
    sites: &[Site],
    population: &[PatientData],
) -> EnrollmentSummary {
    let enrolled = total_enrolled(sites);
    let count_status = |status: SiteStatus| sites.iter().filter(|s| s.status == status).count();

    let percent_of_target = config
        .target_enrollment
        .filter(|target| *target > 0)
        .map(|target| enrolled as f64 / f64::from(target) * 100.0);

    let categories = config
        .enrollment_categories
        .iter()
        .map(|category| {
            let enrolled_patients = population
                .iter()
                .filter(|p| p.enrollment_category.as_deref() == Some(category.key.as_str()))
                .count();
            let percentage = if population.is_empty() {
                0.0
            } else {
                enrolled_patients as f64 / population.len() as f64 * 100.0
            };
            CategoryEnrollment {
                key: category.key.clone(),
                label: category.label.clone(),
                enrolled_patients,
                percentage,
            }
        })
        .collect();

    EnrollmentSummary {
        target_enrollment: config.target_enrollment,
        enrolled,
        percent_of_target,
        active_sites: count_status(SiteStatus::Active),
        onboarding_sites: count_status(SiteStatus::Onboarding),
        inactive_sites: count_status(SiteStatus::Inactive),
        sites: sites
            .iter()
            .map(|site| SiteEnrollment {
                site_id: site.id.clone(),
                name: site.name.clone(),
                enrolled_patients: site.enrolled_patients,
                status: site.status,
                health: site.health,
                data_quality: site.data_quality,
            })
            .collect(),
        categories,
    }
}
