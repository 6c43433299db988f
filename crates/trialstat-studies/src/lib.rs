//! trialstat-studies
//!
//! Static study definitions: demographic distributions, enrollment
//! categories, assessment schedules, metric catalogs and enrollment sites.
//! Pure data. Every definition is validated before it is handed out.

pub mod error;
pub mod instruments;
pub mod sites;
pub mod studies;

use trialstat_core::error::CoreError;
use trialstat_core::models::site::Site;
use trialstat_core::models::study::{ConfigIssue, StudyConfiguration};

use error::StudyError;

/// Trait implemented by each study in the registry.
pub trait Study: Send + Sync {
    /// Unique identifier (e.g., "obesity", "diabetes").
    fn id(&self) -> &str;

    /// The study's generation parameters and metric catalog.
    fn configuration(&self) -> &StudyConfiguration;

    /// Enrollment sites, in generation order.
    fn sites(&self) -> &[Site];

    /// Human-readable name.
    fn name(&self) -> &str {
        &self.configuration().name
    }

    /// Check the configuration, its instruments and its site table.
    fn validate(&self) -> Result<(), StudyError> {
        let config = self.configuration();
        let mut issues = config.issues();

        if config.id != self.id() {
            issues.push(ConfigIssue::new(
                "id",
                format!("configuration id '{}' does not match study '{}'", config.id, self.id()),
            ));
        }

        for t in &config.assessment_schedule.assessment_types {
            if instruments::get_instrument(t).is_none() {
                issues.push(ConfigIssue::new(
                    "assessment_schedule.assessment_types",
                    format!("unknown instrument '{t}'"),
                ));
            }
        }

        for site in self.sites() {
            if site.study_id != self.id() {
                issues.push(ConfigIssue::new(
                    format!("sites.{}", site.id),
                    format!("belongs to study '{}'", site.study_id),
                ));
            }
            if !(0.0..=100.0).contains(&site.data_quality) {
                issues.push(ConfigIssue::new(
                    format!("sites.{}", site.id),
                    "data quality must be within [0, 100]",
                ));
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            tracing::warn!(
                study_id = self.id(),
                issues = issues.len(),
                "invalid study configuration"
            );
            Err(CoreError::InvalidConfiguration {
                study_id: self.id().to_string(),
                issues,
            }
            .into())
        }
    }
}

/// Return all registered studies.
pub fn all_studies() -> Vec<Box<dyn Study>> {
    vec![
        Box::new(studies::obesity::Obesity),
        Box::new(studies::diabetes::Diabetes),
        Box::new(studies::cardiology::Cardiology),
    ]
}

/// Ids of every registered study, in registry order.
pub fn study_ids() -> Vec<String> {
    all_studies().iter().map(|s| s.id().to_string()).collect()
}

/// Look up a study by id and validate it.
///
/// Unknown ids are an error; there is no fallback study.
pub fn get_study(id: &str) -> Result<Box<dyn Study>, StudyError> {
    let study = all_studies()
        .into_iter()
        .find(|s| s.id() == id)
        .ok_or_else(|| StudyError::UnknownStudy(id.to_string()))?;
    study.validate()?;
    Ok(study)
}
