use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("date error: {0}")]
    Date(#[from] jiff::Error),

    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange { start: String, end: String },

    #[error("no weighted options configured for {0}")]
    EmptyDistribution(&'static str),

    #[error("site '{site_id}' belongs to study '{site_study}', not '{study_id}'")]
    SiteStudyMismatch {
        site_id: String,
        site_study: String,
        study_id: String,
    },
}
