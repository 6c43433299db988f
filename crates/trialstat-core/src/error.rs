use thiserror::Error;

use crate::models::study::ConfigIssue;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("date arithmetic failed: {0}")]
    Date(#[from] jiff::Error),

    #[error("invalid configuration for study '{study_id}': {}", format_issues(.issues))]
    InvalidConfiguration {
        study_id: String,
        issues: Vec<ConfigIssue>,
    },
}

fn format_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
