use thiserror::Error;

use trialstat_core::error::CoreError;

#[derive(Debug, Error)]
pub enum StudyError {
    #[error("unknown study: {0}")]
    UnknownStudy(String),

    #[error(transparent)]
    Invalid(#[from] CoreError),
}
