use thiserror::Error;

use trialstat_metrics::error::MetricError;
use trialstat_studies::error::StudyError;
use trialstat_synth::error::SynthError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Study(#[from] StudyError),

    #[error("generation failed: {0}")]
    Synth(#[from] SynthError),

    #[error("aggregation failed: {0}")]
    Metric(#[from] MetricError),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
