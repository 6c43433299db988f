use std::path::PathBuf;

use clap::Parser;

/// Generate synthetic cohorts and print each study's metrics bundle as JSON.
///
/// With no study ids every registered study is reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "trialstat-report", version)]
pub struct ReportArgs {
    /// Engine config file. Defaults to the platform config directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit logs to stderr as JSON lines.
    #[arg(long)]
    pub json_logs: bool,

    /// Include the generated patient records, not just the metrics bundle.
    #[arg(long)]
    pub patients: bool,

    #[arg(value_name = "STUDY_ID")]
    pub study_ids: Vec<String>,
}
