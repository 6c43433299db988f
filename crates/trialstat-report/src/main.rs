use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use trialstat_engine::GenerationCache;
use trialstat_engine::config::load_or_default;
use trialstat_report::args::ReportArgs;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = ReportArgs::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr so stdout stays valid JSON.
    if args.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = load_or_default(args.config.as_deref())?;
    let cache = GenerationCache::new(config);

    let study_ids = if args.study_ids.is_empty() {
        trialstat_studies::study_ids()
    } else {
        args.study_ids.clone()
    };

    let mut reports = Vec::with_capacity(study_ids.len());
    for study_id in &study_ids {
        let snapshot = cache.get_study_metrics(study_id)?;
        let mut report = serde_json::to_value(&snapshot.metrics)?;
        if args.patients {
            report["patients"] = serde_json::to_value(&snapshot.patients)?;
        }
        reports.push(report);
    }

    tracing::info!(studies = reports.len(), runs = cache.runs(), "report complete");
    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
