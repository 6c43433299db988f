use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Version stamped on every saved and loaded config. Files claiming a newer
/// version are rejected.
pub const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "engine.json";

/// What [`GenerationCache::get_study_metrics`](crate::GenerationCache::get_study_metrics)
/// does with an existing entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CachePolicy {
    /// Compute once per study, then serve the stored bundle.
    #[default]
    Memoize,
    /// Regenerate on every request, replacing the stored bundle.
    AlwaysRecompute,
}

/// Where generation randomness comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RngSource {
    /// Fresh OS entropy per generation run.
    #[default]
    Entropy,
    /// Every generation run starts from this seed, so a study always yields
    /// the same cohort.
    Seeded(u64),
}

impl RngSource {
    pub fn rng(&self) -> StdRng {
        match self {
            Self::Entropy => StdRng::from_os_rng(),
            Self::Seeded(seed) => StdRng::seed_from_u64(*seed),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Absent in hand-written files. Loading stamps [`CURRENT_VERSION`].
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub cache_policy: CachePolicy,
    #[serde(default)]
    pub rng: RngSource,
    /// Date treated as "today" when deciding which assessments are due.
    /// Defaults to the system date in the local time zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<jiff::civil::Date>,
}

impl EngineConfig {
    /// The configured `as_of` date, or today's local date.
    pub fn today(&self) -> jiff::civil::Date {
        self.as_of.unwrap_or_else(|| jiff::Zoned::now().date())
    }
}

/// `<platform config dir>/trialstat/engine.json`, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("trialstat").join(CONFIG_FILE))
}

/// Load the config at `path`, or the default location when `path` is `None`.
///
/// An explicit path must exist. A missing file at the default location
/// yields [`EngineConfig::default`].
pub fn load_or_default(path: Option<&Path>) -> Result<EngineConfig, EngineError> {
    match path {
        Some(path) => load_config(path),
        None => match default_config_path() {
            Some(path) if path.exists() => load_config(&path),
            _ => {
                tracing::debug!("no engine config found, using defaults");
                Ok(EngineConfig::default())
            }
        },
    }
}

pub fn load_config(path: &Path) -> Result<EngineConfig, EngineError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        EngineError::Config(format!("failed to read config at {}: {e}", path.display()))
    })?;

    let mut config: EngineConfig = serde_json::from_str(&contents)?;
    if config.config_version > CURRENT_VERSION {
        return Err(EngineError::Config(format!(
            "config_version {} is newer than this build supports ({CURRENT_VERSION})",
            config.config_version
        )));
    }
    // Files without a version predate the field and share the current shape.
    config.config_version = CURRENT_VERSION;

    tracing::debug!(path = %path.display(), ?config, "engine config loaded");
    Ok(config)
}

pub fn save_config(path: &Path, config: &EngineConfig) -> Result<(), EngineError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Readers never observe a half-written file.
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "engine config saved");
    Ok(())
}
