//! trialstat-engine
//!
//! The entry point the dashboard calls: runs cohort generation, assessment
//! synthesis and metric aggregation for a study and memoizes the result per
//! study id.

pub mod cache;
pub mod config;
pub mod error;
pub mod pipeline;

pub use cache::GenerationCache;
pub use config::{CachePolicy, EngineConfig, RngSource};
pub use pipeline::StudySnapshot;
