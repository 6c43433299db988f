//! trialstat-metrics
//!
//! Aggregate statistics over a generated cohort: categorical distributions,
//! numerical summaries with histogram buckets, enrollment progress and
//! assessment compliance.

pub mod aggregate;
pub mod compliance;
pub mod enrollment;
pub mod error;

pub use aggregate::{compute_metric, compute_metrics};
