//! trialstat-core
//!
//! Pure domain types shared by every trialstat crate: studies, sites,
//! synthetic patients, assessments, metric definitions and results.
//! No randomness and no I/O live here.

pub mod error;
pub mod fields;
pub mod ids;
pub mod models;
