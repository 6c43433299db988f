//! trialstat-synth
//!
//! Synthetic cohort generation. Every function takes its randomness as an
//! injected `Rng`, so a seeded `StdRng` reproduces a cohort exactly.

pub mod assessments;
pub mod cohort;
pub mod error;
pub mod sampler;
