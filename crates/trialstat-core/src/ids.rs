//! Identifier conventions.
//!
//! Pure string functions. Patient ids are stable for a given study and
//! generation order, so two cohorts generated from the same seed line up
//! record for record.

/// Width of the zero-padded sequence number in a patient id.
pub const PATIENT_SEQUENCE_WIDTH: usize = 5;

/// `obesity-00042` for the 42nd patient of the obesity study (1-based).
pub fn patient(study_id: &str, sequence: usize) -> String {
    format!("{study_id}-{sequence:0width$}", width = PATIENT_SEQUENCE_WIDTH)
}

/// `obesity-site-03` for the third site of the obesity study.
pub fn site(study_id: &str, number: usize) -> String {
    format!("{study_id}-site-{number:02}")
}
