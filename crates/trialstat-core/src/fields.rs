//! Patient field names addressable by metric definitions.
//!
//! The dashboard historically used camelCase names, so [`canonical`] accepts
//! both spellings and maps them onto the snake_case constants below.

pub const ID: &str = "id";
pub const STUDY_ID: &str = "study_id";
pub const SITE_ID: &str = "site_id";
pub const AGE: &str = "age";
pub const GENDER: &str = "gender";
pub const BMI: &str = "bmi";
pub const RACE: &str = "race";
pub const ETHNICITY: &str = "ethnicity";
pub const STATUS: &str = "status";
pub const ENROLLMENT_CATEGORY: &str = "enrollment_category";
pub const ENROLLMENT_YEAR: &str = "enrollment_year";
pub const ENROLLMENT_MONTH: &str = "enrollment_month";
pub const MEDICAL_HISTORY: &str = "medical_history";
pub const MEDICATIONS: &str = "medications";
pub const ASSESSMENT_COUNT: &str = "assessment_count";

/// Every field name a [`PatientData`](crate::models::patient::PatientData) answers to.
pub const ALL: &[&str] = &[
    ID,
    STUDY_ID,
    SITE_ID,
    AGE,
    GENDER,
    BMI,
    RACE,
    ETHNICITY,
    STATUS,
    ENROLLMENT_CATEGORY,
    ENROLLMENT_YEAR,
    ENROLLMENT_MONTH,
    MEDICAL_HISTORY,
    MEDICATIONS,
    ASSESSMENT_COUNT,
];

/// Resolve a field name (snake_case or camelCase) to its canonical constant.
pub fn canonical(name: &str) -> Option<&'static str> {
    let resolved = match name {
        "studyId" => STUDY_ID,
        "siteId" => SITE_ID,
        "raceEthnicity" => RACE,
        "enrollmentCategory" => ENROLLMENT_CATEGORY,
        "enrollmentYear" => ENROLLMENT_YEAR,
        "enrollmentMonth" => ENROLLMENT_MONTH,
        "medicalHistory" => MEDICAL_HISTORY,
        "assessmentCount" => ASSESSMENT_COUNT,
        other => return ALL.iter().copied().find(|f| *f == other),
    };
    Some(resolved)
}
