use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::assessment::Assessment;
use crate::fields;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PatientStatus {
    Active,
    Completed,
    Withdrawn,
}

impl PatientStatus {
    pub const ALL: [PatientStatus; 3] = [Self::Active, Self::Completed, Self::Withdrawn];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Withdrawn => "withdrawn",
        }
    }
}

/// One synthetic study participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientData {
    pub id: String,
    pub study_id: String,
    pub site_id: String,
    pub age: u32,
    pub gender: Gender,
    pub bmi: f64,
    pub race: String,
    pub ethnicity: String,
    pub enrollment_date: jiff::civil::Date,
    pub status: PatientStatus,
    /// Key of the enrollment category, when the study defines any.
    pub enrollment_category: Option<String>,
    pub medical_history: Vec<String>,
    pub medications: Vec<String>,
    pub assessments: Vec<Assessment>,
}

/// A patient attribute read by name, as seen by the metrics layer.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Number(f64),
    Tags(&'a [String]),
    /// The field exists but holds no value for this patient.
    Missing,
}

impl PatientData {
    /// Look up a field by name. Returns `None` when no such field exists.
    pub fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match fields::canonical(name)? {
            fields::ID => FieldValue::Text(Cow::Borrowed(&self.id)),
            fields::STUDY_ID => FieldValue::Text(Cow::Borrowed(&self.study_id)),
            fields::SITE_ID => FieldValue::Text(Cow::Borrowed(&self.site_id)),
            fields::AGE => FieldValue::Number(f64::from(self.age)),
            fields::GENDER => FieldValue::Text(Cow::Borrowed(self.gender.label())),
            fields::BMI => FieldValue::Number(self.bmi),
            fields::RACE => FieldValue::Text(Cow::Borrowed(&self.race)),
            fields::ETHNICITY => FieldValue::Text(Cow::Borrowed(&self.ethnicity)),
            fields::STATUS => FieldValue::Text(Cow::Borrowed(self.status.label())),
            fields::ENROLLMENT_CATEGORY => match &self.enrollment_category {
                Some(key) => FieldValue::Text(Cow::Borrowed(key)),
                None => FieldValue::Missing,
            },
            fields::ENROLLMENT_YEAR => {
                FieldValue::Text(Cow::Owned(self.enrollment_date.year().to_string()))
            }
            fields::ENROLLMENT_MONTH => FieldValue::Text(Cow::Owned(format!(
                "{:04}-{:02}",
                self.enrollment_date.year(),
                self.enrollment_date.month()
            ))),
            fields::MEDICAL_HISTORY => FieldValue::Tags(&self.medical_history),
            fields::MEDICATIONS => FieldValue::Tags(&self.medications),
            fields::ASSESSMENT_COUNT => FieldValue::Number(self.assessments.len() as f64),
            _ => return None,
        };
        Some(value)
    }
}
