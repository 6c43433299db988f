use std::fmt;

use jiff::ToSpan;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A follow-up checkpoint in a study's assessment schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Timepoint {
    #[serde(rename = "baseline")]
    Baseline,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "1year")]
    OneYear,
    #[serde(rename = "2years")]
    TwoYears,
}

impl Timepoint {
    pub const ALL: [Timepoint; 4] = [
        Self::Baseline,
        Self::SixMonths,
        Self::OneYear,
        Self::TwoYears,
    ];

    /// Days after enrollment at which this timepoint falls due.
    pub fn offset_days(&self) -> i64 {
        match self {
            Self::Baseline => 0,
            Self::SixMonths => 182,
            Self::OneYear => 365,
            Self::TwoYears => 730,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::SixMonths => "6months",
            Self::OneYear => "1year",
            Self::TwoYears => "2years",
        }
    }

    /// Scheduled calendar date for a patient enrolled on `enrollment`.
    pub fn scheduled_date(&self, enrollment: Date) -> Result<Date, jiff::Error> {
        enrollment.checked_add(self.offset_days().days())
    }

    /// A timepoint is eligible once its scheduled date is not after `today`.
    /// A patient enrolled after `today` has no eligible timepoint, baseline
    /// included.
    pub fn is_eligible(&self, enrollment: Date, today: Date) -> Result<bool, jiff::Error> {
        Ok(self.scheduled_date(enrollment)? <= today)
    }
}

impl fmt::Display for Timepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One completed quality-of-life instrument for one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    /// Instrument id, e.g. `"iwqol_lite"`.
    pub assessment_type: String,
    pub timepoint: Timepoint,
    pub date: Date,
    pub score: f64,
    pub max_score: f64,
}
