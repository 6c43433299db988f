//! Quality-of-life instruments that studies schedule at each timepoint.
//!
//! Synthetic scores are drawn uniformly from [`ScoreRange`]; the range is
//! narrower than the instrument's theoretical scale so generated cohorts look
//! like a treated population rather than noise.

/// Range synthetic scores are drawn from.
#[derive(Debug, Clone, Copy)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct Instrument {
    pub id: &'static str,
    pub name: &'static str,
    pub range: ScoreRange,
    /// Maximum possible score on the instrument's scale.
    pub max_score: f64,
}

pub static INSTRUMENTS: &[Instrument] = &[
    Instrument {
        id: "iwqol_lite",
        name: "IWQOL-Lite",
        range: ScoreRange { min: 40.0, max: 100.0 },
        max_score: 100.0,
    },
    Instrument {
        id: "eq5d5l",
        name: "EQ-5D-5L",
        range: ScoreRange { min: 0.3, max: 1.0 },
        max_score: 1.0,
    },
    Instrument {
        id: "sf36",
        name: "SF-36",
        range: ScoreRange { min: 20.0, max: 100.0 },
        max_score: 100.0,
    },
    Instrument {
        id: "kccq12",
        name: "KCCQ-12",
        range: ScoreRange { min: 15.0, max: 100.0 },
        max_score: 100.0,
    },
    Instrument {
        id: "dqol",
        name: "DQOL",
        range: ScoreRange { min: 30.0, max: 100.0 },
        max_score: 100.0,
    },
    Instrument {
        id: "phq9",
        name: "PHQ-9",
        range: ScoreRange { min: 0.0, max: 27.0 },
        max_score: 27.0,
    },
];

/// Look up an instrument by id.
pub fn get_instrument(id: &str) -> Option<&'static Instrument> {
    INSTRUMENTS.iter().find(|i| i.id == id)
}
