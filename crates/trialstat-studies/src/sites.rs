//! Enrollment sites.
//!
//! Each study lists its sites as a static table of [`SiteSpec`] rows; ids are
//! assigned from the row position so they stay stable across releases as long
//! as rows are only appended.

use trialstat_core::ids;
use trialstat_core::models::site::{Location, Site, SiteHealth, SiteStatus};

/// One row of a study's static site table.
#[derive(Debug, Clone, Copy)]
pub struct SiteSpec {
    pub hospital: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub enrolled: u32,
    pub status: SiteStatus,
    pub health: SiteHealth,
    pub data_quality: f64,
}

/// Every site in this registry is in the United States.
pub const COUNTRY: &str = "United States";

/// Materialize a study's site table. Site numbers start at 1.
pub fn build(study_id: &str, specs: &[SiteSpec]) -> Vec<Site> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| Site {
            id: ids::site(study_id, i + 1),
            study_id: study_id.to_string(),
            name: spec.hospital.to_string(),
            location: Location {
                city: spec.city.to_string(),
                state: spec.state.to_string(),
                country: COUNTRY.to_string(),
            },
            enrolled_patients: spec.enrolled,
            status: spec.status,
            health: spec.health,
            data_quality: spec.data_quality,
        })
        .collect()
}

