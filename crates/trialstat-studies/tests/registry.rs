use std::collections::HashSet;

use trialstat_core::models::site::total_enrolled;
use trialstat_studies::error::StudyError;
use trialstat_studies::instruments::{INSTRUMENTS, get_instrument};
use trialstat_studies::{all_studies, get_study, study_ids};

#[test]
fn every_registered_study_validates() {
    for study in all_studies() {
        if let Err(e) = study.validate() {
            panic!("study '{}' failed validation: {e}", study.id());
        }
    }
}

#[test]
fn study_ids_are_unique_and_ordered() {
    let ids = study_ids();
    assert_eq!(ids, vec!["obesity", "diabetes", "cardiology"]);
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn unknown_study_fails_with_its_name() {
    let err = get_study("oncology").err().expect("unknown study must fail");
    assert!(matches!(err, StudyError::UnknownStudy(ref id) if id == "oncology"));
    assert!(err.to_string().contains("oncology"));
}

#[test]
fn lookup_returns_the_requested_study() {
    let study = get_study("cardiology").unwrap();
    assert_eq!(study.id(), "cardiology");
    assert_eq!(study.configuration().id, "cardiology");
    assert_eq!(study.name(), "Heart Failure Outcomes Registry");
}

#[test]
fn sites_belong_to_their_study_and_have_unique_ids() {
    for study in all_studies() {
        let mut seen = HashSet::new();
        for site in study.sites() {
            assert_eq!(site.study_id, study.id());
            assert!(site.id.starts_with(study.id()));
            assert!(seen.insert(site.id.clone()), "duplicate site id {}", site.id);
        }
    }
}

#[test]
fn every_study_enrolls_patients() {
    for study in all_studies() {
        assert!(total_enrolled(study.sites()) > 0, "{} has no patients", study.id());
    }
}

#[test]
fn scheduled_instruments_exist_in_the_catalog() {
    for study in all_studies() {
        for t in &study.configuration().assessment_schedule.assessment_types {
            assert!(get_instrument(t).is_some(), "{}: unknown instrument {t}", study.id());
        }
    }
}

#[test]
fn instrument_ranges_fit_their_scales() {
    for instrument in INSTRUMENTS {
        assert!(instrument.range.min <= instrument.range.max, "{}", instrument.id);
        assert!(instrument.range.max <= instrument.max_score, "{}", instrument.id);
        assert!(instrument.range.min >= 0.0, "{}", instrument.id);
        assert!(!instrument.name.is_empty());
    }
    assert!(get_instrument("unknown").is_none());
}

#[test]
fn completion_rates_match_study_defaults() {
    let rate = |id: &str| get_study(id).unwrap().configuration().completion_rate;
    assert_eq!(rate("obesity"), 0.88);
    assert_eq!(rate("diabetes"), 0.92);
    assert_eq!(rate("cardiology"), 0.90);
}
