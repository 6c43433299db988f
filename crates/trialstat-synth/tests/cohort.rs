use std::collections::HashSet;

use jiff::ToSpan;
use jiff::civil::date;
use rand::SeedableRng;
use rand::rngs::StdRng;

use trialstat_core::models::assessment::Timepoint;
use trialstat_core::models::site::{Site, SiteHealth, SiteStatus, total_enrolled};
use trialstat_studies::instruments::get_instrument;
use trialstat_studies::sites::{SiteSpec, build};
use trialstat_studies::{all_studies, get_study};
use trialstat_synth::assessments::{
    MAX_COMPLETION_RATE, MIN_COMPLETION_RATE, attach_assessments, completion_rate,
    generate_assessments,
};
use trialstat_synth::cohort::generate_cohort;
use trialstat_synth::error::SynthError;

fn one_site(study_id: &str, enrolled: u32) -> Vec<Site> {
    build(
        study_id,
        &[SiteSpec {
            hospital: "Test General Hospital",
            city: "Springfield",
            state: "IL",
            enrolled,
            status: SiteStatus::Active,
            health: SiteHealth::Healthy,
            data_quality: 95.0,
        }],
    )
}

#[test]
fn one_site_yields_its_enrollment() {
    let study = get_study("obesity").unwrap();
    let config = study.configuration();
    let sites = one_site("obesity", 100);

    let cohort = generate_cohort(config, &sites, &mut StdRng::seed_from_u64(1)).unwrap();

    assert_eq!(cohort.len(), 100);
    let age = config.demographics.age;
    let bmi = config.demographics.bmi;
    for patient in &cohort {
        assert_eq!(patient.study_id, "obesity");
        assert_eq!(patient.site_id, sites[0].id);
        assert!(age.contains(f64::from(patient.age)), "age {}", patient.age);
        assert!(bmi.contains(patient.bmi), "bmi {}", patient.bmi);
        assert!(patient.assessments.is_empty());
    }
    assert_eq!(cohort[0].id, "obesity-00001");
    assert_eq!(cohort[99].id, "obesity-00100");
}

#[test]
fn cohort_size_matches_site_enrollment_for_every_study() {
    let mut rng = StdRng::seed_from_u64(2);
    for study in all_studies() {
        let cohort = generate_cohort(study.configuration(), study.sites(), &mut rng).unwrap();
        assert_eq!(cohort.len(), total_enrolled(study.sites()), "{}", study.id());

        let ids: HashSet<&str> = cohort.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), cohort.len(), "{}: duplicate patient ids", study.id());

        for site in study.sites() {
            let at_site = cohort.iter().filter(|p| p.site_id == site.id).count();
            assert_eq!(at_site, site.enrolled_patients as usize, "{}", site.id);
        }
    }
}

#[test]
fn attributes_come_from_configured_options() {
    let study = get_study("diabetes").unwrap();
    let config = study.configuration();
    let cohort =
        generate_cohort(config, &one_site("diabetes", 300), &mut StdRng::seed_from_u64(3)).unwrap();

    let races: HashSet<&str> = config.demographics.race.iter().map(|(r, _)| r.as_str()).collect();
    let categories: HashSet<&str> =
        config.enrollment_categories.iter().map(|c| c.key.as_str()).collect();
    let window_start = date(
        config.enrollment_window.start_year,
        config.enrollment_window.start_month,
        1,
    );
    let window_end = date(
        config.enrollment_window.end_year,
        config.enrollment_window.end_month,
        1,
    )
    .last_of_month();

    for patient in &cohort {
        assert!(races.contains(patient.race.as_str()));
        let category = patient.enrollment_category.as_deref().unwrap();
        assert!(categories.contains(category));
        assert!(patient.enrollment_date >= window_start && patient.enrollment_date <= window_end);
        assert!(patient.medical_history.iter().all(|t| config.medical_history.contains(t)));
        assert!(patient.medications.iter().all(|t| config.medications.contains(t)));
    }
}

#[test]
fn foreign_site_is_rejected() {
    let study = get_study("obesity").unwrap();
    let err = generate_cohort(
        study.configuration(),
        &one_site("cardiology", 5),
        &mut StdRng::seed_from_u64(4),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SynthError::SiteStudyMismatch { ref site_study, .. } if site_study == "cardiology"
    ));
}

#[test]
fn site_without_patients_contributes_nothing() {
    let study = get_study("obesity").unwrap();
    let cohort = generate_cohort(
        study.configuration(),
        &one_site("obesity", 0),
        &mut StdRng::seed_from_u64(5),
    )
    .unwrap();
    assert!(cohort.is_empty());
}

#[test]
fn same_seed_reproduces_the_cohort() {
    let study = get_study("cardiology").unwrap();
    let today = date(2025, 3, 1);
    let generate = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut cohort = generate_cohort(study.configuration(), study.sites(), &mut rng).unwrap();
        attach_assessments(&mut cohort, study.configuration(), today, &mut rng).unwrap();
        cohort
    };
    assert_eq!(generate(7), generate(7));
    assert_ne!(generate(7), generate(8));
}

#[test]
fn patient_enrolled_today_only_has_baseline() {
    let study = get_study("obesity").unwrap();
    let config = study.configuration();
    let mut rng = StdRng::seed_from_u64(6);
    let cohort = generate_cohort(config, &one_site("obesity", 50), &mut rng).unwrap();

    for patient in &cohort {
        let today = patient.enrollment_date;
        let assessments = generate_assessments(patient, config, today, &mut rng).unwrap();
        assert!(assessments.iter().all(|a| a.timepoint == Timepoint::Baseline));
        assert!(assessments.iter().all(|a| a.date == patient.enrollment_date));
    }
}

#[test]
fn no_assessment_is_dated_after_today() {
    let study = get_study("obesity").unwrap();
    let config = study.configuration();
    let today = date(2025, 6, 1);
    let mut rng = StdRng::seed_from_u64(12);
    let mut cohort = generate_cohort(config, study.sites(), &mut rng).unwrap();
    attach_assessments(&mut cohort, config, today, &mut rng).unwrap();

    let enrolled_later: Vec<_> = cohort.iter().filter(|p| p.enrollment_date > today).collect();
    assert!(!enrolled_later.is_empty(), "window should extend past today");
    assert!(enrolled_later.iter().all(|p| p.assessments.is_empty()));

    for patient in &cohort {
        assert!(patient.assessments.iter().all(|a| a.date <= today), "{}", patient.id);
    }
}

#[test]
fn scores_fall_in_instrument_range_with_two_decimals() {
    let study = get_study("cardiology").unwrap();
    let config = study.configuration();
    let mut rng = StdRng::seed_from_u64(7);
    let mut cohort = generate_cohort(config, study.sites(), &mut rng).unwrap();
    attach_assessments(&mut cohort, config, date(2026, 1, 1), &mut rng).unwrap();

    let mut seen = 0;
    for patient in &cohort {
        for a in &patient.assessments {
            let instrument = get_instrument(&a.assessment_type).unwrap();
            let range = instrument.range;
            assert!(
                a.score >= range.min && a.score <= range.max,
                "{} scored {}",
                a.assessment_type,
                a.score
            );
            assert_eq!(a.max_score, instrument.max_score);
            assert!(((a.score * 100.0).round() - a.score * 100.0).abs() < 1e-6);
            assert!(config.assessment_schedule.assessment_types.contains(&a.assessment_type));
            seen += 1;
        }
    }
    assert!(seen > 0);
}

#[test]
fn assessment_dates_follow_the_schedule() {
    let study = get_study("diabetes").unwrap();
    let config = study.configuration();
    let mut rng = StdRng::seed_from_u64(8);
    let today = date(2026, 6, 1);
    let mut cohort = generate_cohort(config, study.sites(), &mut rng).unwrap();
    attach_assessments(&mut cohort, config, today, &mut rng).unwrap();

    for patient in &cohort {
        for a in &patient.assessments {
            let due = patient
                .enrollment_date
                .checked_add(a.timepoint.offset_days().days())
                .unwrap();
            assert_eq!(a.date, due);
            assert!(a.date <= today);
        }
    }
}

#[test]
fn jittered_completion_rate_stays_clamped() {
    let mut rng = StdRng::seed_from_u64(9);
    for base in [0.0, 0.5, 0.88, 1.0] {
        for _ in 0..1_000 {
            let rate = completion_rate(base, &mut rng);
            assert!((MIN_COMPLETION_RATE..=MAX_COMPLETION_RATE).contains(&rate), "{rate}");
        }
    }
}
