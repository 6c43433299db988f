use jiff::civil::date;
use rand::SeedableRng;
use rand::rngs::StdRng;

use trialstat_core::models::assessment::Timepoint;
use trialstat_metrics::{compliance, enrollment};
use trialstat_studies::get_study;
use trialstat_synth::assessments::attach_assessments;
use trialstat_synth::cohort::generate_cohort;

#[test]
fn obesity_enrollment_against_target() {
    let study = get_study("obesity").unwrap();
    let summary = enrollment::summarize(study.configuration(), study.sites(), &[]);

    assert_eq!(summary.target_enrollment, Some(1500));
    assert_eq!(summary.enrolled, 1212);
    let percent = summary.percent_of_target.unwrap();
    assert!((percent - 80.8).abs() < 1e-9, "{percent}");
    assert_eq!(summary.active_sites, 5);
    assert_eq!(summary.onboarding_sites, 1);
    assert_eq!(summary.inactive_sites, 0);
    assert_eq!(summary.sites.len(), study.sites().len());
}

#[test]
fn enrollment_without_target_has_no_percentage() {
    let study = get_study("diabetes").unwrap();
    let mut config = study.configuration().clone();
    config.target_enrollment = None;
    let summary = enrollment::summarize(&config, study.sites(), &[]);
    assert!(summary.percent_of_target.is_none());
    assert!(summary.enrolled > 0);
}

#[test]
fn category_rows_carry_configured_labels() {
    let study = get_study("obesity").unwrap();
    let config = study.configuration();
    let cohort = generate_cohort(config, study.sites(), &mut StdRng::seed_from_u64(22)).unwrap();

    let summary = enrollment::summarize(config, study.sites(), &cohort);

    let labels: Vec<&str> = summary.categories.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Intensive Lifestyle Intervention",
            "GLP-1 Receptor Agonist",
            "Bariatric Surgery"
        ]
    );
    let counted: usize = summary.categories.iter().map(|c| c.enrolled_patients).sum();
    assert_eq!(counted, cohort.len());
    let percent: f64 = summary.categories.iter().map(|c| c.percentage).sum();
    assert!((percent - 100.0).abs() < 1e-6);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["categories"][1]["key"], "glp1");
    assert_eq!(json["categories"][1]["label"], "GLP-1 Receptor Agonist");
}

#[test]
fn compliance_counts_eligible_patients_per_timepoint() {
    let study = get_study("cardiology").unwrap();
    let config = study.configuration();
    let today = date(2025, 1, 1);
    let mut rng = StdRng::seed_from_u64(21);
    let mut cohort = generate_cohort(config, study.sites(), &mut rng).unwrap();
    attach_assessments(&mut cohort, config, today, &mut rng).unwrap();

    let rows = compliance::summarize(config, &cohort, today).unwrap();
    assert_eq!(
        rows.iter().map(|r| r.timepoint).collect::<Vec<_>>(),
        Timepoint::ALL.to_vec()
    );

    let enrolled_by_today = cohort.iter().filter(|p| p.enrollment_date <= today).count();
    assert!(enrolled_by_today < cohort.len(), "window should extend past today");
    let baseline = &rows[0];
    assert_eq!(baseline.eligible_patients, enrolled_by_today);
    assert_eq!(baseline.expected_assessments, enrolled_by_today * 3);

    for pair in rows.windows(2) {
        assert!(pair[0].eligible_patients >= pair[1].eligible_patients);
    }
    for row in &rows {
        assert!(row.completed_assessments <= row.expected_assessments);
        assert!((0.0..=100.0).contains(&row.completion_percentage));
        let recorded: usize = cohort
            .iter()
            .flat_map(|p| &p.assessments)
            .filter(|a| a.timepoint == row.timepoint)
            .count();
        assert_eq!(row.completed_assessments, recorded);

        let names: Vec<&str> = row.instruments.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["KCCQ-12", "SF-36", "EQ-5D-5L"]);
        let per_instrument: usize = row.instruments.iter().map(|i| i.completed_assessments).sum();
        assert_eq!(per_instrument, row.completed_assessments);
        assert!(
            row.instruments
                .iter()
                .all(|i| (0.0..=100.0).contains(&i.completion_percentage))
        );
    }
}

#[test]
fn nothing_expected_reports_zero_percent() {
    let study = get_study("obesity").unwrap();
    let rows = compliance::summarize(study.configuration(), &[], date(2025, 1, 1)).unwrap();
    assert!(rows.iter().all(|r| r.expected_assessments == 0));
    assert!(rows.iter().all(|r| r.completion_percentage == 0.0));
}
