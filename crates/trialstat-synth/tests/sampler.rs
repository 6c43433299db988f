use jiff::civil::date;
use rand::SeedableRng;
use rand::rngs::StdRng;

use trialstat_synth::error::SynthError;
use trialstat_synth::sampler::{
    bounded_approx_normal, random_date_in_range, retain_tags, round2, weighted_choice,
};

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn bounded_normal_stays_within_bounds() {
    let mut rng = rng();
    for _ in 0..10_000 {
        let v = bounded_approx_normal(18.0, 75.0, 52.0, &mut rng);
        assert!((18.0..=75.0).contains(&v), "{v} escaped [18, 75]");
        assert_eq!(v.fract(), 0.0);
    }
}

#[test]
fn bounded_normal_respects_fractional_bounds() {
    let mut rng = rng();
    for _ in 0..1_000 {
        let v = bounded_approx_normal(27.5, 45.5, 35.0, &mut rng);
        assert!((27.5..=45.5).contains(&v), "{v} escaped [27.5, 45.5]");
    }
}

#[test]
fn bounded_normal_collapses_degenerate_range() {
    let mut rng = rng();
    assert_eq!(bounded_approx_normal(30.0, 30.0, 30.0, &mut rng), 30.0);
}

#[test]
fn bounded_normal_centers_on_mode() {
    let mut rng = rng();
    let n = 5_000;
    let mean = (0..n)
        .map(|_| bounded_approx_normal(0.0, 100.0, 50.0, &mut rng))
        .sum::<f64>()
        / n as f64;
    assert!((mean - 50.0).abs() < 2.0, "mean {mean}");
}

#[test]
fn single_option_is_always_chosen() {
    let mut rng = rng();
    let weights = vec![("only".to_string(), 3.0)];
    for _ in 0..100 {
        assert_eq!(weighted_choice(&weights, &mut rng).unwrap(), "only");
    }
}

#[test]
fn empty_table_yields_nothing() {
    let weights: Vec<(String, f64)> = Vec::new();
    assert!(weighted_choice(&weights, &mut rng()).is_none());
}

#[test]
fn equal_weights_split_evenly() {
    let mut rng = rng();
    let weights = [("a", 0.5), ("b", 0.5)];
    let n = 10_000;
    let hits = (0..n)
        .filter(|_| *weighted_choice(&weights[..], &mut rng).unwrap() == "a")
        .count();
    let share = hits as f64 / n as f64;
    assert!((share - 0.5).abs() < 0.05, "share of 'a' was {share}");
}

#[test]
fn zero_weight_option_is_never_chosen() {
    let mut rng = rng();
    let weights = [("never", 0.0), ("always", 1.0)];
    for _ in 0..1_000 {
        assert_eq!(*weighted_choice(&weights[..], &mut rng).unwrap(), "always");
    }
}

#[test]
fn dates_cover_whole_months_inclusive() {
    let mut rng = rng();
    let (first, last) = (date(2022, 1, 1), date(2023, 6, 30));
    let mut earliest = last;
    let mut latest = first;
    for _ in 0..5_000 {
        let d = random_date_in_range(2022, 1, 2023, 6, &mut rng).unwrap();
        assert!(d >= first && d <= last, "{d} outside window");
        earliest = earliest.min(d);
        latest = latest.max(d);
    }
    assert!(earliest < date(2022, 2, 1));
    assert!(latest > date(2023, 5, 31));
}

#[test]
fn single_month_window_stays_in_that_month() {
    let mut rng = rng();
    for _ in 0..200 {
        let d = random_date_in_range(2024, 2, 2024, 2, &mut rng).unwrap();
        assert_eq!((d.year(), d.month()), (2024, 2));
    }
}

#[test]
fn reversed_window_is_rejected() {
    let err = random_date_in_range(2024, 6, 2023, 1, &mut rng()).unwrap_err();
    assert!(matches!(err, SynthError::InvalidDateRange { .. }));
}

#[test]
fn invalid_month_is_a_date_error() {
    let err = random_date_in_range(2024, 13, 2024, 14, &mut rng()).unwrap_err();
    assert!(matches!(err, SynthError::Date(_)));
}

#[test]
fn retention_bounds_are_absolute() {
    let mut rng = rng();
    let tags = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    assert!(retain_tags(&tags, 0.0, &mut rng).is_empty());
    assert_eq!(retain_tags(&tags, 1.0, &mut rng), tags);
}

#[test]
fn round2_keeps_two_decimals() {
    assert_eq!(round2(72.456), 72.46);
    assert_eq!(round2(0.004), 0.0);
    assert_eq!(round2(100.0), 100.0);
}
