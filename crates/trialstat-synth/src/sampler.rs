//! Distribution sampling primitives.
//!
//! These are approximations tuned for plausible-looking synthetic data, not
//! statistically exact samplers.

use std::f64::consts::PI;

use jiff::ToSpan;
use jiff::civil::Date;
use rand::Rng;

use crate::error::SynthError;

/// Draw one item with probability proportional to `weight(item)`.
///
/// Weights need not be normalized. Items are scanned in slice order against
/// a cumulative sum; if floating point error leaves the sum short of the
/// draw, the last item is returned. Returns `None` only for an empty slice.
pub fn weighted_choice_by<'a, T, R>(
    items: &'a [T],
    weight: impl Fn(&T) -> f64,
    rng: &mut R,
) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    let last = items.last()?;
    let total: f64 = items.iter().map(&weight).sum();
    let threshold = rng.random::<f64>() * total;

    let mut cumulative = 0.0;
    for item in items {
        cumulative += weight(item);
        if threshold < cumulative {
            return Some(item);
        }
    }
    Some(last)
}

/// [`weighted_choice_by`] over a `(label, weight)` table.
pub fn weighted_choice<'a, L, R>(weights: &'a [(L, f64)], rng: &mut R) -> Option<&'a L>
where
    R: Rng + ?Sized,
{
    weighted_choice_by(weights, |(_, w)| *w, rng).map(|(label, _)| label)
}

/// Approximately normal value centered on `mode`, rounded to an integer and
/// kept inside `[min, max]`.
///
/// A Box–Muller standard normal is scaled so that `max - min` spans six
/// standard deviations. Rounding happens before the clamp so fractional
/// bounds are still respected.
pub fn bounded_approx_normal<R>(min: f64, max: f64, mode: f64, rng: &mut R) -> f64
where
    R: Rng + ?Sized,
{
    let (min, max) = if min <= max { (min, max) } else { (max, min) };

    // (0, 1] keeps ln() finite.
    let u1 = 1.0 - rng.random::<f64>();
    let u2 = rng.random::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();

    let value = mode + z * (max - min) / 6.0;
    value.round().clamp(min, max)
}

/// Uniform date between the first day of the start month and the last day of
/// the end month, both inclusive.
pub fn random_date_in_range<R>(
    start_year: i16,
    start_month: i8,
    end_year: i16,
    end_month: i8,
    rng: &mut R,
) -> Result<Date, SynthError>
where
    R: Rng + ?Sized,
{
    let start = Date::new(start_year, start_month, 1)?;
    let end = Date::new(end_year, end_month, 1)?.last_of_month();
    if start > end {
        return Err(SynthError::InvalidDateRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let days = i64::from(start.until(end)?.get_days());
    let offset = rng.random_range(0..=days);
    Ok(start.checked_add(offset.days())?)
}

/// True with probability `p`. Values outside `[0, 1]` saturate.
pub fn coin_flip<R>(p: f64, rng: &mut R) -> bool
where
    R: Rng + ?Sized,
{
    rng.random::<f64>() < p
}

/// Keep each tag independently with probability `retention`.
pub fn retain_tags<R>(candidates: &[String], retention: f64, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    candidates
        .iter()
        .filter(|_| coin_flip(retention, rng))
        .cloned()
        .collect()
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
