use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serializer;

// ─── Policy constants ────────────────────────────────────────────

/// Every reported real is rounded to hundredths.
pub const DECIMAL_PLACES: u32 = 2;

/// Midpoints round away from zero (2.345 → 2.35, -2.345 → -2.35).
pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// The percentile estimator the reducer reports.
pub const P95_POLICY: PercentilePolicy = PercentilePolicy::Linear;

/// 0.95 as an exact decimal.
pub const P95: Decimal = Decimal::from_parts(95, 0, 0, false, 2);

// ─── Percentile estimators ───────────────────────────────────────

/// The two estimators found in the wild. They disagree on the same input,
/// so only [`P95_POLICY`] is part of the service contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentilePolicy {
    /// Fractional rank `q·(n−1)`, interpolated between its neighbours.
    Linear,
    /// 1-indexed rank `ceil(q·n)`, clamped to the last element.
    NearestRank,
}

/// Percentile `q` (a fraction in `[0, 1]`) of an ascending slice.
/// Returns `None` for an empty slice or if interpolation overflows.
pub fn percentile(sorted: &[Decimal], q: Decimal, policy: PercentilePolicy) -> Option<Decimal> {
    let last = sorted.len().checked_sub(1)?;

    match policy {
        PercentilePolicy::Linear => {
            let rank = q * Decimal::from(last);
            let lo = rank.floor().to_usize()?.min(last);
            let hi = rank.ceil().to_usize()?.min(last);
            if lo == hi {
                return Some(sorted[lo]);
            }
            let frac = rank.checked_sub(Decimal::from(lo))?;
            let step = sorted[hi].checked_sub(sorted[lo])?.checked_mul(frac)?;
            sorted[lo].checked_add(step)
        }
        PercentilePolicy::NearestRank => {
            let k = (q * Decimal::from(sorted.len())).ceil().to_usize()?;
            Some(sorted[k.saturating_sub(1).min(last)])
        }
    }
}

// ─── Exact arithmetic ────────────────────────────────────────────

/// Lift an `f64` into an exact decimal using its shortest round-trip
/// representation, so `99.9` becomes exactly `99.9` and not
/// `99.900000000000005684…`. Non-finite or out-of-range values yield `None`.
pub fn exact(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(&value.to_string()).ok()
}

/// Unrounded arithmetic mean. `None` when empty.
///
/// When the plain sum leaves the decimal range the mean is taken as the
/// sum of `v / n` instead; each term is bounded by `|v|`. Only inputs within
/// a rounding step of `Decimal::MAX` can still yield `None`.
pub fn mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let n = Decimal::from(values.len());
    match values
        .iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))
    {
        Some(sum) => sum.checked_div(n),
        None => values
            .iter()
            .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v.checked_div(n)?)),
    }
}

/// Apply the reporting rounding rule.
pub fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, ROUNDING)
}

/// Serialize a decimal as a JSON number via its decimal text, so `99.73`
/// is emitted as `99.73` rather than a nearby float.
pub fn serialize_as_f64<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    let float = f64::from_str(&value.to_string()).map_err(serde::ser::Error::custom)?;
    serializer.serialize_f64(float)
}
