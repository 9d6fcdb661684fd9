use rust_decimal::Decimal;
use serde::Serialize;

use super::numeric::{self, P95_POLICY};
use super::Sample;
use crate::error::{Result, TelemetryError};

/// Aggregates for one region. Reals are already rounded to two places;
/// they serialize as plain JSON numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricResult {
    #[serde(serialize_with = "numeric::serialize_as_f64")]
    pub avg_latency_ms: Decimal,
    #[serde(serialize_with = "numeric::serialize_as_f64")]
    pub p95_latency_ms: Decimal,
    #[serde(serialize_with = "numeric::serialize_as_f64")]
    pub average_uptime_pct: Decimal,
    /// Samples whose latency is strictly above the threshold.
    pub breaches: u64,
}

/// Reduce one region's samples against `threshold_ms`.
///
/// All arithmetic is exact decimal; the mean and the p95 are rounded
/// half-up to hundredths only at the end. Fails with `InvalidArgument` on an
/// empty slice and with `DataIntegrity` if a value cannot be represented.
pub fn reduce(samples: &[Sample], threshold_ms: i64) -> Result<MetricResult> {
    if samples.is_empty() {
        return Err(TelemetryError::InvalidArgument(
            "cannot reduce an empty sample set".into(),
        ));
    }

    let mut latencies = Vec::with_capacity(samples.len());
    let mut uptimes = Vec::with_capacity(samples.len());
    for sample in samples {
        latencies.push(to_exact(sample, "latency_ms", sample.latency_ms)?);
        uptimes.push(to_exact(sample, "uptime_pct", sample.uptime_pct)?);
    }

    let threshold = Decimal::from(threshold_ms);
    let breaches = latencies.iter().filter(|l| **l > threshold).count() as u64;

    let avg_latency = numeric::mean(&latencies).ok_or_else(|| overflow(samples))?;
    let avg_uptime = numeric::mean(&uptimes).ok_or_else(|| overflow(samples))?;

    latencies.sort_unstable();
    let p95 = numeric::percentile(&latencies, numeric::P95, P95_POLICY)
        .ok_or_else(|| overflow(samples))?;

    Ok(MetricResult {
        avg_latency_ms: numeric::round(avg_latency),
        p95_latency_ms: numeric::round(p95),
        average_uptime_pct: numeric::round(avg_uptime),
        breaches,
    })
}

fn to_exact(sample: &Sample, field: &str, value: f64) -> Result<Decimal> {
    numeric::exact(value).ok_or_else(|| {
        TelemetryError::DataIntegrity(format!(
            "{field} = {value} in region '{}' is not a representable number",
            sample.region
        ))
    })
}

fn overflow(samples: &[Sample]) -> TelemetryError {
    TelemetryError::DataIntegrity(format!(
        "aggregate over {} samples of region '{}' exceeds the decimal range",
        samples.len(),
        samples[0].region
    ))
}
