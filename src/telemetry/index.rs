use std::collections::HashMap;

use serde::Serialize;

use super::numeric;
use super::{normalize_region, Sample};
use crate::error::{Result, TelemetryError};

/// Immutable grouping of samples by normalized region key.
///
/// Built once before the server accepts traffic and then shared behind an
/// `Arc`; there is no writer after construction so readers need no lock.
#[derive(Debug)]
pub struct RegionIndex {
    buckets: HashMap<String, Vec<Sample>>,
    total: usize,
}

/// Catalogue entry returned by [`RegionIndex::regions`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionSummary {
    pub region: String,
    pub samples: usize,
}

impl RegionIndex {
    /// Group `samples` by region, preserving source order within a bucket.
    ///
    /// Fails on the first sample whose numbers could never be reduced
    /// (non-finite or out-of-range values, negative latency) so a bad
    /// dataset is caught at startup instead of on some later request.
    pub fn build(samples: Vec<Sample>) -> Result<Self> {
        let total = samples.len();
        let mut buckets: HashMap<String, Vec<Sample>> = HashMap::new();

        for (position, sample) in samples.into_iter().enumerate() {
            validate(position, &sample)?;
            buckets
                .entry(normalize_region(&sample.region))
                .or_default()
                .push(sample);
        }

        Ok(Self { buckets, total })
    }

    /// All samples for `region`, in source order. Empty when unknown.
    pub fn lookup(&self, region: &str) -> &[Sample] {
        self.buckets
            .get(&normalize_region(region))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Known regions with their sample counts, sorted by key.
    pub fn regions(&self) -> Vec<RegionSummary> {
        let mut out: Vec<RegionSummary> = self
            .buckets
            .iter()
            .map(|(region, samples)| RegionSummary {
                region: region.clone(),
                samples: samples.len(),
            })
            .collect();
        out.sort_by(|a, b| a.region.cmp(&b.region));
        out
    }

    pub fn region_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of indexed samples across all regions.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

fn validate(position: usize, sample: &Sample) -> Result<()> {
    if !sample.latency_ms.is_finite() || !sample.uptime_pct.is_finite() {
        return Err(TelemetryError::DataIntegrity(format!(
            "sample {position} in region '{}' has a non-finite value",
            sample.region
        )));
    }
    if sample.latency_ms < 0.0 {
        return Err(TelemetryError::DataIntegrity(format!(
            "sample {position} in region '{}' has negative latency {}",
            sample.region, sample.latency_ms
        )));
    }
    for (field, value) in [("latency_ms", sample.latency_ms), ("uptime_pct", sample.uptime_pct)] {
        if numeric::exact(value).is_none() {
            return Err(TelemetryError::DataIntegrity(format!(
                "sample {position} in region '{}' has {field} = {value} outside the decimal range",
                sample.region
            )));
        }
    }
    Ok(())
}
