use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use super::{reduce, MetricResult, RegionIndex};
use crate::error::Result;

/// Inbound request body for `POST /api/latency`.
#[derive(Debug, Clone, Deserialize)]
pub struct LatencyQuery {
    pub regions: Vec<String>,
    /// Negative values are accepted; they simply count almost everything.
    pub threshold_ms: i64,
}

/// Requested identifier (caller's casing) → metrics. Sorted for stable output.
pub type RegionReport = BTreeMap<String, MetricResult>;

/// Answer a query against the index.
///
/// Regions without samples are left out of the report. The first
/// reduction failure fails the whole query.
pub fn summarize(index: &RegionIndex, query: &LatencyQuery) -> Result<RegionReport> {
    let mut report = RegionReport::new();

    for region in &query.regions {
        if report.contains_key(region) {
            continue;
        }
        let samples = index.lookup(region);
        if samples.is_empty() {
            debug!(region = %region, "no samples, skipping");
            continue;
        }
        report.insert(region.clone(), reduce(samples, query.threshold_ms)?);
    }

    Ok(report)
}
